use crate::domain::client::Client;
use crate::domain::dni::Dni;
use crate::domain::loan::LoanTerms;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;

/// A recorded loan simulation: the client it was run for, the inputs,
/// and the computed repayment figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub client_id: Dni,
    pub tae: Decimal,
    #[serde(rename = "term")]
    pub term_years: u32,
    pub monthly_payment: Decimal,
    pub total_amount: Decimal,
}

impl Simulation {
    /// Runs a simulation for a client, borrowing the client's stored
    /// capital as principal.
    pub fn for_client(client: &Client, tae: Decimal, term_years: i64) -> Result<Self> {
        let terms = LoanTerms::new(client.capital, tae, term_years)?;
        let schedule = terms.schedule()?;
        Ok(Self {
            client_id: client.dni.clone(),
            tae,
            term_years: terms.term_years(),
            monthly_payment: schedule.monthly_payment,
            total_amount: schedule.total_amount,
        })
    }
}
