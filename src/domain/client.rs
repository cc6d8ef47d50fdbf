use crate::domain::dni::Dni;
use crate::error::{Result, SimulationError};
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidateEmail;

/// A registered client. `capital` is the amount the client wants to
/// borrow and becomes the principal of any simulation run for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub dni: Dni,
    pub name: String,
    pub email: String,
    pub capital: Decimal,
}

/// Field-wise update of a client record. Only name, email and capital
/// may change; the DNI is the identity and is immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub capital: Option<Decimal>,
}

impl Client {
    pub fn new(dni: Dni, name: String, email: String, capital: Decimal) -> Result<Self> {
        validate_name(&name)?;
        validate_email(&email)?;
        validate_capital(capital)?;
        Ok(Self {
            dni,
            name,
            email,
            capital,
        })
    }

    /// Applies an update, validating each present field.
    pub fn apply(&mut self, update: ClientUpdate) -> Result<()> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(email) = update.email {
            validate_email(&email)?;
            self.email = email;
        }
        if let Some(capital) = update.capital {
            validate_capital(capital)?;
            self.capital = capital;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SimulationError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    if !email.validate_email() {
        return Err(SimulationError::ValidationError(format!(
            "invalid email: {email}"
        )));
    }
    Ok(())
}

fn validate_capital(capital: Decimal) -> Result<()> {
    if capital <= Decimal::ZERO {
        return Err(SimulationError::ValidationError(
            "capital must be a positive amount".to_string(),
        ));
    }
    Ok(())
}
