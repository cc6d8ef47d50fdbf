use crate::error::{Result, SimulationError};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::Serialize;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Currency amounts carry two decimal places, rounded half away from
/// zero. On the positive amounts handled here this matches rounding
/// half up.
const CURRENCY_SCALE: u32 = 2;

/// Validated terms of a fixed-rate, fully-amortizing loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    principal: Decimal,
    annual_rate: Decimal,
    term_years: u32,
}

/// The derived repayment figures: the fixed monthly installment and
/// the total repaid across the whole term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSchedule {
    pub monthly_payment: Decimal,
    pub total_amount: Decimal,
}

impl LoanTerms {
    /// Builds loan terms, rejecting anything outside the supported
    /// domain: the principal must be positive, the annual nominal rate
    /// (in percent, e.g. 3.2 for 3.2%) non-negative, and the term a
    /// positive whole number of years.
    pub fn new(principal: Decimal, annual_rate: Decimal, term_years: i64) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(SimulationError::InvalidInput(
                "principal must be positive".to_string(),
            ));
        }
        if annual_rate < Decimal::ZERO {
            return Err(SimulationError::InvalidInput(
                "annual rate must not be negative".to_string(),
            ));
        }
        let term_years = u32::try_from(term_years).map_err(|_| {
            SimulationError::InvalidInput("term must be a positive number of years".to_string())
        })?;
        if term_years == 0 {
            return Err(SimulationError::InvalidInput(
                "term must be a positive number of years".to_string(),
            ));
        }
        // The year-to-month conversion must not wrap
        term_years.checked_mul(MONTHS_PER_YEAR).ok_or_else(|| {
            SimulationError::InvalidInput("term is too long".to_string())
        })?;

        Ok(Self {
            principal,
            annual_rate,
            term_years,
        })
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// Number of monthly installments over the term.
    pub fn periods(&self) -> u32 {
        self.term_years * MONTHS_PER_YEAR
    }

    /// Fixed monthly installment, rounded to two decimal places
    /// (half away from zero).
    ///
    /// Uses the standard amortization formula
    /// `p * i * (1+i)^n / ((1+i)^n - 1)` with the monthly periodic
    /// rate `i` and `n` installments. A zero-rate loan degenerates the
    /// formula to `0 / 0` and is special-cased to `p / n`.
    pub fn monthly_payment(&self) -> Result<Decimal> {
        let n = self.periods();

        if self.annual_rate.is_zero() {
            return Ok(to_currency(self.principal / Decimal::from(n)));
        }

        let monthly_rate =
            self.annual_rate / (Decimal::ONE_HUNDRED * Decimal::from(MONTHS_PER_YEAR));
        let compounding = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(n))
            .ok_or_else(overflow)?;
        let raw = self
            .principal
            .checked_mul(monthly_rate)
            .and_then(|p| p.checked_mul(compounding))
            .and_then(|p| p.checked_div(compounding - Decimal::ONE))
            .ok_or_else(overflow)?;

        Ok(to_currency(raw))
    }

    /// Full schedule for these terms. The total deliberately
    /// multiplies the *rounded* installment by the number of periods:
    /// it is the amount a borrower actually pays across the term, not
    /// the unrounded product.
    pub fn schedule(&self) -> Result<PaymentSchedule> {
        let monthly_payment = self.monthly_payment()?;
        let total_amount = monthly_payment
            .checked_mul(Decimal::from(self.periods()))
            .ok_or_else(overflow)?;

        Ok(PaymentSchedule {
            monthly_payment,
            total_amount,
        })
    }
}

fn to_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // Pad to the currency scale so 100 renders as 100.00
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

fn overflow() -> SimulationError {
    SimulationError::InvalidInput("amortization result out of range".to_string())
}
