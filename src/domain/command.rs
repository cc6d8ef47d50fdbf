use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Client,
    Simulation,
    Update,
    Delete,
}

/// One row of the batch interface. Which optional columns are
/// required depends on the operation; the engine enforces that when
/// executing, the reader only checks the shape.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: OpKind,
    pub dni: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub capital: Option<Decimal>,
    pub tae: Option<Decimal>,
    pub term: Option<i64>,
}
