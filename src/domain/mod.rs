pub mod client;
pub mod command;
pub mod dni;
pub mod loan;
pub mod ports;
pub mod simulation;
