pub mod command_reader;
pub mod simulation_writer;
