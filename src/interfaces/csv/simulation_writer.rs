use crate::domain::simulation::Simulation;
use crate::error::Result;
use std::io::Write;

/// Writes the simulation log as CSV to any `Write` sink.
pub struct SimulationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SimulationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_simulations(&mut self, simulations: Vec<Simulation>) -> Result<()> {
        for simulation in simulations {
            self.writer.serialize(simulation)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
