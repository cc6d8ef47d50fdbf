use super::client::Client;
use super::dni::Dni;
use super::simulation::Simulation;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn store(&self, client: Client) -> Result<()>;
    async fn get(&self, dni: &Dni) -> Result<Option<Client>>;
    async fn remove(&self, dni: &Dni) -> Result<bool>;
}

#[async_trait]
pub trait SimulationStore: Send + Sync {
    async fn store(&self, simulation: Simulation) -> Result<()>;
    async fn all(&self) -> Result<Vec<Simulation>>;
}

pub type ClientStoreBox = Box<dyn ClientStore>;
pub type SimulationStoreBox = Box<dyn SimulationStore>;
