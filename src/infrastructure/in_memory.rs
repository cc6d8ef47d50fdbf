use crate::domain::client::Client;
use crate::domain::dni::Dni;
use crate::domain::ports::{ClientStore, SimulationStore};
use crate::domain::simulation::Simulation;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for client records, keyed by DNI.
///
/// Uses `Arc<RwLock<HashMap<..>>>` to allow shared concurrent access.
#[derive(Default, Clone)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<Dni, Client>>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn store(&self, client: Client) -> Result<()> {
        let mut clients = self.clients.write().await;
        clients.insert(client.dni.clone(), client);
        Ok(())
    }

    async fn get(&self, dni: &Dni) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(dni).cloned())
    }

    async fn remove(&self, dni: &Dni) -> Result<bool> {
        let mut clients = self.clients.write().await;
        Ok(clients.remove(dni).is_some())
    }
}

/// A thread-safe in-memory simulation log, preserving insertion
/// order so batch output is deterministic.
#[derive(Default, Clone)]
pub struct InMemorySimulationStore {
    simulations: Arc<RwLock<Vec<Simulation>>>,
}

impl InMemorySimulationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SimulationStore for InMemorySimulationStore {
    async fn store(&self, simulation: Simulation) -> Result<()> {
        let mut simulations = self.simulations.write().await;
        simulations.push(simulation);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Simulation>> {
        let simulations = self.simulations.read().await;
        Ok(simulations.clone())
    }
}
