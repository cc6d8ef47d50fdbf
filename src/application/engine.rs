use crate::domain::client::{Client, ClientUpdate};
use crate::domain::command::{Command, OpKind};
use crate::domain::dni::Dni;
use crate::domain::ports::{ClientStoreBox, SimulationStoreBox};
use crate::domain::simulation::Simulation;
use crate::error::{Result, SimulationError};
use rust_decimal::Decimal;
use tracing::debug;

/// The data a `client` operation must carry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub dni: String,
    pub name: String,
    pub email: String,
    pub capital: Decimal,
}

/// The main entry point of the loan simulator.
///
/// `SimulationEngine` owns the storage backends and awaits every
/// storage operation before returning, so a batch of commands is
/// applied with sequential consistency.
pub struct SimulationEngine {
    client_store: ClientStoreBox,
    simulation_store: SimulationStoreBox,
}

impl SimulationEngine {
    pub fn new(client_store: ClientStoreBox, simulation_store: SimulationStoreBox) -> Self {
        Self {
            client_store,
            simulation_store,
        }
    }

    /// Registers a new client. The DNI checksum is verified and the
    /// DNI must not already be registered.
    pub async fn register_client(&self, new_client: NewClient) -> Result<Client> {
        let dni = Dni::parse(&new_client.dni)?;
        if self.client_store.get(&dni).await?.is_some() {
            return Err(SimulationError::ClientAlreadyExists(dni.to_string()));
        }

        let client = Client::new(dni, new_client.name, new_client.email, new_client.capital)?;
        self.client_store.store(client.clone()).await?;
        debug!(dni = %client.dni, "registered client");
        Ok(client)
    }

    /// Fetches a client by DNI.
    pub async fn client(&self, dni: &str) -> Result<Client> {
        let dni = Dni::parse(dni)?;
        self.client_store
            .get(&dni)
            .await?
            .ok_or_else(|| SimulationError::ClientNotFound(dni.to_string()))
    }

    /// Updates name, email and/or capital of an existing client.
    pub async fn update_client(&self, dni: &str, update: ClientUpdate) -> Result<Client> {
        let mut client = self.client(dni).await?;
        client.apply(update)?;
        self.client_store.store(client.clone()).await?;
        debug!(dni = %client.dni, "updated client");
        Ok(client)
    }

    /// Removes a client by DNI.
    pub async fn remove_client(&self, dni: &str) -> Result<()> {
        let dni = Dni::parse(dni)?;
        if !self.client_store.remove(&dni).await? {
            return Err(SimulationError::ClientNotFound(dni.to_string()));
        }
        debug!(%dni, "removed client");
        Ok(())
    }

    /// Runs a loan simulation for a registered client, using the
    /// client's stored capital as principal, and records the result.
    pub async fn simulate(&self, dni: &str, tae: Decimal, term_years: i64) -> Result<Simulation> {
        let client = self.client(dni).await?;
        let simulation = Simulation::for_client(&client, tae, term_years)?;
        self.simulation_store.store(simulation.clone()).await?;
        debug!(
            dni = %simulation.client_id,
            monthly = %simulation.monthly_payment,
            "recorded simulation"
        );
        Ok(simulation)
    }

    /// Applies one batch command, enforcing the per-operation
    /// required fields.
    pub async fn execute(&self, cmd: Command) -> Result<()> {
        match cmd.op {
            OpKind::Client => {
                let new_client = NewClient {
                    dni: cmd.dni,
                    name: cmd.name.ok_or_else(|| required("name"))?,
                    email: cmd.email.ok_or_else(|| required("email"))?,
                    capital: cmd.capital.ok_or_else(|| required("capital"))?,
                };
                self.register_client(new_client).await?;
            }
            OpKind::Simulation => {
                let tae = cmd.tae.ok_or_else(|| required("tae"))?;
                let term = cmd.term.ok_or_else(|| required("term"))?;
                self.simulate(&cmd.dni, tae, term).await?;
            }
            OpKind::Update => {
                let update = ClientUpdate {
                    name: cmd.name,
                    email: cmd.email,
                    capital: cmd.capital,
                };
                self.update_client(&cmd.dni, update).await?;
            }
            OpKind::Delete => {
                self.remove_client(&cmd.dni).await?;
            }
        }
        Ok(())
    }

    /// Consumes the engine and returns the recorded simulations in
    /// insertion order.
    pub async fn into_results(self) -> Result<Vec<Simulation>> {
        self.simulation_store.all().await
    }
}

fn required(field: &str) -> SimulationError {
    SimulationError::ValidationError(format!("{field} is required"))
}
