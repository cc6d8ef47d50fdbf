use loansim::application::engine::{NewClient, SimulationEngine};
use loansim::domain::client::{Client, ClientUpdate};
use loansim::domain::dni::Dni;
use loansim::domain::ports::{ClientStoreBox, SimulationStoreBox};
use loansim::error::SimulationError;
use loansim::infrastructure::in_memory::{InMemoryClientStore, InMemorySimulationStore};
use rust_decimal_macros::dec;

fn engine() -> SimulationEngine {
    SimulationEngine::new(
        Box::new(InMemoryClientStore::new()),
        Box::new(InMemorySimulationStore::new()),
    )
}

fn john() -> NewClient {
    NewClient {
        dni: "36300558A".to_string(),
        name: "John Doe".to_string(),
        email: "johndoe@email.com".to_string(),
        capital: dec!(1000),
    }
}

#[tokio::test]
async fn test_stores_as_trait_objects() {
    let client_store: ClientStoreBox = Box::new(InMemoryClientStore::new());
    let simulation_store: SimulationStoreBox = Box::new(InMemorySimulationStore::new());

    let dni = Dni::parse("36300558A").unwrap();
    let client = Client::new(
        dni.clone(),
        "John Doe".to_string(),
        "johndoe@email.com".to_string(),
        dec!(1000),
    )
    .unwrap();

    // Verify Send + Sync by spawning a task
    let handle = tokio::spawn(async move {
        client_store.store(client).await.unwrap();
        client_store.get(&dni).await.unwrap().unwrap()
    });
    let retrieved = handle.await.unwrap();
    assert_eq!(retrieved.dni.as_str(), "36300558A");

    assert!(simulation_store.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_lifecycle() {
    let engine = engine();
    engine.register_client(john()).await.unwrap();

    let fetched = engine.client("36300558A").await.unwrap();
    assert_eq!(fetched.email, "johndoe@email.com");

    // Lowercase checksum letter resolves to the same client
    let fetched = engine.client("36300558a").await.unwrap();
    assert_eq!(fetched.name, "John Doe");

    engine
        .update_client(
            "36300558A",
            ClientUpdate {
                email: Some("john@doe.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(engine.client("36300558A").await.unwrap().email, "john@doe.com");

    engine.remove_client("36300558A").await.unwrap();
    assert!(matches!(
        engine.client("36300558A").await,
        Err(SimulationError::ClientNotFound(_))
    ));
}

#[tokio::test]
async fn test_simulations_accumulate_in_order() {
    let engine = engine();
    engine.register_client(john()).await.unwrap();

    engine.simulate("36300558A", dec!(3.2), 1).await.unwrap();
    engine.simulate("36300558A", dec!(0), 1).await.unwrap();
    engine.simulate("36300558A", dec!(2.75), 30).await.unwrap();

    let results = engine.into_results().await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].monthly_payment, dec!(84.78));
    assert_eq!(results[1].monthly_payment, dec!(83.33));
    assert_eq!(results[2].term_years, 30);
}

#[tokio::test]
async fn test_failed_simulation_leaves_no_record() {
    let engine = engine();
    engine.register_client(john()).await.unwrap();

    assert!(engine.simulate("36300558A", dec!(-1), 1).await.is_err());
    assert!(engine.simulate("36300558A", dec!(3.2), -5).await.is_err());

    let results = engine.into_results().await.unwrap();
    assert!(results.is_empty());
}
