use async_trait::async_trait;
use ledger_actor::{ActorEntity, FrameworkError, KvStore, MemoryStore, ResourceActor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Shelf {
    venue: String,
    name: String,
    stock: i64,
    label: Option<String>,
}

#[derive(Debug)]
struct ShelfCreate {
    venue: String,
    name: String,
}

#[derive(Debug)]
struct ShelfUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum ShelfAction {
    Restock(i64),
    Take(i64),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum ShelfError {
    #[error("Shelf name is empty")]
    EmptyName,
    #[error("Cannot take {0}")]
    NegativeTake(i64),
}

#[async_trait]
impl ActorEntity for Shelf {
    const KIND: &'static str = "shelf";
    type Id = String;
    type Create = ShelfCreate;
    type Update = ShelfUpdate;
    type Action = ShelfAction;
    type ActionResult = i64;
    type Context = ();
    type Error = ShelfError;

    fn id(&self) -> String {
        format!("{}:{}", self.venue, self.name)
    }

    fn from_create_params(params: ShelfCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(ShelfError::EmptyName);
        }
        Ok(Self {
            venue: params.venue,
            name: params.name,
            stock: 0,
            label: None,
        })
    }

    fn seed(id: &String, _action: &ShelfAction) -> Option<Self> {
        let (venue, name) = id.split_once(':')?;
        Some(Self {
            venue: venue.to_string(),
            name: name.to_string(),
            stock: 0,
            label: None,
        })
    }

    async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = Some(label);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<i64, Self::Error> {
        match action {
            ShelfAction::Restock(n) => self.stock += n,
            ShelfAction::Take(n) if n < 0 => return Err(ShelfError::NegativeTake(n)),
            ShelfAction::Take(n) => self.stock -= n,
        }
        Ok(self.stock)
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let store = Arc::new(MemoryStore::new());
    let (actor, client) = ResourceActor::<Shelf>::new(10, store.clone());
    tokio::spawn(actor.run(()));

    // 1. Create
    let id = client
        .create(ShelfCreate {
            venue: "v1".into(),
            name: "flour".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, "v1:flour");
    assert!(store.get("shelf:v1:flour").await.unwrap().is_some());

    // 2. Duplicate key is rejected
    let duplicate = client
        .create(ShelfCreate {
            venue: "v1".into(),
            name: "flour".into(),
        })
        .await;
    assert!(matches!(duplicate, Err(FrameworkError::AlreadyExists(key)) if key == "shelf:v1:flour"));

    // 3. Actions persist
    assert_eq!(client.perform_action(id.clone(), ShelfAction::Restock(100)).await.unwrap(), 100);
    assert_eq!(client.perform_action(id.clone(), ShelfAction::Take(40)).await.unwrap(), 60);
    assert_eq!(client.get(id.clone()).await.unwrap().unwrap().stock, 60);

    // 4. Failed action leaves the record untouched
    let err = client
        .perform_action(id.clone(), ShelfAction::Take(-1))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<ShelfError>().unwrap(), ShelfError::NegativeTake(-1));
    assert_eq!(client.get(id.clone()).await.unwrap().unwrap().stock, 60);

    // 5. Update
    let updated = client
        .update(
            id.clone(),
            ShelfUpdate {
                label: Some("dry goods".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label.as_deref(), Some("dry goods"));

    // 6. List is scoped
    client
        .perform_action("v2:sugar".to_string(), ShelfAction::Restock(1))
        .await
        .unwrap();
    assert_eq!(client.list("v1").await.unwrap().len(), 1);
    assert_eq!(client.list("v2").await.unwrap().len(), 1);

    // 7. Delete
    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id.clone()).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_create_validation_error_is_recoverable() {
    let (actor, client) = ResourceActor::<Shelf>::new(10, Arc::new(MemoryStore::new()));
    tokio::spawn(actor.run(()));

    let err = client
        .create(ShelfCreate {
            venue: "v1".into(),
            name: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<ShelfError>().unwrap(), ShelfError::EmptyName);
}

#[tokio::test]
async fn test_concurrent_actions_do_not_lose_updates() {
    let (actor, client) = ResourceActor::<Shelf>::new(64, Arc::new(MemoryStore::new()));
    tokio::spawn(actor.run(()));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .perform_action("v1:salt".to_string(), ShelfAction::Take(2))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let shelf = client.get("v1:salt".to_string()).await.unwrap().unwrap();
    assert_eq!(shelf.stock, -100);
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Shelf>::new(1, Arc::new(MemoryStore::new()));
    drop(actor);

    let result = client.get("v1:flour".to_string()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
