use ledger_actor::MemoryStore;
use pos_engine::api::{Request, Response};
use pos_engine::config::EngineConfig;
use pos_engine::error::PosError;
use pos_engine::lifecycle::PosSystem;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;

fn request(value: serde_json::Value) -> Request {
    serde_json::from_value(value).expect("valid request")
}

#[tokio::test]
async fn test_service_flow_through_tagged_requests() {
    let system = PosSystem::new(EngineConfig::default(), Arc::new(MemoryStore::new()));

    let Response::Registered { restaurant_id } = system
        .handle(request(json!({
            "op": "register",
            "email": "owner@bistro.test",
            "password": "secret",
            "name": "Bistro",
            "payment_token": "PAID"
        })))
        .await
        .unwrap()
    else {
        panic!("expected Registered");
    };

    let Response::ProductCreated { product_id } = system
        .handle(request(json!({
            "op": "createProduct",
            "restaurant_id": restaurant_id,
            "name": "Lasagne",
            "price": "14.00",
            "category": "food"
        })))
        .await
        .unwrap()
    else {
        panic!("expected ProductCreated");
    };

    let placed = system
        .handle(request(json!({
            "op": "placeOrder",
            "restaurant_id": restaurant_id,
            "table_number": 5,
            "items": [{
                "product_id": product_id,
                "name": "Lasagne",
                "quantity": 2,
                "unit_price": "14.00",
                "category": "food"
            }]
        })))
        .await
        .unwrap();
    assert!(matches!(placed, Response::OrderPlaced { .. }));

    let Response::Orders { orders } = system
        .handle(request(json!({
            "op": "listTableOrders",
            "restaurant_id": restaurant_id,
            "table_number": 5
        })))
        .await
        .unwrap()
    else {
        panic!("expected Orders");
    };
    assert_eq!(orders.len(), 1);

    let closed = system
        .handle(request(json!({
            "op": "closeTable",
            "restaurant_id": restaurant_id,
            "table_number": 5,
            "subtotal": "28.00"
        })))
        .await
        .unwrap();
    let closed = serde_json::to_value(closed).unwrap();
    assert_eq!(closed["kind"], "tableClosed");
    let amount: Decimal = closed["amount"].as_str().unwrap().parse().unwrap();
    assert_eq!(amount, Decimal::new(308, 1));
    assert_eq!(closed["record"]["count"], 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_requests_are_rejected_at_the_boundary() {
    let system = PosSystem::new(EngineConfig::default(), Arc::new(MemoryStore::new()));

    let err = system
        .handle(request(json!({
            "op": "register",
            "email": "",
            "password": "secret",
            "name": "Bistro",
            "payment_token": "PAID"
        })))
        .await
        .unwrap_err();
    assert_eq!(err, PosError::ValidationError("email is required".into()));

    let err = system
        .handle(request(json!({
            "op": "placeOrder",
            "restaurant_id": "r1",
            "table_number": 3,
            "items": []
        })))
        .await
        .unwrap_err();
    assert_eq!(err, PosError::ValidationError("items are required".into()));

    let err = system
        .handle(request(json!({
            "op": "adjustInventory",
            "restaurant_id": "r1",
            "ingredient": "",
            "delta": "1",
            "unit": "kg"
        })))
        .await
        .unwrap_err();
    assert!(matches!(err, PosError::ValidationError(_)));
}

#[test]
fn test_unknown_op_does_not_parse() {
    let parsed = serde_json::from_value::<Request>(json!({"op": "dropTables", "restaurant_id": "r1"}));
    assert!(parsed.is_err());
}

#[test]
fn test_errors_serialize_with_a_tag() {
    let value = serde_json::to_value(PosError::NotFound("table:r1:11".into())).unwrap();
    assert_eq!(value, json!({"error": "NotFound", "detail": "table:r1:11"}));
}
