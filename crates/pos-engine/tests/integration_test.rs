use ledger_actor::{KvStore, MemoryStore};
use pos_engine::config::EngineConfig;
use pos_engine::error::PosError;
use pos_engine::events::LedgerEvent;
use pos_engine::lifecycle::PosSystem;
use pos_engine::model::{
    Category, IngredientRequirement, LineItem, OrderStatus, ProductId, RestaurantId,
};
use rust_decimal::Decimal;
use std::sync::Arc;

fn start() -> (PosSystem, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (PosSystem::new(EngineConfig::default(), store.clone()), store)
}

async fn signup(system: &PosSystem) -> RestaurantId {
    system
        .register("owner@bistro.test", "secret", "Bistro", "PAID")
        .await
        .expect("signup")
}

fn line(product: &ProductId, name: &str, quantity: u32, cents: i64, category: Category) -> LineItem {
    LineItem {
        product_id: product.clone(),
        name: name.into(),
        quantity,
        unit_price: Decimal::new(cents, 2),
        category,
    }
}

fn soup(quantity: u32) -> LineItem {
    line(&ProductId::from("soup"), "Soup", quantity, 650, Category::Food)
}

#[tokio::test]
async fn test_signup_provisions_ten_empty_tables() {
    let (system, store) = start();
    let id = signup(&system).await;

    let mut tables = system.list_tables(&id).await.unwrap();
    tables.sort_by_key(|t| t.number);
    assert_eq!(
        tables.iter().map(|t| t.number).collect::<Vec<_>>(),
        (1..=10).collect::<Vec<_>>()
    );
    assert!(tables.iter().all(|t| t.order_ids.is_empty()));

    let index = store
        .get("restaurant-email-index:owner@bistro.test")
        .await
        .unwrap()
        .expect("email index stored");
    assert_eq!(index["restaurant_id"], id.as_str());
    assert!(store.get(&format!("restaurant:{id}")).await.unwrap().is_some());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_signup_requires_payment() {
    let (system, store) = start();
    let err = system
        .register("owner@bistro.test", "secret", "Bistro", "IOU")
        .await
        .unwrap_err();
    assert_eq!(err, PosError::PaymentRequired);
    assert!(store.is_empty().await);

    // The email is still free.
    signup(&system).await;
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (system, store) = start();
    signup(&system).await;
    let keys_before = store.len().await;

    let err = system
        .register("owner@bistro.test", "other", "Other", "PAID")
        .await
        .unwrap_err();
    assert_eq!(err, PosError::DuplicateEmail("owner@bistro.test".into()));
    assert_eq!(store.len().await, keys_before);
}

#[tokio::test]
async fn test_authentication_and_manager_gate() {
    let (system, _) = start();
    let id = signup(&system).await;

    let session = system.authenticate("owner@bistro.test", "secret").await.unwrap();
    assert_eq!(session.restaurant_id, id);
    assert_eq!(session.name, "Bistro");
    assert!(!session.has_manager_password);

    assert_eq!(
        system.authenticate("owner@bistro.test", "Secret").await,
        Err(PosError::InvalidCredentials)
    );
    assert_eq!(
        system.authenticate("nobody@bistro.test", "secret").await,
        Err(PosError::InvalidCredentials)
    );

    system.set_manager_password(&id, "boss").await.unwrap();
    assert!(system
        .authenticate("owner@bistro.test", "secret")
        .await
        .unwrap()
        .has_manager_password);
    system.verify_manager_password(&id, "boss").await.unwrap();
    assert_eq!(
        system.verify_manager_password(&id, "intern").await,
        Err(PosError::Unauthorized)
    );

    let unknown = RestaurantId::from("missing");
    assert!(matches!(
        system.set_manager_password(&unknown, "boss").await,
        Err(PosError::NotFound(_))
    ));
    assert!(matches!(
        system.verify_manager_password(&unknown, "boss").await,
        Err(PosError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_place_order_then_list_table_orders() {
    let (system, _) = start();
    let id = signup(&system).await;

    let order_id = system.place_order(&id, 4, vec![soup(2)]).await.unwrap();
    let orders = system.list_table_orders(&id, 4).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
    assert_eq!(orders[0].status, OrderStatus::Pending);
    assert_eq!(orders[0].items, vec![soup(2)]);
}

#[tokio::test]
async fn test_two_orders_on_one_table() {
    let (system, _) = start();
    let id = signup(&system).await;

    system.place_order(&id, 3, vec![soup(1)]).await.unwrap();
    system.place_order(&id, 3, vec![soup(1)]).await.unwrap();

    assert_eq!(system.list_table_orders(&id, 3).await.unwrap().len(), 2);
    let table = system
        .list_tables(&id)
        .await
        .unwrap()
        .into_iter()
        .find(|t| t.number == 3)
        .unwrap();
    assert_eq!(table.order_ids.len(), 2);
}

#[tokio::test]
async fn test_kitchen_sees_pending_food_only() {
    let (system, _) = start();
    let id = signup(&system).await;
    let cola = line(&ProductId::from("cola"), "Cola", 1, 300, Category::Drink);

    let food = system.place_order(&id, 1, vec![soup(1), cola.clone()]).await.unwrap();
    system.place_order(&id, 2, vec![cola]).await.unwrap();
    let ready = system.place_order(&id, 0, vec![soup(1)]).await.unwrap();
    system.mark_ready(&id, &ready).await.unwrap();

    let kitchen = system.list_kitchen_orders(&id).await.unwrap();
    assert_eq!(kitchen.len(), 1);
    assert_eq!(kitchen[0].id, food);
}

#[tokio::test]
async fn test_mark_ready_is_idempotent() {
    let (system, _) = start();
    let id = signup(&system).await;
    let order_id = system.place_order(&id, 1, vec![soup(1)]).await.unwrap();

    system.mark_ready(&id, &order_id).await.unwrap();
    system.mark_ready(&id, &order_id).await.unwrap();
    let orders = system.list_table_orders(&id, 1).await.unwrap();
    assert_eq!(orders[0].status, OrderStatus::Ready);

    assert!(matches!(
        system.mark_ready(&id, &"missing".into()).await,
        Err(PosError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_line_item() {
    let (system, _) = start();
    let id = signup(&system).await;
    let bread = line(&ProductId::from("bread"), "Bread", 1, 200, Category::Food);
    let order_id = system
        .place_order(&id, 5, vec![soup(1), bread.clone()])
        .await
        .unwrap();

    let order = system.update_line_item(&id, &order_id, 0, 3).await.unwrap();
    assert_eq!(order.items[0].quantity, 3);

    let order = system.update_line_item(&id, &order_id, 0, 0).await.unwrap();
    assert_eq!(order.items, vec![bread]);

    assert!(matches!(
        system.update_line_item(&id, &order_id, 4, 1).await,
        Err(PosError::ValidationError(_))
    ));
    assert!(matches!(
        system.update_line_item(&id, &"missing".into(), 0, 0).await,
        Err(PosError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_complete_order_leaves_tolerated_dangling_id() {
    let (system, _) = start();
    let id = signup(&system).await;
    let order_id = system.place_order(&id, 6, vec![soup(1)]).await.unwrap();

    system.complete_order(&id, &order_id).await.unwrap();
    system.complete_order(&id, &order_id).await.unwrap();

    assert!(system.list_table_orders(&id, 6).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_close_table_books_sale_with_service_charge() {
    let (system, store) = start();
    let id = signup(&system).await;
    let first = system.place_order(&id, 2, vec![soup(1)]).await.unwrap();
    system.place_order(&id, 2, vec![soup(1)]).await.unwrap();

    let closure = system
        .close_table(&id, 2, Decimal::new(1300, 2))
        .await
        .unwrap();
    assert_eq!(closure.amount, Decimal::new(1430, 2));
    assert_eq!(closure.removed.len(), 2);
    assert!(store
        .get(&format!("order:{id}:{first}"))
        .await
        .unwrap()
        .is_none());
    assert!(system.list_table_orders(&id, 2).await.unwrap().is_empty());

    let sales = system.list_sales(&id).await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].date, system.config().today());
    assert_eq!(sales[0].total, Decimal::new(1430, 2));
    assert_eq!(sales[0].count, 1);

    system.close_table(&id, 2, Decimal::from(10)).await.unwrap();
    let sales = system.list_sales(&id).await.unwrap();
    assert_eq!(sales[0].total, Decimal::new(2530, 2));
    assert_eq!(sales[0].count, 2);
}

#[tokio::test]
async fn test_close_unknown_table_records_nothing() {
    let (system, _) = start();
    let id = signup(&system).await;

    assert!(matches!(
        system.close_table(&id, 0, Decimal::ONE).await,
        Err(PosError::NotFound(_))
    ));
    assert!(system.list_sales(&id).await.unwrap().is_empty());
    assert!(matches!(
        system.list_table_orders(&id, 0).await,
        Err(PosError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_order_for_unprovisioned_table_is_kept() {
    let (system, _) = start();
    let id = signup(&system).await;

    let order_id = system.place_order(&id, 42, vec![soup(1)]).await.unwrap();
    let kitchen = system.list_kitchen_orders(&id).await.unwrap();
    assert_eq!(kitchen.len(), 1);
    assert_eq!(kitchen[0].id, order_id);
    assert_eq!(kitchen[0].table_number, 42);

    assert!(matches!(
        system.list_table_orders(&id, 42).await,
        Err(PosError::NotFound(_))
    ));
    assert!(matches!(
        system.close_table(&id, 11, Decimal::ONE).await,
        Err(PosError::NotFound(_))
    ));
    assert!(system.list_sales(&id).await.unwrap().is_empty());
    assert!(system
        .list_tables(&id)
        .await
        .unwrap()
        .iter()
        .all(|table| table.order_ids.is_empty()));
}

#[tokio::test]
async fn test_overflowing_sale_is_rejected_and_sales_keep_working() {
    let (system, _) = start();
    let id = signup(&system).await;
    let other = system
        .register("chef@diner.test", "pw", "Diner", "PAID")
        .await
        .unwrap();
    let order_id = system.place_order(&id, 2, vec![soup(1)]).await.unwrap();

    assert!(matches!(
        system.close_table(&id, 2, Decimal::MAX).await,
        Err(PosError::ValidationError(_))
    ));
    let orders = system.list_table_orders(&id, 2).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
    assert!(system.list_sales(&id).await.unwrap().is_empty());

    let closure = system.close_table(&id, 2, Decimal::from(10)).await.unwrap();
    assert_eq!(closure.amount, Decimal::from(11));
    assert_eq!(closure.removed, vec![order_id]);
    let closure = system.close_table(&other, 5, Decimal::from(20)).await.unwrap();
    assert_eq!(closure.amount, Decimal::from(22));
    assert_eq!(system.list_sales(&other).await.unwrap()[0].count, 1);
}

#[tokio::test]
async fn test_overflowing_ingredient_usage_keeps_the_order() {
    let (system, _) = start();
    let id = signup(&system).await;
    let dough = system
        .create_product(
            &id,
            "Dough",
            Decimal::ONE,
            Category::Food,
            vec![IngredientRequirement {
                name: "flour".into(),
                quantity: Decimal::MAX,
                unit: "g".into(),
            }],
        )
        .await
        .unwrap();

    system
        .place_order(&id, 1, vec![line(&dough, "Dough", 2, 100, Category::Food)])
        .await
        .unwrap();
    assert_eq!(system.list_table_orders(&id, 1).await.unwrap().len(), 1);
    assert!(system.list_inventory(&id).await.unwrap().is_empty());

    system.place_order(&id, 1, vec![soup(1)]).await.unwrap();
    assert_eq!(system.list_table_orders(&id, 1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_overflowing_adjustment_is_rejected_and_inventory_keeps_working() {
    let (system, _) = start();
    let id = signup(&system).await;

    system
        .adjust_inventory(&id, "sugar", Decimal::MAX, "g")
        .await
        .unwrap();
    assert!(matches!(
        system.adjust_inventory(&id, "sugar", Decimal::MAX, "g").await,
        Err(PosError::ValidationError(_))
    ));

    let item = system
        .adjust_inventory(&id, "sugar", Decimal::from(-1), "g")
        .await
        .unwrap();
    assert_eq!(item.quantity, Decimal::MAX - Decimal::ONE);
    let item = system
        .adjust_inventory(&id, "salt", Decimal::ONE, "g")
        .await
        .unwrap();
    assert_eq!(item.quantity, Decimal::ONE);
}

#[tokio::test]
async fn test_inventory_round_trip_and_deduction() {
    let (system, _) = start();
    let id = signup(&system).await;

    system
        .adjust_inventory(&id, "tomato", Decimal::from(100), "pcs")
        .await
        .unwrap();
    let item = system
        .adjust_inventory(&id, "tomato", Decimal::from(-40), "pcs")
        .await
        .unwrap();
    assert_eq!(item.quantity, Decimal::from(60));

    let salad = system
        .create_product(
            &id,
            "Salad",
            Decimal::new(800, 2),
            Category::Food,
            vec![IngredientRequirement {
                name: "tomato".into(),
                quantity: Decimal::from(2),
                unit: "pcs".into(),
            }],
        )
        .await
        .unwrap();
    system
        .place_order(&id, 1, vec![line(&salad, "Salad", 40, 800, Category::Food)])
        .await
        .unwrap();

    let stock = system.list_inventory(&id).await.unwrap();
    assert_eq!(stock.len(), 1);
    assert_eq!(stock[0].quantity, Decimal::from(-20));

    // Shrinking the order afterwards does not restock.
    let order = &system.list_table_orders(&id, 1).await.unwrap()[0];
    system.update_line_item(&id, &order.id, 0, 0).await.unwrap();
    assert_eq!(
        system.list_inventory(&id).await.unwrap()[0].quantity,
        Decimal::from(-20)
    );
}

#[tokio::test]
async fn test_product_crud() {
    let (system, _) = start();
    let id = signup(&system).await;

    let product_id = system
        .create_product(&id, "Espresso", Decimal::new(250, 2), Category::Drink, vec![])
        .await
        .unwrap();
    let products = system.list_products(&id).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, product_id);

    assert!(matches!(
        system
            .create_product(&id, "Free lunch", Decimal::NEGATIVE_ONE, Category::Food, vec![])
            .await,
        Err(PosError::ValidationError(_))
    ));

    system.delete_product(&id, &product_id).await.unwrap();
    assert!(system.list_products(&id).await.unwrap().is_empty());
    assert!(matches!(
        system.delete_product(&id, &product_id).await,
        Err(PosError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_restaurants_are_isolated() {
    let (system, _) = start();
    let first = signup(&system).await;
    let second = system
        .register("chef@diner.test", "pw", "Diner", "PAID")
        .await
        .unwrap();

    system.place_order(&first, 1, vec![soup(1)]).await.unwrap();
    system
        .adjust_inventory(&first, "salt", Decimal::ONE, "kg")
        .await
        .unwrap();

    assert!(system.list_kitchen_orders(&second).await.unwrap().is_empty());
    assert!(system.list_inventory(&second).await.unwrap().is_empty());
    assert_eq!(system.list_tables(&second).await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_events_follow_the_order_lifecycle() {
    let (system, _) = start();
    let id = signup(&system).await;
    let mut events = system.subscribe();

    let order_id = system.place_order(&id, 8, vec![soup(1)]).await.unwrap();
    system.mark_ready(&id, &order_id).await.unwrap();
    system.close_table(&id, 8, Decimal::new(650, 2)).await.unwrap();

    assert_eq!(
        events.recv().await.unwrap(),
        LedgerEvent::OrderPlaced {
            restaurant_id: id.clone(),
            order_id: order_id.clone(),
            table_number: 8,
        }
    );
    assert!(matches!(events.recv().await.unwrap(), LedgerEvent::OrderReady { .. }));
    assert_eq!(
        events.recv().await.unwrap(),
        LedgerEvent::OrderRemoved {
            restaurant_id: id.clone(),
            order_id,
        }
    );
    match events.recv().await.unwrap() {
        LedgerEvent::TableClosed {
            table_number,
            amount,
            ..
        } => {
            assert_eq!(table_number, 8);
            assert_eq!(amount, Decimal::new(715, 2));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
