//! Demo run of the engine over an in-memory store: one restaurant, one service.

use ledger_actor::tracing::setup_tracing;
use ledger_actor::MemoryStore;
use pos_engine::config::EngineConfig;
use pos_engine::error::PosError;
use pos_engine::lifecycle::PosSystem;
use pos_engine::model::{Category, IngredientRequirement, LineItem};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = EngineConfig::from_env();
    info!(?config, "Starting POS engine demo");
    let token = config.payment_token.clone();
    let system = PosSystem::new(config, Arc::new(MemoryStore::new()));

    let result = async {
        let restaurant_id = system
            .register("owner@bistro.test", "secret", "Bistro", &token)
            .await?;
        info!(%restaurant_id, "Restaurant registered");

        let margherita = system
            .create_product(
                &restaurant_id,
                "Margherita",
                Decimal::new(950, 2),
                Category::Food,
                vec![
                    IngredientRequirement {
                        name: "dough".into(),
                        quantity: Decimal::new(250, 0),
                        unit: "g".into(),
                    },
                    IngredientRequirement {
                        name: "mozzarella".into(),
                        quantity: Decimal::new(125, 0),
                        unit: "g".into(),
                    },
                ],
            )
            .await?;
        system
            .adjust_inventory(&restaurant_id, "dough", Decimal::new(5000, 0), "g")
            .await?;
        system
            .adjust_inventory(&restaurant_id, "mozzarella", Decimal::new(2000, 0), "g")
            .await?;

        let service = tracing::info_span!("service", table = 3);
        async {
            let order_id = system
                .place_order(
                    &restaurant_id,
                    3,
                    vec![LineItem {
                        product_id: margherita.clone(),
                        name: "Margherita".into(),
                        quantity: 2,
                        unit_price: Decimal::new(950, 2),
                        category: Category::Food,
                    }],
                )
                .await?;
            info!(%order_id, "Order placed");

            let kitchen = system.list_kitchen_orders(&restaurant_id).await?;
            info!(pending = kitchen.len(), "Kitchen display refreshed");
            system.mark_ready(&restaurant_id, &order_id).await?;

            let subtotal = system
                .list_table_orders(&restaurant_id, 3)
                .await?
                .iter()
                .try_fold(Decimal::ZERO, |total, order| {
                    order.subtotal().and_then(|s| total.checked_add(s))
                })
                .ok_or_else(|| PosError::ValidationError("table subtotal overflows".into()))?;
            let closure = system.close_table(&restaurant_id, 3, subtotal).await?;
            info!(amount = %closure.amount, "Table closed");
            Ok::<_, PosError>(())
        }
        .instrument(service)
        .await?;

        for item in system.list_inventory(&restaurant_id).await? {
            info!(ingredient = %item.ingredient, quantity = %item.quantity, unit = %item.unit, "Stock");
        }
        for record in system.list_sales(&restaurant_id).await? {
            info!(date = %record.date, total = %record.total, count = record.count, "Sales");
        }
        Ok::<_, PosError>(())
    }
    .await;

    if let Err(e) = &result {
        error!(error = %e, "Demo failed");
    }

    system.shutdown().await?;
    result.map_err(|e| e.to_string())?;
    info!("Demo completed successfully");
    Ok(())
}
