use crate::api::{Request, Response};
use crate::clients::{
    InventoryClient, OrderClient, ProductClient, RestaurantClient, SalesClient, TableClient,
};
use crate::config::EngineConfig;
use crate::error::PosError;
use crate::events::{EventBus, LedgerEvent};
use crate::model::{
    Category, IngredientRequirement, InventoryItem, LineItem, Order, OrderCreate, OrderId,
    OrderKey, Product, ProductCreate, ProductId, ProductKey, RestaurantId, SalesRecord, Session,
    Table, TableKey, TableNumber,
};
use crate::order_actor::OrderContext;
use crate::restaurant_actor::RestaurantContext;
use crate::sales_actor::{SalesContext, TableClosure};
use crate::{inventory_actor, order_actor, product_actor, restaurant_actor, sales_actor, table_actor};
use ledger_actor::{ActorClient, KvStore};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

/// The running engine: one actor per ledger over a shared [`KvStore`].
///
/// # Example
///
/// ```rust
/// use ledger_actor::MemoryStore;
/// use pos_engine::config::EngineConfig;
/// use pos_engine::lifecycle::PosSystem;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = PosSystem::new(EngineConfig::default(), Arc::new(MemoryStore::new()));
///
///     let id = system.register("owner@bistro.test", "secret", "Bistro", "PAID").await?;
///     assert_eq!(system.list_tables(&id).await?.len(), 10);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct PosSystem {
    pub restaurant_client: RestaurantClient,
    pub table_client: TableClient,
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    pub inventory_client: InventoryClient,
    pub sales_client: SalesClient,
    events: EventBus,
    config: EngineConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PosSystem {
    /// Creates every actor and starts it on the current Tokio runtime.
    pub fn new(config: EngineConfig, store: Arc<dyn KvStore>) -> Self {
        let buffer = config.channel_buffer;

        let (restaurant_actor, index_actor, restaurant_client) =
            restaurant_actor::new(buffer, store.clone(), config.payment_token.clone());
        let (table_actor, table_client) = table_actor::new(buffer, store.clone());
        let (product_actor, product_client) = product_actor::new(buffer, store.clone());
        let (inventory_actor, inventory_client) = inventory_actor::new(buffer, store.clone());
        let (order_actor, order_client) = order_actor::new(buffer, store.clone());
        let (sales_actor, sales_client) = sales_actor::new(buffer, store);

        // Leaves first, then the actors that call into them.
        let handles = vec![
            tokio::spawn(table_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(inventory_actor.run(())),
            tokio::spawn(index_actor.run(())),
            tokio::spawn(restaurant_actor.run(RestaurantContext {
                email_index: restaurant_client.email_index().clone(),
                tables: table_client.clone(),
                table_count: config.table_count,
            })),
            tokio::spawn(order_actor.run(OrderContext {
                tables: table_client.clone(),
                products: product_client.clone(),
                inventory: inventory_client.clone(),
            })),
            tokio::spawn(sales_actor.run(SalesContext {
                tables: table_client.clone(),
                orders: order_client.clone(),
                service_rate: config.service_rate(),
            })),
        ];

        info!(table_count = config.table_count, "POS system started");
        Self {
            restaurant_client,
            table_client,
            order_client,
            product_client,
            inventory_client,
            sales_client,
            events: EventBus::new(config.event_buffer),
            config,
            handles,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Change events for every restaurant. Filter on [`LedgerEvent::restaurant_id`].
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    // --- Restaurant registry ---

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        payment_token: &str,
    ) -> Result<RestaurantId, PosError> {
        Ok(self
            .restaurant_client
            .register(email, password, name, payment_token)
            .await?)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session, PosError> {
        Ok(self.restaurant_client.authenticate(email, password).await?)
    }

    pub async fn set_manager_password(
        &self,
        restaurant_id: &RestaurantId,
        password: &str,
    ) -> Result<(), PosError> {
        Ok(self
            .restaurant_client
            .set_manager_password(restaurant_id.clone(), password)
            .await?)
    }

    pub async fn verify_manager_password(
        &self,
        restaurant_id: &RestaurantId,
        password: &str,
    ) -> Result<(), PosError> {
        Ok(self
            .restaurant_client
            .verify_manager_password(restaurant_id.clone(), password)
            .await?)
    }

    // --- Tables & orders ---

    pub async fn list_tables(&self, restaurant_id: &RestaurantId) -> Result<Vec<Table>, PosError> {
        Ok(self.table_client.list_tables(restaurant_id).await?)
    }

    pub async fn place_order(
        &self,
        restaurant_id: &RestaurantId,
        table_number: TableNumber,
        items: Vec<LineItem>,
    ) -> Result<OrderId, PosError> {
        let order_id = self
            .order_client
            .place_order(OrderCreate {
                restaurant_id: restaurant_id.clone(),
                table_number,
                items,
            })
            .await?;
        self.events.publish(LedgerEvent::OrderPlaced {
            restaurant_id: restaurant_id.clone(),
            order_id: order_id.clone(),
            table_number,
        });
        Ok(order_id)
    }

    pub async fn list_kitchen_orders(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Order>, PosError> {
        Ok(self.order_client.list_kitchen_orders(restaurant_id).await?)
    }

    pub async fn mark_ready(
        &self,
        restaurant_id: &RestaurantId,
        order_id: &OrderId,
    ) -> Result<(), PosError> {
        self.order_client
            .mark_ready(OrderKey::new(restaurant_id.clone(), order_id.clone()))
            .await?;
        self.events.publish(LedgerEvent::OrderReady {
            restaurant_id: restaurant_id.clone(),
            order_id: order_id.clone(),
        });
        Ok(())
    }

    /// Removes an order whatever its status. The table keeps the id until it is closed.
    pub async fn complete_order(
        &self,
        restaurant_id: &RestaurantId,
        order_id: &OrderId,
    ) -> Result<(), PosError> {
        self.order_client
            .complete_order(OrderKey::new(restaurant_id.clone(), order_id.clone()))
            .await?;
        self.events.publish(LedgerEvent::OrderRemoved {
            restaurant_id: restaurant_id.clone(),
            order_id: order_id.clone(),
        });
        Ok(())
    }

    /// Sets a line item's quantity; `0` removes it. Inventory is not re-adjusted.
    pub async fn update_line_item(
        &self,
        restaurant_id: &RestaurantId,
        order_id: &OrderId,
        item_index: usize,
        quantity: u32,
    ) -> Result<Order, PosError> {
        let order = self
            .order_client
            .update_line_item(
                OrderKey::new(restaurant_id.clone(), order_id.clone()),
                item_index,
                quantity,
            )
            .await?;
        self.events.publish(LedgerEvent::OrderUpdated {
            restaurant_id: restaurant_id.clone(),
            order_id: order_id.clone(),
        });
        Ok(order)
    }

    pub async fn list_table_orders(
        &self,
        restaurant_id: &RestaurantId,
        table_number: TableNumber,
    ) -> Result<Vec<Order>, PosError> {
        let key = TableKey::new(restaurant_id.clone(), table_number);
        let table = self
            .table_client
            .get(key.clone())
            .await?
            .ok_or_else(|| PosError::NotFound(format!("table:{key}")))?;
        Ok(self
            .order_client
            .orders_for(restaurant_id, &table.order_ids)
            .await?)
    }

    /// Removes the table's orders, clears it and books `subtotal` plus service charge
    /// on today's sales record.
    pub async fn close_table(
        &self,
        restaurant_id: &RestaurantId,
        table_number: TableNumber,
        subtotal: Decimal,
    ) -> Result<TableClosure, PosError> {
        let date = self.config.today();
        let closure = self
            .sales_client
            .close_table(restaurant_id, &date, table_number, subtotal)
            .await?;

        for order_id in &closure.removed {
            self.events.publish(LedgerEvent::OrderRemoved {
                restaurant_id: restaurant_id.clone(),
                order_id: order_id.clone(),
            });
        }
        self.events.publish(LedgerEvent::TableClosed {
            restaurant_id: restaurant_id.clone(),
            table_number,
            amount: closure.amount,
            date,
        });
        Ok(closure)
    }

    // --- Products ---

    pub async fn list_products(&self, restaurant_id: &RestaurantId) -> Result<Vec<Product>, PosError> {
        Ok(self.product_client.list_products(restaurant_id).await?)
    }

    pub async fn create_product(
        &self,
        restaurant_id: &RestaurantId,
        name: &str,
        price: Decimal,
        category: Category,
        ingredients: Vec<IngredientRequirement>,
    ) -> Result<ProductId, PosError> {
        Ok(self
            .product_client
            .create_product(ProductCreate {
                restaurant_id: restaurant_id.clone(),
                name: name.to_string(),
                price,
                category,
                ingredients,
            })
            .await?)
    }

    pub async fn delete_product(
        &self,
        restaurant_id: &RestaurantId,
        product_id: &ProductId,
    ) -> Result<(), PosError> {
        Ok(self
            .product_client
            .delete_product(ProductKey::new(restaurant_id.clone(), product_id.clone()))
            .await?)
    }

    // --- Inventory & sales ---

    pub async fn list_inventory(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<InventoryItem>, PosError> {
        Ok(self.inventory_client.list_inventory(restaurant_id).await?)
    }

    pub async fn adjust_inventory(
        &self,
        restaurant_id: &RestaurantId,
        ingredient: &str,
        delta: Decimal,
        unit: &str,
    ) -> Result<InventoryItem, PosError> {
        Ok(self
            .inventory_client
            .adjust(restaurant_id, ingredient, delta, unit)
            .await?)
    }

    pub async fn list_sales(&self, restaurant_id: &RestaurantId) -> Result<Vec<SalesRecord>, PosError> {
        Ok(self.sales_client.list_sales(restaurant_id).await?)
    }

    // --- Tagged boundary ---

    /// Validates a request and dispatches it to the matching operation.
    pub async fn handle(&self, request: Request) -> Result<Response, PosError> {
        request.validate()?;
        let op = request.op();
        let response = match request {
            Request::Register {
                email,
                password,
                name,
                payment_token,
            } => Response::Registered {
                restaurant_id: self.register(&email, &password, &name, &payment_token).await?,
            },
            Request::Authenticate { email, password } => {
                Response::Session(self.authenticate(&email, &password).await?)
            }
            Request::SetManagerPassword {
                restaurant_id,
                password,
            } => {
                self.set_manager_password(&restaurant_id, &password).await?;
                Response::Ok
            }
            Request::VerifyManagerPassword {
                restaurant_id,
                password,
            } => {
                self.verify_manager_password(&restaurant_id, &password).await?;
                Response::Ok
            }
            Request::ListTables { restaurant_id } => Response::Tables {
                tables: self.list_tables(&restaurant_id).await?,
            },
            Request::PlaceOrder {
                restaurant_id,
                table_number,
                items,
            } => Response::OrderPlaced {
                order_id: self.place_order(&restaurant_id, table_number, items).await?,
            },
            Request::ListKitchenOrders { restaurant_id } => Response::Orders {
                orders: self.list_kitchen_orders(&restaurant_id).await?,
            },
            Request::MarkReady {
                restaurant_id,
                order_id,
            } => {
                self.mark_ready(&restaurant_id, &order_id).await?;
                Response::Ok
            }
            Request::CompleteOrder {
                restaurant_id,
                order_id,
            } => {
                self.complete_order(&restaurant_id, &order_id).await?;
                Response::Ok
            }
            Request::UpdateLineItem {
                restaurant_id,
                order_id,
                item_index,
                quantity,
            } => Response::Order {
                order: self
                    .update_line_item(&restaurant_id, &order_id, item_index, quantity)
                    .await?,
            },
            Request::ListTableOrders {
                restaurant_id,
                table_number,
            } => Response::Orders {
                orders: self.list_table_orders(&restaurant_id, table_number).await?,
            },
            Request::CloseTable {
                restaurant_id,
                table_number,
                subtotal,
            } => {
                let closure = self.close_table(&restaurant_id, table_number, subtotal).await?;
                Response::TableClosed {
                    record: closure.record,
                    amount: closure.amount,
                }
            }
            Request::ListProducts { restaurant_id } => Response::Products {
                products: self.list_products(&restaurant_id).await?,
            },
            Request::CreateProduct {
                restaurant_id,
                name,
                price,
                category,
                ingredients,
            } => Response::ProductCreated {
                product_id: self
                    .create_product(&restaurant_id, &name, price, category, ingredients)
                    .await?,
            },
            Request::DeleteProduct {
                restaurant_id,
                product_id,
            } => {
                self.delete_product(&restaurant_id, &product_id).await?;
                Response::Ok
            }
            Request::ListInventory { restaurant_id } => Response::Inventory {
                items: self.list_inventory(&restaurant_id).await?,
            },
            Request::AdjustInventory {
                restaurant_id,
                ingredient,
                delta,
                unit,
            } => Response::InventoryItem {
                item: self
                    .adjust_inventory(&restaurant_id, &ingredient, delta, &unit)
                    .await?,
            },
            Request::ListSales { restaurant_id } => Response::Sales {
                records: self.list_sales(&restaurant_id).await?,
            },
        };
        tracing::debug!(op, "Request handled");
        Ok(response)
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients closes the top of the dependency graph; each actor then drops
    /// its context, which closes the actors below it.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Initiating system shutdown...");
        drop(self.restaurant_client);
        drop(self.table_client);
        drop(self.order_client);
        drop(self.product_client);
        drop(self.inventory_client);
        drop(self.sales_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
