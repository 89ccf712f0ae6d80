//! Tagged request/response schema for the engine.
//!
//! Requests are JSON objects tagged by `"op"`:
//!
//! ```json
//! {"op": "placeOrder", "restaurant_id": "…", "table_number": 3, "items": [ … ]}
//! ```
//!
//! Money and quantities are decimal strings (`"12.50"`). [`Request::validate`] checks
//! field shapes before anything reaches an actor.

use crate::error::PosError;
use crate::model::{
    Category, IngredientRequirement, InventoryItem, LineItem, Order, OrderId, Product, ProductId,
    RestaurantId, SalesRecord, Session, Table, TableNumber,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    Register {
        email: String,
        password: String,
        name: String,
        payment_token: String,
    },
    Authenticate {
        email: String,
        password: String,
    },
    SetManagerPassword {
        restaurant_id: RestaurantId,
        password: String,
    },
    VerifyManagerPassword {
        restaurant_id: RestaurantId,
        password: String,
    },
    ListTables {
        restaurant_id: RestaurantId,
    },
    PlaceOrder {
        restaurant_id: RestaurantId,
        table_number: TableNumber,
        items: Vec<LineItem>,
    },
    ListKitchenOrders {
        restaurant_id: RestaurantId,
    },
    MarkReady {
        restaurant_id: RestaurantId,
        order_id: OrderId,
    },
    CompleteOrder {
        restaurant_id: RestaurantId,
        order_id: OrderId,
    },
    UpdateLineItem {
        restaurant_id: RestaurantId,
        order_id: OrderId,
        item_index: usize,
        quantity: u32,
    },
    ListTableOrders {
        restaurant_id: RestaurantId,
        table_number: TableNumber,
    },
    CloseTable {
        restaurant_id: RestaurantId,
        table_number: TableNumber,
        subtotal: Decimal,
    },
    ListProducts {
        restaurant_id: RestaurantId,
    },
    CreateProduct {
        restaurant_id: RestaurantId,
        name: String,
        price: Decimal,
        category: Category,
        #[serde(default)]
        ingredients: Vec<IngredientRequirement>,
    },
    DeleteProduct {
        restaurant_id: RestaurantId,
        product_id: ProductId,
    },
    ListInventory {
        restaurant_id: RestaurantId,
    },
    AdjustInventory {
        restaurant_id: RestaurantId,
        ingredient: String,
        delta: Decimal,
        unit: String,
    },
    ListSales {
        restaurant_id: RestaurantId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    Ok,
    Registered { restaurant_id: RestaurantId },
    Session(Session),
    Tables { tables: Vec<Table> },
    OrderPlaced { order_id: OrderId },
    Orders { orders: Vec<Order> },
    Order { order: Order },
    TableClosed { record: SalesRecord, amount: Decimal },
    Products { products: Vec<Product> },
    ProductCreated { product_id: ProductId },
    Inventory { items: Vec<InventoryItem> },
    InventoryItem { item: InventoryItem },
    Sales { records: Vec<SalesRecord> },
}

fn required(field: &str, value: &str) -> Result<(), PosError> {
    if value.trim().is_empty() {
        return Err(PosError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

fn non_negative(field: &str, value: Decimal) -> Result<(), PosError> {
    if value < Decimal::ZERO {
        return Err(PosError::ValidationError(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

impl Request {
    /// The operation name, as it appears in the `"op"` tag.
    pub fn op(&self) -> &'static str {
        match self {
            Request::Register { .. } => "register",
            Request::Authenticate { .. } => "authenticate",
            Request::SetManagerPassword { .. } => "setManagerPassword",
            Request::VerifyManagerPassword { .. } => "verifyManagerPassword",
            Request::ListTables { .. } => "listTables",
            Request::PlaceOrder { .. } => "placeOrder",
            Request::ListKitchenOrders { .. } => "listKitchenOrders",
            Request::MarkReady { .. } => "markReady",
            Request::CompleteOrder { .. } => "completeOrder",
            Request::UpdateLineItem { .. } => "updateLineItem",
            Request::ListTableOrders { .. } => "listTableOrders",
            Request::CloseTable { .. } => "closeTable",
            Request::ListProducts { .. } => "listProducts",
            Request::CreateProduct { .. } => "createProduct",
            Request::DeleteProduct { .. } => "deleteProduct",
            Request::ListInventory { .. } => "listInventory",
            Request::AdjustInventory { .. } => "adjustInventory",
            Request::ListSales { .. } => "listSales",
        }
    }

    fn restaurant_id(&self) -> Option<&RestaurantId> {
        match self {
            Request::Register { .. } | Request::Authenticate { .. } => None,
            Request::SetManagerPassword { restaurant_id, .. }
            | Request::VerifyManagerPassword { restaurant_id, .. }
            | Request::ListTables { restaurant_id }
            | Request::PlaceOrder { restaurant_id, .. }
            | Request::ListKitchenOrders { restaurant_id }
            | Request::MarkReady { restaurant_id, .. }
            | Request::CompleteOrder { restaurant_id, .. }
            | Request::UpdateLineItem { restaurant_id, .. }
            | Request::ListTableOrders { restaurant_id, .. }
            | Request::CloseTable { restaurant_id, .. }
            | Request::ListProducts { restaurant_id }
            | Request::CreateProduct { restaurant_id, .. }
            | Request::DeleteProduct { restaurant_id, .. }
            | Request::ListInventory { restaurant_id }
            | Request::AdjustInventory { restaurant_id, .. }
            | Request::ListSales { restaurant_id } => Some(restaurant_id),
        }
    }

    /// Boundary checks. Anything that needs stored state is left to the actors.
    pub fn validate(&self) -> Result<(), PosError> {
        if let Some(restaurant_id) = self.restaurant_id() {
            required("restaurant_id", restaurant_id.as_str())?;
        }
        match self {
            Request::Register {
                email,
                password,
                name,
                ..
            } => {
                required("email", email)?;
                required("password", password)?;
                required("name", name)
            }
            Request::Authenticate { email, password } => {
                required("email", email)?;
                required("password", password)
            }
            Request::SetManagerPassword { password, .. } => required("password", password),
            Request::PlaceOrder { items, .. } => {
                if items.is_empty() {
                    return Err(PosError::ValidationError("items are required".into()));
                }
                for item in items {
                    required("product_id", item.product_id.as_str())?;
                    non_negative("unit_price", item.unit_price)?;
                }
                Ok(())
            }
            Request::MarkReady { order_id, .. }
            | Request::CompleteOrder { order_id, .. }
            | Request::UpdateLineItem { order_id, .. } => required("order_id", order_id.as_str()),
            Request::CloseTable { subtotal, .. } => non_negative("subtotal", *subtotal),
            Request::CreateProduct {
                name,
                price,
                ingredients,
                ..
            } => {
                required("name", name)?;
                non_negative("price", *price)?;
                for ingredient in ingredients {
                    required("ingredient name", &ingredient.name)?;
                }
                Ok(())
            }
            Request::DeleteProduct { product_id, .. } => required("product_id", product_id.as_str()),
            Request::AdjustInventory { ingredient, .. } => required("ingredient", ingredient),
            Request::VerifyManagerPassword { .. }
            | Request::ListTables { .. }
            | Request::ListTableOrders { .. }
            | Request::ListKitchenOrders { .. }
            | Request::ListProducts { .. }
            | Request::ListInventory { .. }
            | Request::ListSales { .. } => Ok(()),
        }
    }
}
