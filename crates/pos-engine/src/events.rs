//! Change events for subscribers that would rather be pushed than poll.
//!
//! Events are published after the write they describe has been committed. Publishing
//! never fails the write: with no subscribers the event is dropped, and a lagging
//! subscriber loses the oldest events (`RecvError::Lagged`).

use crate::model::{OrderId, RestaurantId, TableNumber};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LedgerEvent {
    OrderPlaced {
        restaurant_id: RestaurantId,
        order_id: OrderId,
        table_number: TableNumber,
    },
    OrderReady {
        restaurant_id: RestaurantId,
        order_id: OrderId,
    },
    OrderUpdated {
        restaurant_id: RestaurantId,
        order_id: OrderId,
    },
    OrderRemoved {
        restaurant_id: RestaurantId,
        order_id: OrderId,
    },
    TableClosed {
        restaurant_id: RestaurantId,
        table_number: TableNumber,
        amount: Decimal,
        date: String,
    },
}

impl LedgerEvent {
    pub fn restaurant_id(&self) -> &RestaurantId {
        match self {
            LedgerEvent::OrderPlaced { restaurant_id, .. }
            | LedgerEvent::OrderReady { restaurant_id, .. }
            | LedgerEvent::OrderUpdated { restaurant_id, .. }
            | LedgerEvent::OrderRemoved { restaurant_id, .. }
            | LedgerEvent::TableClosed { restaurant_id, .. } => restaurant_id,
        }
    }
}

/// Broadcast fan-out of [`LedgerEvent`]s.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<LedgerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: LedgerEvent) {
        if self.sender.send(event).is_err() {
            trace!("No event subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new(4);
        bus.publish(LedgerEvent::OrderReady {
            restaurant_id: RestaurantId::from("r1"),
            order_id: OrderId::from("o1"),
        });

        let mut rx = bus.subscribe();
        let event = LedgerEvent::OrderRemoved {
            restaurant_id: RestaurantId::from("r1"),
            order_id: OrderId::from("o1"),
        };
        bus.publish(event.clone());
        assert_eq!(rx.recv().await.unwrap(), event);
        assert_eq!(event.restaurant_id(), &RestaurantId::from("r1"));
    }
}
