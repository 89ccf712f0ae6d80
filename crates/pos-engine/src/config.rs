//! Engine configuration, read from the environment with defaults for every field.

use chrono::{FixedOffset, Offset, Utc};
use rust_decimal::Decimal;

/// Runtime settings for [`PosSystem`](crate::lifecycle::PosSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// mpsc buffer of every actor channel.
    pub channel_buffer: usize,
    /// The one payment token accepted at signup.
    pub payment_token: String,
    /// Tables provisioned per restaurant, numbered from 1.
    pub table_count: u8,
    /// Service charge added to a table's subtotal when it is closed.
    pub service_charge_percent: Decimal,
    /// Offset of the tenant-local day used to key sales records.
    pub utc_offset_minutes: i32,
    /// Capacity of the change-event broadcast channel.
    pub event_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            payment_token: "PAID".to_string(),
            table_count: 10,
            service_charge_percent: Decimal::from(10),
            utc_offset_minutes: 0,
            event_buffer: 256,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl EngineConfig {
    /// Loads `.env` if present, then reads `POS_*` variables. Unset or unparsable values
    /// fall back to [`EngineConfig::default`].
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();
        Self {
            channel_buffer: env_or("POS_CHANNEL_BUFFER", defaults.channel_buffer).max(1),
            payment_token: std::env::var("POS_PAYMENT_TOKEN").unwrap_or(defaults.payment_token),
            table_count: env_or("POS_TABLE_COUNT", defaults.table_count),
            service_charge_percent: env_or(
                "POS_SERVICE_CHARGE_PERCENT",
                defaults.service_charge_percent,
            ),
            utc_offset_minutes: env_or("POS_UTC_OFFSET_MINUTES", defaults.utc_offset_minutes),
            event_buffer: env_or("POS_EVENT_BUFFER", defaults.event_buffer).max(1),
        }
    }

    /// Multiplier applied to a subtotal at close, `1.10` by default.
    pub fn service_rate(&self) -> Decimal {
        Decimal::ONE + self.service_charge_percent / Decimal::ONE_HUNDRED
    }

    /// Today in the tenant's timezone as `YYYY-MM-DD`.
    pub fn today(&self) -> String {
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());
        Utc::now().with_timezone(&offset).format("%Y-%m-%d").to_string()
    }
}
