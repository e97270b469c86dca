//! Controller configuration.

use serde::{Deserialize, Serialize};

/// Options for the synchronization controller, chiefly the shape of the
/// default fields synthesized onto newly added types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Name of the identifier field every synthesized type gets.
    pub id_field_name: String,
    /// Type of the identifier field.
    pub id_field_type: String,
    /// Name of the extra timestamp field synthesized on event types.
    pub event_timestamp_field: String,
    /// Type of the event timestamp field.
    pub event_timestamp_type: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            id_field_name: "id".to_string(),
            id_field_type: "ID".to_string(),
            event_timestamp_field: "occurredAt".to_string(),
            event_timestamp_type: "String".to_string(),
        }
    }
}
