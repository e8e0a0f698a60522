// crates/aeropath-core/src/model/photo.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An image attached to a city entry.
///
/// The payload is opaque encoded image bytes; decoding is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub image_data: Vec<u8>,
    pub caption: String,
    pub date_added: DateTime<Utc>,
}

impl Photo {
    pub fn new(image_data: Vec<u8>, caption: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_data,
            caption: caption.into(),
            date_added: Utc::now(),
        }
    }
}
