use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note. `id` and `date` are assigned by the storage backend at
/// creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub date: DateTime<Utc>,
}
