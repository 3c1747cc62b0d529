use serde::{Deserialize, Serialize};

/// The `{succeeded, message, data}` wrapper every endpoint response uses.
///
/// `message` and `data` can both be absent; a well-formed failure carries
/// `succeeded: false` and usually a message, while a success carries the
/// payload in `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}
