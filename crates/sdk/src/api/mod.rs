//! API endpoint groups.

mod auth;
mod companies;
mod people;

pub use auth::{AuthApi, Workspace};
pub use companies::CompaniesApi;
pub use people::PeopleApi;

use serde::{Deserialize, Serialize};

/// Response wrapper shared by every Tuesday endpoint.
///
/// Only `data` is required; the status fields are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tuesday_core::JsonObject;

    #[test]
    fn test_envelope_with_status() {
        let body = json!({"data": {"name": "Ada"}, "statusCode": 200, "message": "ok"});
        let envelope: Envelope<JsonObject> = serde_json::from_value(body).unwrap();

        assert_eq!(envelope.status_code, Some(200));
        assert_eq!(envelope.data["name"], "Ada");
    }

    #[test]
    fn test_envelope_data_only() {
        let body = json!({"data": []});
        let envelope: Envelope<Vec<Value>> = serde_json::from_value(body).unwrap();

        assert!(envelope.data.is_empty());
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_envelope_rejects_wrong_payload_shape() {
        let body = json!({"data": [1, 2]});
        assert!(serde_json::from_value::<Envelope<JsonObject>>(body).is_err());

        assert!(serde_json::from_value::<Envelope<Vec<Value>>>(json!({"items": []})).is_err());
    }
}
