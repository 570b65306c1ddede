use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of the account's device listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(default)]
    pub connected: bool,
    /// Vendor fields this crate does not interpret, passed through opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Detail body for a single device: what the firmware registered.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceDetail {
    #[serde(default)]
    pub functions: Vec<String>,
    /// Variable name to declared type tag ("double", "int32", "string"),
    /// in the order the cloud reports them.
    #[serde(default)]
    pub variables: IndexMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a variable read; `result` keeps whatever JSON type the cloud sent.
#[derive(Debug, Deserialize)]
pub struct VariableResponse {
    pub result: Value,
}

/// Body of a function invocation.
#[derive(Debug, Deserialize)]
pub struct FunctionResponse {
    pub return_value: i64,
}

/// Body of a firmware flash.
#[derive(Debug, Deserialize)]
pub struct FlashResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn device_captures_unknown_fields() {
        let device: Device = serde_json::from_value(json!({
            "name": "class1",
            "connected": true,
            "platform_id": 6,
            "last_ip_address": "10.0.0.2"
        }))
        .unwrap();

        assert_eq!(device.name, "class1");
        assert!(device.connected);
        assert_eq!(device.extra["platform_id"], json!(6));
        assert_eq!(device.extra["last_ip_address"], json!("10.0.0.2"));
    }

    #[test]
    fn device_connected_defaults_to_false() {
        let device: Device = serde_json::from_value(json!({"name": "class1"})).unwrap();
        assert!(!device.connected);
    }

    #[test]
    fn detail_keeps_variable_order() {
        let detail: DeviceDetail = serde_json::from_str(
            r#"{"functions":["move"],"variables":{"zz":"double","aa":"int32"},"cc3000_patch_version":"1.29"}"#,
        )
        .unwrap();

        let names: Vec<&String> = detail.variables.keys().collect();
        assert_eq!(names, ["zz", "aa"]);
        assert_eq!(detail.functions, vec!["move"]);
    }

    #[test]
    fn detail_tolerates_missing_sections() {
        let detail: DeviceDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.functions.is_empty());
        assert!(detail.variables.is_empty());
    }

    #[test]
    fn flash_response_tolerates_missing_fields() {
        let response: FlashResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_empty());
        assert!(!response.ok);
    }
}
