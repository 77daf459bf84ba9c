use serde::Serialize;

use crate::core::store::ConfigEntry;

/// Lookup misses omit the `data` key entirely, so the body is `{}` rather
/// than `{"data": null}`.
#[derive(Serialize)]
pub(crate) struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<ConfigEntry>,
}

impl Config {
    pub(crate) fn new(entry: Option<&ConfigEntry>) -> Self {
        Self {
            data: entry.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_serializes_to_empty_object() {
        let body = serde_json::to_string(&Config::new(None)).unwrap();

        assert_eq!(body, "{}");
    }

    #[test]
    fn test_hit_serializes_payload() {
        let entry = ConfigEntry {
            id: "cfg1".to_string(),
            payload: serde_json::json!({"retries": 3}),
        };
        let body = serde_json::to_value(Config::new(Some(&entry))).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"data": {"id": "cfg1", "payload": {"retries": 3}}})
        );
    }
}
