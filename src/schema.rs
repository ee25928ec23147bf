//! Request and response payload shapes for the resource API.

use serde::{Deserialize, Deserializer, Serialize};

/// Create payload. `name` is required (enforced by validation), everything else
/// optional; `tags` defaults to empty. The legacy `type` key is accepted as an
/// alias for `category`.
#[derive(Debug, Deserialize)]
pub struct ResourceCreate {
    pub name: Option<String>,
    #[serde(alias = "type")]
    pub category: Option<String>,
    pub platform: Option<String>,
    pub cost: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update payload with exclude-unset semantics. The outer `Option` tracks
/// presence: `None` means the field was absent from the request body,
/// `Some(None)` means it was explicitly set to null.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceUpdate {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, alias = "type", deserialize_with = "present")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub platform: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub cost: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub tags: Option<Option<Vec<String>>>,
}

/// Confirmation body returned by delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub detail: String,
}

/// Marks a field as present even when its value is null, so partial updates
/// can tell "absent" apart from "explicitly cleared".
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null() {
        let patch: ResourceUpdate = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert_eq!(patch.category, Some(None));
        assert_eq!(patch.description, None);
    }

    #[test]
    fn update_carries_set_values() {
        let patch: ResourceUpdate =
            serde_json::from_str(r#"{"name": "Vim", "tags": ["editor"]}"#).unwrap();
        assert_eq!(patch.name, Some(Some("Vim".into())));
        assert_eq!(patch.tags, Some(Some(vec!["editor".into()])));
    }

    #[test]
    fn create_accepts_legacy_type_alias() {
        let payload: ResourceCreate =
            serde_json::from_str(r#"{"name": "Vim", "type": "Editor"}"#).unwrap();
        assert_eq!(payload.category.as_deref(), Some("Editor"));
        assert!(payload.tags.is_empty());
    }
}
