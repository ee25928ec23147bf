//! Row to domain translation, including the tag codec.
//!
//! Tags are persisted as a JSON array string. Rows written by earlier revisions
//! used a comma-delimited string; those still decode. The encoding never leaks
//! past this module.

use crate::error::AppError;
use crate::model::{Resource, ResourceRow};

pub fn to_domain(row: ResourceRow) -> Resource {
    Resource {
        id: row.id,
        name: row.name,
        category: row.category,
        platform: row.platform,
        cost: row.cost,
        description: row.description,
        tags: decode_tags(row.tags.as_deref()),
    }
}

/// Encode a tag sequence for storage.
pub fn encode_tags(tags: &[String]) -> Result<String, AppError> {
    Ok(serde_json::to_string(tags)?)
}

/// Decode stored tags. Accepts the canonical JSON array encoding and the
/// legacy comma-delimited form; anything empty decodes to no tags.
pub fn decode_tags(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Vec::new(),
    };
    if raw.starts_with('[') {
        if let Ok(tags) = serde_json::from_str::<Vec<String>>(raw) {
            return tags;
        }
    }
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_json_arrays() {
        assert_eq!(decode_tags(Some(r#"["api","testing"]"#)), ["api", "testing"]);
    }

    #[test]
    fn decodes_legacy_comma_delimited_strings() {
        assert_eq!(decode_tags(Some("api, testing ,web")), ["api", "testing", "web"]);
    }

    #[test]
    fn empty_and_missing_decode_to_no_tags() {
        assert!(decode_tags(None).is_empty());
        assert!(decode_tags(Some("")).is_empty());
        assert!(decode_tags(Some("   ")).is_empty());
        assert!(decode_tags(Some("[]")).is_empty());
    }

    #[test]
    fn round_trips_through_the_canonical_encoding() {
        let tags = vec!["has, comma".to_string(), "plain".to_string()];
        let encoded = encode_tags(&tags).unwrap();
        assert_eq!(decode_tags(Some(&encoded)), tags);
    }

    #[test]
    fn maps_rows_to_domain_resources() {
        let row = ResourceRow {
            id: 7,
            name: "Postman".into(),
            category: Some("API Testing".into()),
            platform: None,
            cost: None,
            description: None,
            tags: Some(r#"["api"]"#.into()),
        };
        let resource = to_domain(row);
        assert_eq!(resource.id, 7);
        assert_eq!(resource.tags, ["api"]);
    }
}
