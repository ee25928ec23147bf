//! Domain and storage representations of a resource.

use crate::schema::ResourceUpdate;
use serde::Serialize;
use sqlx::FromRow;

/// A curated developer tool/link, as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub cost: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// One row of the `resources` table. Tags are stored encoded; see `mapper`.
#[derive(Debug, FromRow)]
pub struct ResourceRow {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub cost: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
}

impl Resource {
    /// Apply a partial update. Only fields present in the patch overwrite;
    /// explicit nulls clear optional fields, absent fields are left alone.
    pub fn apply(&mut self, patch: &ResourceUpdate) {
        if let Some(Some(name)) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(platform) = &patch.platform {
            self.platform = platform.clone();
        }
        if let Some(cost) = &patch.cost {
            self.cost = cost.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone().unwrap_or_default();
        }
    }
}
