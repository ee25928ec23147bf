//! CRUD execution against SQLite.

use crate::error::AppError;
use crate::mapper;
use crate::model::{Resource, ResourceRow};
use crate::schema::{ResourceCreate, ResourceUpdate};
use crate::service::RequestValidator;
use sqlx::SqlitePool;

pub struct ResourceService;

impl ResourceService {
    /// List all resources, ordered by id. Empty vec when none exist.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Resource>, AppError> {
        let rows: Vec<ResourceRow> = sqlx::query_as(
            "SELECT id, name, category, platform, cost, description, tags \
             FROM resources ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(mapper::to_domain).collect())
    }

    /// Fetch one resource by id.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Resource, AppError> {
        let row: Option<ResourceRow> = sqlx::query_as(
            "SELECT id, name, category, platform, cost, description, tags \
             FROM resources WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        row.map(mapper::to_domain)
            .ok_or_else(|| AppError::not_found(id))
    }

    /// Validate and persist a new resource; returns it with the assigned id.
    pub async fn create(pool: &SqlitePool, payload: &ResourceCreate) -> Result<Resource, AppError> {
        let name = RequestValidator::validate_create(payload)?;
        let tags = mapper::encode_tags(&payload.tags)?;
        let row: ResourceRow = sqlx::query_as(
            "INSERT INTO resources (name, category, platform, cost, description, tags) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, name, category, platform, cost, description, tags",
        )
        .bind(name)
        .bind(&payload.category)
        .bind(&payload.platform)
        .bind(&payload.cost)
        .bind(&payload.description)
        .bind(&tags)
        .fetch_one(pool)
        .await?;
        Ok(mapper::to_domain(row))
    }

    /// Apply a partial update to an existing resource and return the result.
    /// Fields absent from the patch keep their stored values.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &ResourceUpdate,
    ) -> Result<Resource, AppError> {
        RequestValidator::validate_update(patch)?;
        let mut resource = Self::get(pool, id).await?;
        resource.apply(patch);
        let tags = mapper::encode_tags(&resource.tags)?;
        sqlx::query(
            "UPDATE resources SET name = ?, category = ?, platform = ?, cost = ?, \
             description = ?, tags = ? WHERE id = ?",
        )
        .bind(&resource.name)
        .bind(&resource.category)
        .bind(&resource.platform)
        .bind(&resource.cost)
        .bind(&resource.description)
        .bind(&tags)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(resource)
    }

    /// Permanently remove a resource.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resources WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(id));
        }
        Ok(())
    }
}
