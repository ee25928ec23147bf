//! Resourcify: CRUD backend for curated developer resources.

pub mod error;
pub mod handlers;
pub mod mapper;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::Resource;
pub use routes::{app, common_routes, resource_routes};
pub use service::ResourceService;
pub use state::AppState;
pub use store::{connect, ensure_schema};
