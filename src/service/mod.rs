//! ResourceService: CRUD against the resources table.

mod crud;
mod validation;

pub use crud::ResourceService;
pub use validation::RequestValidator;
