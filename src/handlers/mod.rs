//! HTTP handlers for the resource API.

pub mod resource;
