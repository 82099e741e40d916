//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the data store and notification collaborators consumed by the
//! feature layer.

pub mod notification;
pub mod store;
