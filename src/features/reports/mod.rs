//! Data violation reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/report/data_violation` | Bearer | File a report and notify the dataset publisher |
//!
//! A submission flows through `ReportValidator` (dataset and data id checks)
//! and then `ReportService` (permission check, organisation lookups, message
//! composition, dispatch). Each step rejects before anything is sent.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReportService, ReportValidator};
