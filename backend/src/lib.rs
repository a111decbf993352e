//! Box office dashboard backend.
//!
//! - `report`: the reporting engine (schema inspection, rating column
//!   detection, rankings, payload assembly, CSV export).
//! - `admin`: schema initialization and data loading.
//! - `services`: the actix-web routes over both.
//! - `store`, `config`, `state`, `error`: plumbing shared by the above.

pub mod admin;
pub mod config;
pub mod error;
pub mod report;
pub mod services;
pub mod state;
pub mod store;
