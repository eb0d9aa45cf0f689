//! HTTP API
//!
//! Thin axum layer over the services; all decisions live in `service`.

pub mod handlers;
pub mod server;

pub use server::{router, run};

use crate::service::Services;
use std::sync::Arc;

pub type AppState<E, L> = Arc<Services<E, L>>;
