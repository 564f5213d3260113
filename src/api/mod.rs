//! HTTP API module for the PAYE engine.
//!
//! This module provides the REST API endpoints through which callers submit
//! compensation figures and receive PAYE results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, SummaryResponse};
pub use state::AppState;
