//! REST API module for the reservation service
//!
//! Provides HTTP endpoints for listing, creating and cancelling reservas,
//! with Swagger documentation.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
