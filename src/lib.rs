//! # Reservas Service
//!
//! Room reservation REST API with JWT bearer authentication.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, types and traits
//! - **infrastructure**: External concerns (database, persistence)
//! - **api**: REST API with Swagger documentation
//! - **auth**: JWT authentication middleware
//! - **config**: TOML application configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use api::create_api_router;
