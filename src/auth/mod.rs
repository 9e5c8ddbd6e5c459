//! Authentication and Authorization module
//!
//! Provides JWT bearer-token authentication for the reservation API.

pub mod jwt;
pub mod middleware;

pub use jwt::{create_token, verify_token, Claims, JwtConfig};
pub use middleware::{auth_middleware, AuthState, AuthenticatedUser};
