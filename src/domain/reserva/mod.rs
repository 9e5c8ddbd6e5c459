//! Reserva aggregate
//!
//! Contains the Reserva entity, the Sala type, payload validation helpers,
//! and the repository interface.

pub mod model;
pub mod repository;

pub use model::{es_domingo, hora_valida, parse_fecha, Reserva, Sala};
pub use repository::ReservaRepository;
