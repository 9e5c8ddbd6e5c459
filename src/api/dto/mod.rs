//! API DTOs

pub mod common;
pub mod reserva;

pub use common::*;
pub use reserva::*;
