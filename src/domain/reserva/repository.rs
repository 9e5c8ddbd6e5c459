//! Reserva repository interface

use async_trait::async_trait;

use super::model::Reserva;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservaRepository: Send + Sync {
    /// Save a new reservation
    async fn save(&self, reserva: Reserva) -> DomainResult<()>;

    /// Find all reservations owned by `usuario`, in store order
    async fn find_for_user(&self, usuario: &str) -> DomainResult<Vec<Reserva>>;

    /// Delete the reservation matching both `id` and `usuario` in a single
    /// query, and return the number of rows deleted (0 or 1). Ownership and
    /// deletion are one atomic step; the record is never fetched first.
    async fn delete_for_user(&self, id: &str, usuario: &str) -> DomainResult<u64>;
}
