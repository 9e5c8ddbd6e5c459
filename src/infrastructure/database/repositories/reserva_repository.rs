//! SeaORM implementation of ReservaRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::reserva::{Reserva, ReservaRepository, Sala};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reserva;

pub struct SeaOrmReservaRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reserva::Model) -> Reserva {
    Reserva {
        id: m.id,
        usuario: m.usuario,
        fecha: m.fecha,
        // rows only enter through the validated create path
        sala: Sala::parse(&m.sala).unwrap_or(Sala::A),
        hora: m.hora,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

// ── ReservaRepository impl ──────────────────────────────────────

#[async_trait]
impl ReservaRepository for SeaOrmReservaRepository {
    async fn save(&self, r: Reserva) -> DomainResult<()> {
        debug!("Saving reserva: {}", r.id);

        let model = reserva::ActiveModel {
            id: Set(r.id),
            usuario: Set(r.usuario),
            fecha: Set(r.fecha),
            sala: Set(r.sala.as_str().to_string()),
            hora: Set(r.hora),
            created_at: Set(r.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_for_user(&self, usuario: &str) -> DomainResult<Vec<Reserva>> {
        let models = reserva::Entity::find()
            .filter(reserva::Column::Usuario.eq(usuario))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete_for_user(&self, id: &str, usuario: &str) -> DomainResult<u64> {
        debug!("Deleting reserva {} for user {}", id, usuario);

        // ownership check and deletion are one atomic query
        let result = reserva::Entity::delete_many()
            .filter(reserva::Column::Id.eq(id))
            .filter(reserva::Column::Usuario.eq(usuario))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
