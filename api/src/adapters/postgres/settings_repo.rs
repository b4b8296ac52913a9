//! PostgreSQL adapter for SettingsRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{ComplexId, PqrSettings};
use crate::domain::ports::SettingsRepository;
use crate::entity::pqr_settings;
use crate::error::DomainError;

/// PostgreSQL implementation of SettingsRepository
pub struct PostgresSettingsRepository {
    db: DatabaseConnection,
}

impl PostgresSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn find_by_complex(
        &self,
        complex_id: &ComplexId,
    ) -> Result<Option<PqrSettings>, DomainError> {
        let result = pqr_settings::Entity::find()
            .filter(pqr_settings::Column::ComplexId.eq(complex_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<pqr_settings::Model> for PqrSettings {
    fn from(model: pqr_settings::Model) -> Self {
        PqrSettings {
            complex_id: ComplexId(model.complex_id),
            auto_categorize_enabled: model.auto_categorize_enabled,
            auto_assign_enabled: model.auto_assign_enabled,
        }
    }
}
