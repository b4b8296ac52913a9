//! PostgreSQL adapter for SlaRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{ComplexId, PqrCategory, PqrPriority, SlaConfig, SlaId};
use crate::domain::ports::SlaRepository;
use crate::entity::pqr_sla;
use crate::error::DomainError;

/// PostgreSQL implementation of SlaRepository
pub struct PostgresSlaRepository {
    db: DatabaseConnection,
}

impl PostgresSlaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SlaRepository for PostgresSlaRepository {
    async fn find_active_candidates(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        priority: PqrPriority,
    ) -> Result<Vec<SlaConfig>, DomainError> {
        let results = pqr_sla::Entity::find()
            .filter(pqr_sla::Column::ComplexId.eq(complex_id.0))
            .filter(pqr_sla::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(pqr_sla::Column::Category.eq(category.as_str()))
                    .add(pqr_sla::Column::Category.is_null()),
            )
            .filter(
                Condition::any()
                    .add(pqr_sla::Column::Priority.eq(priority.as_str()))
                    .add(pqr_sla::Column::Priority.is_null()),
            )
            .order_by_asc(pqr_sla::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(SlaConfig::try_from).collect()
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<pqr_sla::Model> for SlaConfig {
    type Error = DomainError;

    fn try_from(model: pqr_sla::Model) -> Result<Self, Self::Error> {
        let id = model.id;
        let malformed = move |e: String| DomainError::MalformedConfig(format!("SLA {}: {}", id, e));

        let category = model
            .category
            .as_deref()
            .map(str::parse::<PqrCategory>)
            .transpose()
            .map_err(malformed)?;
        let priority = model
            .priority
            .as_deref()
            .map(str::parse::<PqrPriority>)
            .transpose()
            .map_err(malformed)?;

        Ok(SlaConfig {
            id: SlaId(model.id),
            complex_id: ComplexId(model.complex_id),
            category,
            priority,
            resolution_time_minutes: model.resolution_time_minutes,
            business_hours_only: model.business_hours_only,
            active: model.is_active,
        })
    }
}
