//! PostgreSQL adapter for StaffRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{ComplexId, StaffUser, UserId, UserRole};
use crate::domain::ports::StaffRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of StaffRepository
pub struct PostgresStaffRepository {
    db: DatabaseConnection,
}

impl PostgresStaffRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn find_active_by_id(
        &self,
        complex_id: &ComplexId,
        id: &UserId,
    ) -> Result<Option<StaffUser>, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .filter(users::Column::ComplexId.eq(complex_id.0))
            .filter(users::Column::Active.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_active_administrators(
        &self,
        complex_id: &ComplexId,
    ) -> Result<Vec<StaffUser>, DomainError> {
        let results = users::Entity::find()
            .filter(users::Column::ComplexId.eq(complex_id.0))
            .filter(users::Column::Active.eq(true))
            .filter(users::Column::Role.is_in([
                UserRole::Admin.as_str(),
                UserRole::ComplexAdmin.as_str(),
            ]))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for StaffUser {
    fn from(model: users::Model) -> Self {
        StaffUser {
            id: UserId(model.id),
            complex_id: ComplexId(model.complex_id),
            name: model.name,
            role: model.role.parse().unwrap_or(UserRole::Resident),
            active: model.active,
        }
    }
}
