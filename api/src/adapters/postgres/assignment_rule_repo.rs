//! PostgreSQL adapter for AssignmentRuleRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{
    AssignmentRule, ComplexId, PqrCategory, RuleId, RuleTarget, TeamId, UserId,
};
use crate::domain::ports::AssignmentRuleRepository;
use crate::entity::pqr_assignment_rules;
use crate::error::DomainError;

/// PostgreSQL implementation of AssignmentRuleRepository
pub struct PostgresAssignmentRuleRepository {
    db: DatabaseConnection,
}

impl PostgresAssignmentRuleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssignmentRuleRepository for PostgresAssignmentRuleRepository {
    async fn find_active_by_category(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
    ) -> Result<Vec<AssignmentRule>, DomainError> {
        let results = pqr_assignment_rules::Entity::find()
            .filter(pqr_assignment_rules::Column::ComplexId.eq(complex_id.0))
            .filter(pqr_assignment_rules::Column::Category.eq(category.as_str()))
            .filter(pqr_assignment_rules::Column::IsActive.eq(true))
            .order_by_asc(pqr_assignment_rules::Column::RuleOrder)
            .order_by_asc(pqr_assignment_rules::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(AssignmentRule::try_from).collect()
    }
}

/// Convert SeaORM model to domain entity.
/// A rule with an unknown category or without exactly one target is malformed.
impl TryFrom<pqr_assignment_rules::Model> for AssignmentRule {
    type Error = DomainError;

    fn try_from(model: pqr_assignment_rules::Model) -> Result<Self, Self::Error> {
        let category = model.category.parse::<PqrCategory>().map_err(|e: String| {
            DomainError::MalformedConfig(format!("Assignment rule {}: {}", model.id, e))
        })?;

        let target = match (model.assign_to_user_id, model.assign_to_team_id) {
            (Some(user_id), None) => RuleTarget::User(UserId(user_id)),
            (None, Some(team_id)) => RuleTarget::Team(TeamId(team_id)),
            _ => {
                return Err(DomainError::MalformedConfig(format!(
                    "Assignment rule {} must target exactly one user or team",
                    model.id
                )))
            }
        };

        Ok(AssignmentRule {
            id: RuleId(model.id),
            complex_id: ComplexId(model.complex_id),
            category,
            subcategory: model.subcategory.filter(|s| !s.trim().is_empty()),
            target,
            order: model.rule_order,
            active: model.is_active,
        })
    }
}
