//! PostgreSQL adapter for TeamRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{ComplexId, PqrCategory, Team, TeamId};
use crate::domain::ports::TeamRepository;
use crate::entity::{pqr_team_categories, pqr_teams};
use crate::error::DomainError;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the category lists of the given teams
    async fn categories_of(
        &self,
        team_ids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<PqrCategory>>, DomainError> {
        let rows = pqr_team_categories::Entity::find()
            .filter(pqr_team_categories::Column::TeamId.is_in(team_ids))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut by_team: HashMap<i64, Vec<PqrCategory>> = HashMap::new();
        for row in rows {
            // Unknown category names are ignored, the team simply does not handle them
            if let Ok(category) = row.category.parse() {
                by_team.entry(row.team_id).or_default().push(category);
            }
        }
        Ok(by_team)
    }

    fn to_team(model: pqr_teams::Model, categories: Vec<PqrCategory>) -> Team {
        Team {
            id: TeamId(model.id),
            complex_id: ComplexId(model.complex_id),
            name: model.name,
            categories,
            active: model.is_active,
        }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_active_by_category(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
    ) -> Result<Vec<Team>, DomainError> {
        let team_ids: Vec<i64> = pqr_team_categories::Entity::find()
            .filter(pqr_team_categories::Column::Category.eq(category.as_str()))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .map(|row| row.team_id)
            .collect();

        if team_ids.is_empty() {
            return Ok(vec![]);
        }

        let teams = pqr_teams::Entity::find()
            .filter(pqr_teams::Column::Id.is_in(team_ids))
            .filter(pqr_teams::Column::ComplexId.eq(complex_id.0))
            .filter(pqr_teams::Column::IsActive.eq(true))
            .order_by_asc(pqr_teams::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut categories = self
            .categories_of(teams.iter().map(|t| t.id).collect())
            .await?;

        Ok(teams
            .into_iter()
            .map(|t| {
                let cats = categories.remove(&t.id).unwrap_or_default();
                Self::to_team(t, cats)
            })
            .collect())
    }

    async fn find_active_by_id(
        &self,
        complex_id: &ComplexId,
        id: &TeamId,
    ) -> Result<Option<Team>, DomainError> {
        let team = pqr_teams::Entity::find_by_id(id.0)
            .filter(pqr_teams::Column::ComplexId.eq(complex_id.0))
            .filter(pqr_teams::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(team) = team else {
            return Ok(None);
        };

        let cats = self
            .categories_of(vec![team.id])
            .await?
            .remove(&team.id)
            .unwrap_or_default();
        Ok(Some(Self::to_team(team, cats)))
    }
}
