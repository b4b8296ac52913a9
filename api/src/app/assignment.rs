//! Assignment resolution
//!
//! Tries an ordered list of strategies (rule, team, administrator) and keeps
//! the first one that yields an assignee. Results are never combined.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{Assignment, AssignmentRule, ComplexId, PqrCategory, RuleTarget};
use crate::domain::ports::{AssignmentRuleRepository, StaffRepository, TeamRepository};
use crate::error::DomainError;

/// Name prefix for users reached through a rule that have no display name
const RULE_USER_PREFIX: &str = "Usuario";
/// Name prefix for administrators without a display name
const ADMIN_PREFIX: &str = "Administrador";

/// One way of finding who should own a ticket
#[async_trait]
pub trait AssignmentStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        subcategory: Option<&str>,
    ) -> Result<Option<Assignment>, DomainError>;
}

/// Sort rules so that subcategory-specific ones come first, then by declared
/// order, then by id
pub fn order_rules(mut rules: Vec<AssignmentRule>) -> Vec<AssignmentRule> {
    rules.sort_by_key(|r| (!r.is_subcategory_specific(), r.order, r.id));
    rules
}

/// Routes through tenant-configured assignment rules
pub struct RuleStrategy<R, T, U>
where
    R: AssignmentRuleRepository,
    T: TeamRepository,
    U: StaffRepository,
{
    rules: Arc<R>,
    teams: Arc<T>,
    staff: Arc<U>,
}

impl<R, T, U> RuleStrategy<R, T, U>
where
    R: AssignmentRuleRepository,
    T: TeamRepository,
    U: StaffRepository,
{
    pub fn new(rules: Arc<R>, teams: Arc<T>, staff: Arc<U>) -> Self {
        Self {
            rules,
            teams,
            staff,
        }
    }

    async fn resolve_target(
        &self,
        complex_id: &ComplexId,
        rule: &AssignmentRule,
    ) -> Result<Option<Assignment>, DomainError> {
        match rule.target {
            RuleTarget::User(user_id) => {
                let user = self.staff.find_active_by_id(complex_id, &user_id).await?;
                Ok(user.map(|u| Assignment::User {
                    id: u.id,
                    name: u.display_name(RULE_USER_PREFIX),
                    role: u.role,
                }))
            }
            RuleTarget::Team(team_id) => {
                let team = self.teams.find_active_by_id(complex_id, &team_id).await?;
                Ok(team.map(|t| Assignment::Team {
                    id: t.id,
                    name: t.name,
                }))
            }
        }
    }
}

#[async_trait]
impl<R, T, U> AssignmentStrategy for RuleStrategy<R, T, U>
where
    R: AssignmentRuleRepository,
    T: TeamRepository,
    U: StaffRepository,
{
    fn name(&self) -> &'static str {
        "rule"
    }

    async fn resolve(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        subcategory: Option<&str>,
    ) -> Result<Option<Assignment>, DomainError> {
        let candidates = self
            .rules
            .find_active_by_category(complex_id, category)
            .await?
            .into_iter()
            .filter(|r| r.complex_id == *complex_id && r.matches(category, subcategory))
            .collect();

        for rule in order_rules(candidates) {
            if let Some(assignment) = self.resolve_target(complex_id, &rule).await? {
                tracing::debug!(rule_id = %rule.id, "Assignment rule matched");
                return Ok(Some(assignment));
            }
            tracing::debug!(
                rule_id = %rule.id,
                "Assignment rule target is missing or inactive, trying next rule"
            );
        }

        Ok(None)
    }
}

/// Routes to the first active team handling the category
pub struct TeamStrategy<T: TeamRepository> {
    teams: Arc<T>,
}

impl<T: TeamRepository> TeamStrategy<T> {
    pub fn new(teams: Arc<T>) -> Self {
        Self { teams }
    }
}

#[async_trait]
impl<T: TeamRepository> AssignmentStrategy for TeamStrategy<T> {
    fn name(&self) -> &'static str {
        "team"
    }

    async fn resolve(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        _subcategory: Option<&str>,
    ) -> Result<Option<Assignment>, DomainError> {
        let teams = self
            .teams
            .find_active_by_category(complex_id, category)
            .await?;

        Ok(teams
            .into_iter()
            .filter(|t| t.complex_id == *complex_id && t.handles(category))
            .min_by_key(|t| t.id)
            .map(|t| Assignment::Team {
                id: t.id,
                name: t.name,
            }))
    }
}

/// Falls back to the complex administrator with the lowest id
pub struct AdministratorStrategy<U: StaffRepository> {
    staff: Arc<U>,
}

impl<U: StaffRepository> AdministratorStrategy<U> {
    pub fn new(staff: Arc<U>) -> Self {
        Self { staff }
    }
}

#[async_trait]
impl<U: StaffRepository> AssignmentStrategy for AdministratorStrategy<U> {
    fn name(&self) -> &'static str {
        "administrator"
    }

    async fn resolve(
        &self,
        complex_id: &ComplexId,
        _category: PqrCategory,
        _subcategory: Option<&str>,
    ) -> Result<Option<Assignment>, DomainError> {
        let admins = self.staff.find_active_administrators(complex_id).await?;

        Ok(admins
            .into_iter()
            .filter(|u| u.active && u.complex_id == *complex_id && u.role.is_administrator())
            .min_by_key(|u| u.id)
            .map(|u| Assignment::User {
                id: u.id,
                name: u.display_name(ADMIN_PREFIX),
                role: u.role,
            }))
    }
}

/// Runs assignment strategies in order until one succeeds
pub struct AssignmentResolver {
    strategies: Vec<Box<dyn AssignmentStrategy>>,
}

impl AssignmentResolver {
    pub fn new(strategies: Vec<Box<dyn AssignmentStrategy>>) -> Self {
        Self { strategies }
    }

    /// Rule, then team, then administrator
    pub fn standard<R, T, U>(rules: Arc<R>, teams: Arc<T>, staff: Arc<U>) -> Self
    where
        R: AssignmentRuleRepository + 'static,
        T: TeamRepository + 'static,
        U: StaffRepository + 'static,
    {
        let rule: Box<dyn AssignmentStrategy> =
            Box::new(RuleStrategy::new(rules, teams.clone(), staff.clone()));
        let team: Box<dyn AssignmentStrategy> = Box::new(TeamStrategy::new(teams));
        let admin: Box<dyn AssignmentStrategy> = Box::new(AdministratorStrategy::new(staff));
        let strategies = vec![rule, team, admin];
        Self::new(strategies)
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve who owns a ticket. Returns `Ok(None)` when auto-assignment is
    /// disabled or no strategy produced an assignee.
    pub async fn resolve(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        subcategory: Option<&str>,
        auto_assign_enabled: bool,
    ) -> Result<Option<Assignment>, DomainError> {
        if !auto_assign_enabled {
            tracing::debug!(complex_id = %complex_id, "Auto-assignment disabled");
            return Ok(None);
        }

        for strategy in &self.strategies {
            if let Some(assignment) = strategy.resolve(complex_id, category, subcategory).await? {
                tracing::debug!(
                    complex_id = %complex_id,
                    strategy = strategy.name(),
                    "PQR assignment resolved"
                );
                return Ok(Some(assignment));
            }
        }

        tracing::debug!(complex_id = %complex_id, category = %category, "PQR left unassigned");
        Ok(None)
    }
}
