//! In-memory implementations of port traits
//!
//! These are configured with `with_*` builders and filter by complex and
//! `active` exactly like the database queries do.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    AssignmentRule, ComplexId, PqrCategory, PqrPriority, PqrSettings, RuleId, SlaConfig, SlaId,
    StaffUser, Team, TeamId, UserId,
};
use crate::domain::ports::{
    AssignmentRuleRepository, SettingsRepository, SlaRepository, StaffRepository, TeamRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Settings Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySettingsRepository {
    settings: Arc<RwLock<HashMap<ComplexId, PqrSettings>>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(self, settings: PqrSettings) -> Self {
        self.settings
            .write()
            .unwrap()
            .insert(settings.complex_id, settings);
        self
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find_by_complex(
        &self,
        complex_id: &ComplexId,
    ) -> Result<Option<PqrSettings>, DomainError> {
        Ok(self.settings.read().unwrap().get(complex_id).copied())
    }
}

// ============================================================================
// In-Memory Assignment Rule Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAssignmentRuleRepository {
    rules: Arc<RwLock<HashMap<RuleId, AssignmentRule>>>,
}

impl InMemoryAssignmentRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(self, rule: AssignmentRule) -> Self {
        self.rules.write().unwrap().insert(rule.id, rule);
        self
    }
}

#[async_trait]
impl AssignmentRuleRepository for InMemoryAssignmentRuleRepository {
    async fn find_active_by_category(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
    ) -> Result<Vec<AssignmentRule>, DomainError> {
        let rules = self.rules.read().unwrap();
        let mut result: Vec<AssignmentRule> = rules
            .values()
            .filter(|r| r.complex_id == *complex_id && r.category == category && r.active)
            .cloned()
            .collect();
        // HashMap iteration order is random; keep results stable like ORDER BY id
        result.sort_by_key(|r| r.id);
        Ok(result)
    }
}

// ============================================================================
// In-Memory Team Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<TeamId, Team>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(self, team: Team) -> Self {
        self.teams.write().unwrap().insert(team.id, team);
        self
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_active_by_category(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
    ) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().unwrap();
        let mut result: Vec<Team> = teams
            .values()
            .filter(|t| t.complex_id == *complex_id && t.handles(category))
            .cloned()
            .collect();
        result.sort_by_key(|t| t.id);
        Ok(result)
    }

    async fn find_active_by_id(
        &self,
        complex_id: &ComplexId,
        id: &TeamId,
    ) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().unwrap();
        Ok(teams
            .get(id)
            .filter(|t| t.complex_id == *complex_id && t.active)
            .cloned())
    }
}

// ============================================================================
// In-Memory Staff Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryStaffRepository {
    users: Arc<RwLock<HashMap<UserId, StaffUser>>>,
}

impl InMemoryStaffRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: StaffUser) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }
}

#[async_trait]
impl StaffRepository for InMemoryStaffRepository {
    async fn find_active_by_id(
        &self,
        complex_id: &ComplexId,
        id: &UserId,
    ) -> Result<Option<StaffUser>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users
            .get(id)
            .filter(|u| u.complex_id == *complex_id && u.active)
            .cloned())
    }

    async fn find_active_administrators(
        &self,
        complex_id: &ComplexId,
    ) -> Result<Vec<StaffUser>, DomainError> {
        let users = self.users.read().unwrap();
        let mut result: Vec<StaffUser> = users
            .values()
            .filter(|u| u.complex_id == *complex_id && u.active && u.role.is_administrator())
            .cloned()
            .collect();
        result.sort_by_key(|u| u.id);
        Ok(result)
    }
}

// ============================================================================
// In-Memory SLA Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySlaRepository {
    slas: Arc<RwLock<HashMap<SlaId, SlaConfig>>>,
}

impl InMemorySlaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sla(self, sla: SlaConfig) -> Self {
        self.slas.write().unwrap().insert(sla.id, sla);
        self
    }
}

#[async_trait]
impl SlaRepository for InMemorySlaRepository {
    async fn find_active_candidates(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        priority: PqrPriority,
    ) -> Result<Vec<SlaConfig>, DomainError> {
        let slas = self.slas.read().unwrap();
        let mut result: Vec<SlaConfig> = slas
            .values()
            .filter(|s| {
                s.complex_id == *complex_id
                    && s.active
                    && s.category.map_or(true, |c| c == category)
                    && s.priority.map_or(true, |p| p == priority)
            })
            .cloned()
            .collect();
        result.sort_by_key(|s| s.id);
        Ok(result)
    }
}
