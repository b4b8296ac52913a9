//! Repository port traits
//!
//! Read-only access to the per-complex PQR configuration.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    AssignmentRule, ComplexId, PqrCategory, PqrPriority, PqrSettings, SlaConfig, StaffUser, Team,
    TeamId, UserId,
};
use crate::error::DomainError;

/// Repository for per-complex PQR settings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find the settings row of a complex, if it was ever saved
    async fn find_by_complex(
        &self,
        complex_id: &ComplexId,
    ) -> Result<Option<PqrSettings>, DomainError>;
}

/// Repository for assignment rules
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRuleRepository: Send + Sync {
    /// Find active rules of a complex targeting a category (any subcategory)
    async fn find_active_by_category(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
    ) -> Result<Vec<AssignmentRule>, DomainError>;
}

/// Repository for staff teams
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find active teams of a complex that handle a category
    async fn find_active_by_category(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
    ) -> Result<Vec<Team>, DomainError>;

    /// Find an active team by ID within a complex
    async fn find_active_by_id(
        &self,
        complex_id: &ComplexId,
        id: &TeamId,
    ) -> Result<Option<Team>, DomainError>;
}

/// Repository for users that can own tickets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Find an active user by ID within a complex
    async fn find_active_by_id(
        &self,
        complex_id: &ComplexId,
        id: &UserId,
    ) -> Result<Option<StaffUser>, DomainError>;

    /// Find active `ADMIN`/`COMPLEX_ADMIN` users of a complex
    async fn find_active_administrators(
        &self,
        complex_id: &ComplexId,
    ) -> Result<Vec<StaffUser>, DomainError>;
}

/// Repository for SLA configuration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlaRepository: Send + Sync {
    /// Find active SLA rows of a complex that could apply to `(category, priority)`,
    /// wildcard rows included
    async fn find_active_candidates(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        priority: PqrPriority,
    ) -> Result<Vec<SlaConfig>, DomainError>;
}
