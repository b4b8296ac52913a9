//! Routing configuration: assignment rules, teams and per-complex settings
//!
//! All of these are tenant-maintained configuration. The engine only reads them.

use super::ids::{ComplexId, RuleId, TeamId, UserId};
use super::pqr::PqrCategory;

/// Who an assignment rule routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    User(UserId),
    Team(TeamId),
}

/// Tenant-configured mapping from a category (and optionally a subcategory) to
/// a responsible user or team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRule {
    pub id: RuleId,
    pub complex_id: ComplexId,
    pub category: PqrCategory,
    pub subcategory: Option<String>,
    pub target: RuleTarget,
    /// Lower values are evaluated first
    pub order: i32,
    pub active: bool,
}

impl AssignmentRule {
    /// Whether this rule applies to a ticket classified as `(category, subcategory)`.
    /// Category-only rules match any subcategory.
    pub fn matches(&self, category: PqrCategory, subcategory: Option<&str>) -> bool {
        if !self.active || self.category != category {
            return false;
        }
        match (self.subcategory.as_deref(), subcategory) {
            (None, _) => true,
            (Some(wanted), Some(actual)) => wanted.to_lowercase() == actual.to_lowercase(),
            (Some(_), None) => false,
        }
    }

    pub fn is_subcategory_specific(&self) -> bool {
        self.subcategory.is_some()
    }
}

/// A named group of staff handling one or more categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub complex_id: ComplexId,
    pub name: String,
    pub categories: Vec<PqrCategory>,
    pub active: bool,
}

impl Team {
    pub fn handles(&self, category: PqrCategory) -> bool {
        self.active && self.categories.contains(&category)
    }
}

/// Per-complex PQR toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PqrSettings {
    pub complex_id: ComplexId,
    pub auto_categorize_enabled: bool,
    pub auto_assign_enabled: bool,
}

impl PqrSettings {
    /// Behaviour for a complex that never saved its settings
    pub fn enabled(complex_id: ComplexId) -> Self {
        Self {
            complex_id,
            auto_categorize_enabled: true,
            auto_assign_enabled: true,
        }
    }
}
