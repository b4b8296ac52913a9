//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Every fixture belongs to `COMPLEX` and is active; tests mutate the
//! returned value when they need something else.

use crate::domain::entities::{
    AssignmentRule, ComplexId, PqrCategory, PqrPriority, PqrSettings, PqrType, RuleId, RuleTarget,
    SlaConfig, SlaId, StaffUser, Team, TeamId, TicketSubmission, UnitId, UserId, UserRole,
};

/// Complex every fixture belongs to
pub const COMPLEX: ComplexId = ComplexId(1);

/// Another complex, for tenant isolation tests
pub const OTHER_COMPLEX: ComplexId = ComplexId(2);

/// Create a resident's submission with no explicit category or priority
pub fn test_submission(title: &str, description: &str) -> TicketSubmission {
    TicketSubmission {
        pqr_type: PqrType::Complaint,
        title: title.to_string(),
        description: description.to_string(),
        category: None,
        priority: None,
        submitter_id: UserId(100),
        submitter_name: "Residente de prueba".to_string(),
        submitter_role: UserRole::Resident,
        unit_id: UnitId(101),
        unit_number: "101".to_string(),
        complex_id: COMPLEX,
    }
}

/// Create settings with the given toggles
pub fn test_settings(auto_categorize_enabled: bool, auto_assign_enabled: bool) -> PqrSettings {
    PqrSettings {
        complex_id: COMPLEX,
        auto_categorize_enabled,
        auto_assign_enabled,
    }
}

/// Create an assignment rule with order 0
pub fn test_rule(
    id: i64,
    category: PqrCategory,
    subcategory: Option<&str>,
    target: RuleTarget,
) -> AssignmentRule {
    AssignmentRule {
        id: RuleId(id),
        complex_id: COMPLEX,
        category,
        subcategory: subcategory.map(str::to_string),
        target,
        order: 0,
        active: true,
    }
}

/// Create a team handling the given categories
pub fn test_team(id: i64, categories: &[PqrCategory]) -> Team {
    Team {
        id: TeamId(id),
        complex_id: COMPLEX,
        name: format!("Equipo {}", id),
        categories: categories.to_vec(),
        active: true,
    }
}

/// Create a complex administrator
pub fn test_admin(id: i64) -> StaffUser {
    StaffUser {
        id: UserId(id),
        complex_id: COMPLEX,
        name: Some(format!("Admin {}", id)),
        role: UserRole::ComplexAdmin,
        active: true,
    }
}

/// Create a staff member (not an administrator)
pub fn test_staff(id: i64, name: &str) -> StaffUser {
    StaffUser {
        id: UserId(id),
        complex_id: COMPLEX,
        name: Some(name.to_string()),
        role: UserRole::Staff,
        active: true,
    }
}

/// Create an SLA row. `None` category or priority is a wildcard.
pub fn test_sla(
    id: i64,
    category: Option<PqrCategory>,
    priority: Option<PqrPriority>,
    resolution_time_minutes: i64,
    business_hours_only: bool,
) -> SlaConfig {
    SlaConfig {
        id: SlaId(id),
        complex_id: COMPLEX,
        category,
        priority,
        resolution_time_minutes,
        business_hours_only,
        active: true,
    }
}
