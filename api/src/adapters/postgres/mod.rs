//! PostgreSQL adapters
//!
//! Read-only implementations of repository traits using SeaORM and PostgreSQL.

pub mod assignment_rule_repo;
pub mod settings_repo;
pub mod sla_repo;
pub mod staff_repo;
pub mod team_repo;


pub use assignment_rule_repo::PostgresAssignmentRuleRepository;
pub use settings_repo::PostgresSettingsRepository;
pub use sla_repo::PostgresSlaRepository;
pub use staff_repo::PostgresStaffRepository;
pub use team_repo::PostgresTeamRepository;
