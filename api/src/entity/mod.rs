//! SeaORM table models
//!
//! Only the columns the engine reads are mapped.

pub mod pqr_assignment_rules;
pub mod pqr_settings;
pub mod pqr_sla;
pub mod pqr_team_categories;
pub mod pqr_teams;
pub mod users;
