//! Domain entities
//!
//! Pure domain models for the PQR classification engine.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod ids;
pub mod pqr;
pub mod routing;
pub mod sla;
pub mod staff;

pub use ids::{ComplexId, RuleId, SlaId, TeamId, UnitId, UserId};
pub use pqr::{
    Assignment, ClassificationResult, PqrCategory, PqrPriority, PqrType, TagSet,
    TicketSubmission,
};
pub use routing::{AssignmentRule, PqrSettings, RuleTarget, Team};
pub use sla::{BusinessHours, SlaConfig};
pub use staff::{StaffUser, UserRole};
