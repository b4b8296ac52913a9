//! PQR (petition, complaint, claim) domain types
//!
//! A `TicketSubmission` is what a resident or staff member files; a
//! `ClassificationResult` is the advisory decision the engine hands back to the
//! ticket-creation workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ComplexId, TeamId, UnitId, UserId};
use super::staff::UserRole;

/// Closed classification taxonomy used for routing and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PqrCategory {
    Maintenance,
    Security,
    Administrative,
    Financial,
    Community,
    Services,
    Suggestion,
    Complaint,
    Other,
}

impl PqrCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PqrCategory::Maintenance => "MAINTENANCE",
            PqrCategory::Security => "SECURITY",
            PqrCategory::Administrative => "ADMINISTRATIVE",
            PqrCategory::Financial => "FINANCIAL",
            PqrCategory::Community => "COMMUNITY",
            PqrCategory::Services => "SERVICES",
            PqrCategory::Suggestion => "SUGGESTION",
            PqrCategory::Complaint => "COMPLAINT",
            PqrCategory::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for PqrCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PqrCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MAINTENANCE" => Ok(PqrCategory::Maintenance),
            "SECURITY" => Ok(PqrCategory::Security),
            "ADMINISTRATIVE" => Ok(PqrCategory::Administrative),
            "FINANCIAL" => Ok(PqrCategory::Financial),
            "COMMUNITY" => Ok(PqrCategory::Community),
            "SERVICES" => Ok(PqrCategory::Services),
            "SUGGESTION" => Ok(PqrCategory::Suggestion),
            "COMPLAINT" => Ok(PqrCategory::Complaint),
            "OTHER" => Ok(PqrCategory::Other),
            _ => Err(format!("Unknown PQR category: {}", s)),
        }
    }
}

/// PQR priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PqrPriority {
    Low,
    Medium,
    High,
    Urgent,
    Critical,
}

impl PqrPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            PqrPriority::Low => "LOW",
            PqrPriority::Medium => "MEDIUM",
            PqrPriority::High => "HIGH",
            PqrPriority::Urgent => "URGENT",
            PqrPriority::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for PqrPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PqrPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(PqrPriority::Low),
            "MEDIUM" => Ok(PqrPriority::Medium),
            "HIGH" => Ok(PqrPriority::High),
            "URGENT" => Ok(PqrPriority::Urgent),
            "CRITICAL" => Ok(PqrPriority::Critical),
            _ => Err(format!("Unknown PQR priority: {}", s)),
        }
    }
}

/// Kind of request being filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PqrType {
    Petition,
    Complaint,
    Claim,
    Suggestion,
}

/// A freshly submitted ticket. Required fields are validated by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSubmission {
    #[serde(rename = "type")]
    pub pqr_type: PqrType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<PqrCategory>,
    #[serde(default)]
    pub priority: Option<PqrPriority>,
    pub submitter_id: UserId,
    pub submitter_name: String,
    pub submitter_role: UserRole,
    pub unit_id: UnitId,
    pub unit_number: String,
    pub complex_id: ComplexId,
}

impl TicketSubmission {
    /// Lowercased `title + " " + description`, the text every heuristic scans
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// Who ends up responsible for a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    User {
        id: UserId,
        name: String,
        role: UserRole,
    },
    Team {
        id: TeamId,
        name: String,
    },
}

/// Outcome of classifying a submission
///
/// `category` and `priority` are always present. The assignee fields are derived
/// from a single `Option<Assignment>`, so a user and a team are never both set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: PqrCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub priority: PqrPriority,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl ClassificationResult {
    pub fn new(
        category: PqrCategory,
        subcategory: Option<String>,
        priority: PqrPriority,
        tags: Vec<String>,
        assignment: Option<Assignment>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        let mut result = Self {
            category,
            subcategory,
            priority,
            tags,
            assigned_to_id: None,
            assigned_to_name: None,
            assigned_to_role: None,
            assigned_team_id: None,
            due_date,
        };

        match assignment {
            Some(Assignment::User { id, name, role }) => {
                result.assigned_to_id = Some(id);
                result.assigned_to_name = Some(name);
                result.assigned_to_role = Some(role);
            }
            Some(Assignment::Team { id, .. }) => {
                result.assigned_team_id = Some(id);
            }
            None => {}
        }

        result
    }

    /// Safe default returned when any configuration lookup fails
    pub fn fallback() -> Self {
        Self::new(PqrCategory::Other, None, PqrPriority::Medium, Vec::new(), None, None)
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to_id.is_some() || self.assigned_team_id.is_some()
    }
}

/// Insertion-ordered tag set: lowercase, no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !self.0.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn extend<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.insert(tag.as_ref());
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
