//! Staff users that tickets can be assigned to

use serde::{Deserialize, Serialize};

use super::ids::{ComplexId, UserId};

/// Platform role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    ComplexAdmin,
    Staff,
    Reception,
    Resident,
}

impl UserRole {
    /// Roles eligible for the administrator fallback
    pub fn is_administrator(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::ComplexAdmin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::ComplexAdmin => "COMPLEX_ADMIN",
            UserRole::Staff => "STAFF",
            UserRole::Reception => "RECEPTION",
            UserRole::Resident => "RESIDENT",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "COMPLEX_ADMIN" => Ok(UserRole::ComplexAdmin),
            "STAFF" => Ok(UserRole::Staff),
            "RECEPTION" => Ok(UserRole::Reception),
            "RESIDENT" => Ok(UserRole::Resident),
            _ => Err(format!("Unknown user role: {}", s)),
        }
    }
}

/// A user as seen by the assignment resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffUser {
    pub id: UserId,
    pub complex_id: ComplexId,
    pub name: Option<String>,
    pub role: UserRole,
    pub active: bool,
}

impl StaffUser {
    /// Name to record on the ticket, falling back to `"<prefix> <id>"`
    pub fn display_name(&self, prefix: &str) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} {}", prefix, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_roles() {
        assert!(UserRole::Admin.is_administrator());
        assert!(UserRole::ComplexAdmin.is_administrator());
        assert!(!UserRole::Staff.is_administrator());
        assert!(!UserRole::Resident.is_administrator());
    }

    #[test]
    fn role_parse_round_trip() {
        for role in [
            UserRole::Admin,
            UserRole::ComplexAdmin,
            UserRole::Staff,
            UserRole::Reception,
            UserRole::Resident,
        ] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
        assert!("janitor".parse::<UserRole>().is_err());
    }

    #[test]
    fn display_name_falls_back_to_prefix_and_id() {
        let mut user = StaffUser {
            id: UserId(9),
            complex_id: ComplexId(1),
            name: None,
            role: UserRole::ComplexAdmin,
            active: true,
        };
        assert_eq!(user.display_name("Administrador"), "Administrador 9");

        user.name = Some("   ".to_string());
        assert_eq!(user.display_name("Usuario"), "Usuario 9");

        user.name = Some("Marta Gómez".to_string());
        assert_eq!(user.display_name("Usuario"), "Marta Gómez");
    }
}
