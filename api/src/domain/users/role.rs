use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

/// Platform role of a user. The serialized labels are the ones stored in the
/// `users.role` column and exchanged over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Customer,
    #[serde(rename = "Resort Owner")]
    ResortOwner,
    #[serde(rename = "Resort Admin")]
    ResortAdmin,
    #[serde(rename = "Support Staff")]
    SupportStaff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::ResortOwner => "Resort Owner",
            Role::ResortAdmin => "Resort Admin",
            Role::SupportStaff => "Support Staff",
        }
    }

    /// Roles allowed to register new resorts.
    pub fn can_own_resorts(&self) -> bool {
        matches!(self, Role::ResortOwner | Role::ResortAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(Role::Customer),
            "Resort Owner" => Ok(Role::ResortOwner),
            "Resort Admin" => Ok(Role::ResortAdmin),
            "Support Staff" => Ok(Role::SupportStaff),
            other => Err(ValidationError::new(format!("unknown role: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for role in [
            Role::Customer,
            Role::ResortOwner,
            Role::ResortAdmin,
            Role::SupportStaff,
        ] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Role::ResortOwner).unwrap();
        assert_eq!(json, "\"Resort Owner\"");
        let parsed: Role = serde_json::from_str("\"Support Staff\"").unwrap();
        assert_eq!(parsed, Role::SupportStaff);
    }

    #[test]
    fn only_owners_and_admins_own_resorts() {
        assert!(Role::ResortOwner.can_own_resorts());
        assert!(Role::ResortAdmin.can_own_resorts());
        assert!(!Role::Customer.can_own_resorts());
        assert!(!Role::SupportStaff.can_own_resorts());
    }
}
