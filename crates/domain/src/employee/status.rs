//! Employee status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EmployeeError;

/// The closed set of states an employee record can be in.
///
/// No transition table restricts movement: any status may change to any
/// other through the explicit aggregate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    /// Working normally.
    Active,
    /// No longer employed (resigned, dismissed, etc.).
    Inactive,
    /// Temporarily away (medical leave, vacation, etc.).
    OnLeave,
}

impl EmployeeStatus {
    /// Returns the canonical name used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::OnLeave => "ON_LEAVE",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = EmployeeError;

    /// Parses a status name case-insensitively, ignoring `-` and `_`
    /// separators, so `active`, `ACTIVE`, `on-leave`, and `ON_LEAVE` all
    /// parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "ONLEAVE" => Ok(Self::OnLeave),
            _ => Err(EmployeeError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        for input in ["active", "ACTIVE", "Active"] {
            assert_eq!(input.parse::<EmployeeStatus>().unwrap(), EmployeeStatus::Active);
        }
        for input in ["on_leave", "ON-LEAVE", "OnLeave", "onleave"] {
            assert_eq!(
                input.parse::<EmployeeStatus>().unwrap(),
                EmployeeStatus::OnLeave
            );
        }
        assert_eq!(
            "inactive".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::Inactive
        );
    }

    #[test]
    fn test_parse_unknown_status_fails() {
        let result = "retired".parse::<EmployeeStatus>();
        assert!(matches!(result, Err(EmployeeError::UnknownStatus { .. })));
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(EmployeeStatus::Active.to_string(), "ACTIVE");
        assert_eq!(EmployeeStatus::Inactive.to_string(), "INACTIVE");
        assert_eq!(EmployeeStatus::OnLeave.to_string(), "ON_LEAVE");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, "\"ON_LEAVE\"");
        let status: EmployeeStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, EmployeeStatus::OnLeave);
    }
}
