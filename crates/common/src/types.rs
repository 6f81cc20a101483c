use serde::{Deserialize, Serialize};

/// Unique identifier for an employee record.
///
/// Assigned by the persistence layer on first save (a MongoDB ObjectId hex
/// string in production, a UUID string in the in-memory repository), so it
/// wraps an opaque string rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates an employee ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_string_conversion() {
        let id = EmployeeId::new("65f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(id.as_str(), "65f1a2b3c4d5e6f7a8b9c0d1");

        let id2: EmployeeId = "abc".into();
        assert_eq!(id2.as_str(), "abc");
    }

    #[test]
    fn employee_id_display() {
        let id = EmployeeId::new("abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn employee_id_serialization_roundtrip() {
        let id = EmployeeId::new("65f1a2b3c4d5e6f7a8b9c0d1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65f1a2b3c4d5e6f7a8b9c0d1\"");
        let deserialized: EmployeeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
