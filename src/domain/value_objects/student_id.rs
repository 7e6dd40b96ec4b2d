use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Database identifier of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct StudentId(i64);

impl StudentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StudentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidStudentId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_student_id_display() {
        assert_eq!(StudentId::new(7).to_string(), "7");
    }

    #[test]
    fn test_student_id_from_str_valid() {
        let id: StudentId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);

        let padded: StudentId = " 42 ".parse().unwrap();
        assert_eq!(padded, id);
    }

    #[test]
    fn test_student_id_from_str_invalid() {
        for invalid in ["", "abc", "4.2", "9999999999999999999999"] {
            assert!(
                matches!(
                    invalid.parse::<StudentId>(),
                    Err(DomainError::InvalidStudentId(_))
                ),
                "Should fail to parse invalid student ID: {}",
                invalid
            );
        }
    }

    #[test]
    fn test_student_id_hash_and_eq() {
        let mut set = HashSet::new();
        set.insert(StudentId::new(1));

        assert!(set.contains(&StudentId::from(1)));
        assert!(!set.contains(&StudentId::new(2)));
    }

    #[test]
    fn test_student_id_serializes_as_number() {
        let json = serde_json::to_string(&StudentId::new(7)).unwrap();
        assert_eq!(json, "7");

        let back: StudentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StudentId::new(7));
    }
}
