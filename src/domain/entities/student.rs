use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FacultyId, StudentId};

/// Student as seen by the avatar subsystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    age: i32,
    faculty_id: Option<FacultyId>,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, age: i32, faculty_id: Option<FacultyId>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            faculty_id,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn faculty_id(&self) -> Option<FacultyId> {
        self.faculty_id
    }
}
