use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FacultyId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    id: FacultyId,
    name: String,
    color: String,
}

impl Faculty {
    pub fn new(id: FacultyId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> FacultyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
