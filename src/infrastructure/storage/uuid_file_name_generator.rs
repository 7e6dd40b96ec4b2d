use uuid::Uuid;

use crate::application::ports::FileNameGenerator;

/// Names blobs with random (v4) UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidFileNameGenerator;

impl FileNameGenerator for UuidFileNameGenerator {
    fn generate_unique_name(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
