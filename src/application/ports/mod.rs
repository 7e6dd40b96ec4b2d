mod avatar_repository;
mod blob_store;
mod faculty_repository;
mod file_name_generator;
mod student_repository;

pub use avatar_repository::{AvatarRepository, RepositoryError};
pub use blob_store::{BlobStore, StorageError};
pub use faculty_repository::FacultyRepository;
pub use file_name_generator::FileNameGenerator;
pub use student_repository::StudentRepository;

#[cfg(test)]
pub use avatar_repository::MockAvatarRepository;
#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use faculty_repository::MockFacultyRepository;
#[cfg(test)]
pub use file_name_generator::MockFileNameGenerator;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
