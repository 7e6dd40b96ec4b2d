mod postgres_avatar_repository;
mod postgres_faculty_repository;
mod postgres_student_repository;
mod query_builder;

pub use postgres_avatar_repository::PostgresAvatarRepository;
pub use postgres_faculty_repository::PostgresFacultyRepository;
pub use postgres_student_repository::PostgresStudentRepository;
pub use query_builder::QueryBuilder;
