/// Common SQL query fragments shared by the Postgres repositories
pub struct QueryBuilder;

impl QueryBuilder {
    /// Base SELECT clause for avatar queries
    pub const AVATAR_SELECT: &'static str = r#"
        SELECT id, student_id, data, media_type, file_size, file_path, created_at
        FROM avatars
    "#;

    /// Base SELECT clause for student queries
    pub const STUDENT_SELECT: &'static str = r#"
        SELECT id, name, age, faculty_id
        FROM students
    "#;

    /// Base SELECT clause for faculty queries
    pub const FACULTY_SELECT: &'static str = r#"
        SELECT id, name, color
        FROM faculties
    "#;

    /// Append a filter/ordering tail to one of the base SELECTs
    pub fn select(base: &str, tail: &str) -> String {
        format!("{} {}", base.trim_end(), tail)
    }
}
