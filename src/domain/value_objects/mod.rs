mod avatar_file_name;
mod avatar_id;
mod faculty_id;
mod page_request;
mod student_id;

pub use avatar_file_name::AvatarFileName;
pub use avatar_id::AvatarId;
pub use faculty_id::FacultyId;
pub use page_request::PageRequest;
pub use student_id::StudentId;
