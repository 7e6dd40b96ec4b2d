mod avatar;
mod faculty;
mod student;

pub use avatar::{Avatar, NewAvatar};
pub use faculty::Faculty;
pub use student::Student;
