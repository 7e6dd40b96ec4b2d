pub mod download;
pub mod faculties;
pub mod health;
pub mod list;
pub mod upload;

#[cfg(test)]
mod tests;

pub use download::{download_from_db_handler, download_from_fs_handler};
pub use faculties::{faculties_by_color_handler, get_faculty_handler, search_faculties_handler};
pub use health::{health_handler, readiness_handler};
pub use list::list_handler;
pub use upload::upload_handler;
