mod local_avatar_store;
mod path_builder;
mod uuid_file_name_generator;

pub use local_avatar_store::LocalAvatarStore;
pub use path_builder::PathBuilder;
pub use uuid_file_name_generator::UuidFileNameGenerator;
