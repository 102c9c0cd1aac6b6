pub mod changelog;
pub mod content_types;
