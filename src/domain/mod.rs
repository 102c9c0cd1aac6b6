pub mod changelog;
pub mod content_type;
pub mod errors;
pub mod search;
pub mod time_range;
pub mod user;
