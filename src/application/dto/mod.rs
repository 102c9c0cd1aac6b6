pub mod changelog;
pub mod content_types;
pub mod listing;

pub use changelog::{ActorDto, ChangeRecordDto};
pub use content_types::ContentTypeDto;
pub use listing::ListResponse;
