mod list;
mod service;

pub use list::{GetContentTypeQuery, ListContentTypesQuery};
pub use service::ContentTypeQueryService;
