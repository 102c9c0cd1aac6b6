pub mod entity;
pub mod filter;
pub mod repository;

pub use entity::{ContentTypeKey, TypeDescriptor};
pub use filter::TypeFilter;
pub use repository::ContentTypeRepository;
