pub mod entity;
pub mod filter;
pub mod repository;

pub use entity::{ActorRef, ChangeAction, ChangeRecord};
pub use filter::{ChangeFilter, ObjectTypeLookup};
pub use repository::ChangeRecordRepository;
