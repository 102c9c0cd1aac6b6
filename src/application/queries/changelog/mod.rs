mod actors;
mod list;
mod service;

pub use list::{GetChangeQuery, ListChangesQuery};
pub use service::ChangeLogQueryService;
