pub mod recycle;

pub use recycle::{RequestBudget, track_request_budget};
