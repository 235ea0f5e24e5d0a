//! Domain types for the todo state core

mod id;
mod priority;
mod task;

pub use id::generate_id;
pub use priority::Priority;
pub use task::{CreateRequest, Task, UpdateRequest};
