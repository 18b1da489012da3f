mod patch;
mod record;

pub use patch::{TaskPatch, ValidationError};
pub use record::{Task, DEFAULT_STATUS};
