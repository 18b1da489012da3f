//! Storage contracts consumed by the dispatcher.
//!
//! Concrete backends live in the `taskpad` crate and are selected at compile
//! time via feature flags; everything here is backend-agnostic.

mod error;
mod traits;
mod update;

pub use error::{Result, StoreError};
pub use traits::{Item, TaskStore};
pub use update::UpdateExpression;
