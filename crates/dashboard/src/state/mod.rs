//! Shared layout state

mod memory;
mod traits;

pub use memory::InMemoryStateStore;
pub use traits::StateStore;
