// Utils compartidos

pub mod constants;
pub mod storage;

pub use constants::*;
pub use storage::{BrowserStorage, SessionStorage};
#[cfg(test)]
pub use storage::MemoryStorage;
