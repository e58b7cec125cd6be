// src/lib.rs

pub mod chains;
pub mod contracts;
pub mod core;
pub mod format;
pub mod logging;
pub mod provider;
pub mod session;
pub mod store;
pub mod theme;

// Re-export the types an embedding application touches on every page.
pub use crate::core::config::ConnectConfig;
pub use crate::core::errors::ConnectError;
pub use crate::session::adapter::SessionAdapter;
pub use crate::store::{WalletState, WalletStore};
