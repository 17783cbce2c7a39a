//! Session store

mod session_store;

pub use session_store::{AuthSession, SessionStore};
