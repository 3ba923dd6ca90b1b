mod session_store;

#[cfg(test)]
mod tests;

pub use session_store::{SessionEvent, SessionStore};
