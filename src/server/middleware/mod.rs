//! Request-level building blocks: the authentication guard, the session wrapper and the
//! upload store.

pub mod auth;
pub mod session;
pub mod upload;

#[cfg(test)]
mod test;
