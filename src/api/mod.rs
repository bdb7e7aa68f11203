//! Trivia backend access: wire types, the HTTP client, and the task-spawning
//! request executor.

pub mod client;
pub mod error;
pub mod manager;
pub mod model;

#[cfg(test)]
pub(crate) mod test_support;
