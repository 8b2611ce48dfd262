//! User account use cases.

pub mod service;

pub use service::{RegisterData, UserService};
