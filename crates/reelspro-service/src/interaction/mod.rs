//! Like, comment, and save interactions.

pub mod service;

pub use service::{InteractionService, LikeOutcome, SaveOutcome};
