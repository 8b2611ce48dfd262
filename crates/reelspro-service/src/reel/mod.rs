//! Reel creation and feed assembly.

pub mod service;

pub use service::{CreateReelData, ReelService};
