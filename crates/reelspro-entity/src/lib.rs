//! # reelspro-entity
//!
//! Domain entity models for ReelsPro. Every struct in this crate
//! represents a database table row or a joined read projection. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod notification;
pub mod reel;
pub mod user;
