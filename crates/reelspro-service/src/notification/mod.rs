//! Notification listing.

pub mod service;

pub use service::NotificationService;
