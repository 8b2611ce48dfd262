//! # reelspro-service
//!
//! Business logic service layer for ReelsPro. Each service orchestrates
//! repositories and authentication primitives to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod interaction;
pub mod notification;
pub mod reel;
pub mod user;

pub use context::RequestContext;
pub use interaction::InteractionService;
pub use notification::NotificationService;
pub use reel::ReelService;
pub use user::UserService;
