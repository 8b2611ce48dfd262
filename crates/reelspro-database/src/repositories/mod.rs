//! Concrete repository implementations, one per entity.

pub mod notification;
pub mod reel;
pub mod user;

pub use notification::NotificationRepository;
pub use reel::ReelRepository;
pub use user::UserRepository;
