//! # reelspro-auth
//!
//! Credential handling for ReelsPro: Argon2id password hashing, the
//! registration password policy, and JWT session token issuance and
//! validation.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
