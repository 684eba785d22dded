/// API route handlers
pub mod health;
pub mod stream;
pub mod tracks;
