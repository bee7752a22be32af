//! API Routes
//!
//! Route handlers organized by functionality.

pub mod foods;
pub mod health;
