//! Core types for Caremate.

pub mod conversation;
pub mod message;

pub use conversation::*;
pub use message::*;
