//! Sharing one game across threads.

pub mod shared;

pub use shared::SharedGame;
