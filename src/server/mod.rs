//! Connection acceptor
//!
//! Binds the listen socket and hands each accepted connection to its own
//! handler task.

pub mod listener;
