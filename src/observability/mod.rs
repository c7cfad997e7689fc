//! Observability support.
//!
//! The core instruments itself with `tracing` spans and structured events;
//! this module provides the optional subscriber setup for hosts that do not
//! install their own.

pub mod init;

pub use init::init_tracing;
