//! Local roster state.
//!
//! # Responsibility
//! - Own the roster for exactly one component instance.
//! - Expose a single mutation entry point and pure derived counts.

pub mod roster_store;
pub mod seed;
