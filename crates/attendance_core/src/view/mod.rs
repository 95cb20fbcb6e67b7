//! Host-agnostic presentation projection.
//!
//! # Responsibility
//! - Turn one roster state into everything a host needs to draw.
//! - Keep visual variant selection out of the hosts.
//!
//! # Invariants
//! - A view is rebuilt from the store on every render; nothing is cached.
//! - The date label is computed at build time and never stored in the store.

pub mod dashboard;
pub mod date;
pub mod widgets;
