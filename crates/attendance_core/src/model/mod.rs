//! Attendance domain model.
//!
//! # Responsibility
//! - Define the person record and the three-valued attendance status.
//! - Keep "what a user may request" (`Mark`) separate from "what a person
//!   can be" (`AttendanceStatus`).
//!
//! # Invariants
//! - Every person carries exactly one status at all times.
//! - Status defaults to `Unmarked` and can never be requested back to it.

pub mod person;
