//! Conquest simulator library.
//!
//! Exposes the board representation, attack validation and resolution, the
//! simulator that drives them, and the reporting layer for use by
//! integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod report;
pub mod resolve;
