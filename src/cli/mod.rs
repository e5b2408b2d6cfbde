//! Command Line Interface (CLI) layer for ROUNDPIC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the circle and non-circle
//! batches. It wires user-provided options to the underlying library
//! functionality exposed via `roundpic::api`.
//!
//! If you are embedding ROUNDPIC into another application, prefer using
//! the high-level `roundpic::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
