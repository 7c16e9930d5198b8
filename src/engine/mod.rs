//! Running searches off the caller's thread.
//!
//! The board core is synchronous; this module wraps it in a job that runs on
//! a dedicated thread and can be stopped cooperatively.

mod controller;

pub use controller::SearchJob;
