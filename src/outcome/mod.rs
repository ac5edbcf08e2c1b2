// src/outcome/mod.rs

//! Build outcome and build reason models.
//!
//! - [`result`]: what happened to a build (`BuildResult`).
//! - [`reason`]: why a build was started (`BuildReason`).
//! - [`rusage`]: resource usage attached to outcomes.
//! - [`attempt`]: glue that runs a command and classifies the result.

pub mod attempt;
pub mod reason;
pub mod result;
pub mod rusage;

pub use attempt::{BuildAttempt, attempt_build};
pub use reason::{BuildReason, NvCheckerItem};
pub use result::{BuildResult, BuildStatus};
pub use rusage::ResourceUsage;
