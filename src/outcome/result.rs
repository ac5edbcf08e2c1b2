// src/outcome/result.rs

//! Outcome of one build attempt.

use std::fmt;

use crate::outcome::ResourceUsage;
use crate::sumtype::{SumType, fmt_variant};

/// What happened to a build.
///
/// Every variant shares an optional [`ResourceUsage`]. Use the constructors
/// (`BuildResult::successful()`, `BuildResult::failed(err)`, ...) and
/// [`BuildResult::with_rusage`] to build one.
///
/// `successful` and `staged` count as "ok" ([`BuildResult::is_ok`]);
/// `failed` and `skipped` do not.
pub struct BuildResult {
    status: BuildStatus,
    rusage: Option<ResourceUsage>,
}

/// The variant-specific part of a [`BuildResult`].
#[derive(Debug)]
pub enum BuildStatus {
    Successful,
    /// Built, but queued rather than finalized.
    Staged,
    Failed(anyhow::Error),
    Skipped(String),
}

impl BuildResult {
    pub fn successful() -> Self {
        Self::from_status(BuildStatus::Successful)
    }

    pub fn staged() -> Self {
        Self::from_status(BuildStatus::Staged)
    }

    pub fn failed(error: impl Into<anyhow::Error>) -> Self {
        Self::from_status(BuildStatus::Failed(error.into()))
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::from_status(BuildStatus::Skipped(reason.into()))
    }

    fn from_status(status: BuildStatus) -> Self {
        Self {
            status,
            rusage: None,
        }
    }

    pub fn with_rusage(mut self, rusage: ResourceUsage) -> Self {
        self.rusage = Some(rusage);
        self
    }

    pub fn status(&self) -> &BuildStatus {
        &self.status
    }

    pub fn rusage(&self) -> Option<&ResourceUsage> {
        self.rusage.as_ref()
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        match &self.status {
            BuildStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&str> {
        match &self.status {
            BuildStatus::Skipped(reason) => Some(reason),
            _ => None,
        }
    }

    /// True for `successful` and `staged`.
    pub fn is_ok(&self) -> bool {
        matches!(self.status, BuildStatus::Successful | BuildStatus::Staged)
    }

    fn rusage_info(&self) -> String {
        match &self.rusage {
            Some(usage) => format!("rusage={usage}"),
            None => "rusage=None".to_string(),
        }
    }
}

impl From<&BuildResult> for bool {
    fn from(result: &BuildResult) -> bool {
        result.is_ok()
    }
}

impl SumType for BuildResult {
    const BASE: &'static str = "BuildResult";
    const VARIANTS: &'static [&'static str] = &["successful", "staged", "failed", "skipped"];

    fn variant_name(&self) -> &'static str {
        match self.status {
            BuildStatus::Successful => "successful",
            BuildStatus::Staged => "staged",
            BuildStatus::Failed(_) => "failed",
            BuildStatus::Skipped(_) => "skipped",
        }
    }

    fn extra_info(&self) -> Option<String> {
        let shared = self.rusage_info();
        let own = match &self.status {
            BuildStatus::Failed(err) => Some(format!("{err:#}")),
            BuildStatus::Skipped(reason) => Some(format!("{reason:?}")),
            BuildStatus::Successful | BuildStatus::Staged => None,
        };
        Some(match own {
            Some(own) => format!("{own}; {shared}"),
            None => shared,
        })
    }
}

impl fmt::Debug for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_variant(self, f)
    }
}
