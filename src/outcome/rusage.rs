// src/outcome/rusage.rs

//! Resource usage of finished child processes.

use std::fmt;
use std::time::Duration;

use nix::sys::resource::{UsageWho, getrusage};

use crate::errors::Result;

/// CPU time and peak memory attributed to a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceUsage {
    /// User plus system CPU time.
    pub cputime: Duration,
    /// Peak resident set size in KiB, as reported by `getrusage` on Linux.
    pub max_rss_kib: i64,
}

impl ResourceUsage {
    /// Counters for all children this process has waited for so far.
    pub fn children() -> Result<Self> {
        let usage = getrusage(UsageWho::RUSAGE_CHILDREN)?;
        let user = usage.user_time();
        let system = usage.system_time();
        let micros = (user.tv_sec() + system.tv_sec()) as i64 * 1_000_000
            + (user.tv_usec() + system.tv_usec()) as i64;

        Ok(Self {
            cputime: Duration::from_micros(micros.max(0) as u64),
            max_rss_kib: usage.max_rss() as i64,
        })
    }

    /// Usage accrued between `earlier` and `self`.
    ///
    /// CPU time is a difference; peak RSS is a high-water mark over all
    /// children and is kept as is.
    pub fn since(&self, earlier: &ResourceUsage) -> ResourceUsage {
        ResourceUsage {
            cputime: self.cputime.saturating_sub(earlier.cputime),
            max_rss_kib: self.max_rss_kib,
        }
    }
}

impl fmt::Display for ResourceUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cputime={:.3}s, memory={}KiB",
            self.cputime.as_secs_f64(),
            self.max_rss_kib
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_subtracts_cpu_and_keeps_peak() {
        let before = ResourceUsage {
            cputime: Duration::from_millis(1500),
            max_rss_kib: 1000,
        };
        let after = ResourceUsage {
            cputime: Duration::from_millis(4000),
            max_rss_kib: 9000,
        };
        assert_eq!(
            after.since(&before),
            ResourceUsage {
                cputime: Duration::from_millis(2500),
                max_rss_kib: 9000,
            }
        );
    }

    #[test]
    fn since_never_goes_negative() {
        let before = ResourceUsage {
            cputime: Duration::from_secs(5),
            max_rss_kib: 1,
        };
        assert_eq!(ResourceUsage::default().since(&before).cputime, Duration::ZERO);
    }

    #[test]
    fn display_is_compact() {
        let usage = ResourceUsage {
            cputime: Duration::from_millis(1250),
            max_rss_kib: 2048,
        };
        assert_eq!(usage.to_string(), "cputime=1.250s, memory=2048KiB");
    }

    #[test]
    fn children_counters_are_readable() {
        assert!(ResourceUsage::children().is_ok());
    }
}
