//! Deferred power-on timer for the laptop boot screen
//!
//! "Power on" arms a deadline; the outcome is resolved the first time the
//! event loop polls past it. Nothing sleeps, so the view keeps animating
//! while the timer runs.

use std::time::{Duration, Instant};

use pcsim_core::{BootReport, ComputerType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootPhase {
    /// Waiting for "Power on"
    Idle,
    Armed { started: Instant, deadline: Instant },
    Resolved(BootReport),
}

#[derive(Debug, Clone)]
pub struct BootSequence {
    computer_type: ComputerType,
    installed: Vec<String>,
    delay: Duration,
    phase: BootPhase,
}

impl BootSequence {
    pub fn new(computer_type: ComputerType, installed: Vec<String>, delay: Duration) -> Self {
        Self {
            computer_type,
            installed,
            delay,
            phase: BootPhase::Idle,
        }
    }

    pub fn phase(&self) -> &BootPhase {
        &self.phase
    }

    pub fn installed(&self) -> &[String] {
        &self.installed
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, BootPhase::Armed { .. })
    }

    pub fn report(&self) -> Option<&BootReport> {
        match &self.phase {
            BootPhase::Resolved(report) => Some(report),
            _ => None,
        }
    }

    /// Arm the timer. Ignored while already armed; re-arms after an outcome.
    pub fn power_on(&mut self, now: Instant) -> bool {
        if self.is_armed() {
            return false;
        }
        self.phase = BootPhase::Armed {
            started: now,
            deadline: now + self.delay,
        };
        true
    }

    /// Resolve the outcome once the deadline has passed.
    ///
    /// Returns the report only on the poll that resolves it.
    pub fn poll(&mut self, now: Instant) -> Option<&BootReport> {
        match self.phase {
            BootPhase::Armed { deadline, .. } if now >= deadline => {
                self.phase =
                    BootPhase::Resolved(BootReport::new(self.computer_type, &self.installed));
                self.report()
            }
            _ => None,
        }
    }

    /// Fraction of the delay elapsed while armed, 1.0 once resolved.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.phase {
            BootPhase::Idle => 0.0,
            BootPhase::Resolved(_) => 1.0,
            BootPhase::Armed { started, deadline } => {
                let total = deadline.saturating_duration_since(started);
                if total.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
            }
        }
    }
}
