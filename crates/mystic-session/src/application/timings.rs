//! Presentation delays for the timed phase advances.

use std::time::Duration;

use crate::domain::effects::TimerKind;

/// How long each animated phase lasts before its follow-up intent fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    /// `Shuffling` → `ReadyToCut`.
    pub shuffle: Duration,
    /// `Cutting` → `ReadyToDraw`.
    pub cut: Duration,
    /// `Drawing` → `Revealing`.
    pub deal: Duration,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            shuffle: Duration::from_millis(2000),
            cut: Duration::from_millis(1200),
            deal: Duration::from_millis(1500),
        }
    }
}

impl PhaseTimings {
    /// Zero delays; follow-ups fire as soon as the runtime is polled.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            shuffle: Duration::ZERO,
            cut: Duration::ZERO,
            deal: Duration::ZERO,
        }
    }

    /// Sets the shuffle delay.
    #[must_use]
    pub fn with_shuffle(mut self, delay: Duration) -> Self {
        self.shuffle = delay;
        self
    }

    /// Sets the cut delay.
    #[must_use]
    pub fn with_cut(mut self, delay: Duration) -> Self {
        self.cut = delay;
        self
    }

    /// Sets the deal delay.
    #[must_use]
    pub fn with_deal(mut self, delay: Duration) -> Self {
        self.deal = delay;
        self
    }

    /// Delay for a timer.
    #[must_use]
    pub fn delay_for(&self, timer: TimerKind) -> Duration {
        match timer {
            TimerKind::Shuffle => self.shuffle,
            TimerKind::Cut => self.cut,
            TimerKind::Deal => self.deal,
        }
    }
}
