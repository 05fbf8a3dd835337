//! Rolling-window performance tracker
//!
//! Samples live in a fixed-capacity ring. `recorded` counts every sample
//! ever written since the last reset; the write slot is `recorded % capacity`
//! and, once the ring has wrapped, that same slot holds the oldest sample.
//!
//! No internal synchronization: callers recording from more than one thread
//! must serialize access themselves.

use crate::types::{PerfStats, TimingField, TimingSample};
use std::time::Instant;

/// Window size used by `PerfTracker::default()`
pub const DEFAULT_CAPACITY: usize = 30;

#[derive(Debug, Clone, Copy)]
struct Slot {
    sample: TimingSample,
    captured_at: Instant,
}

#[derive(Debug, Clone)]
pub struct PerfTracker {
    capacity: usize,
    slots: Vec<Slot>,
    recorded: u64,
}

impl PerfTracker {
    /// Create a tracker keeping the last `capacity` samples (minimum 1)
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            log::warn!("PerfTracker capacity 0 requested, using 1");
        }
        let capacity = capacity.max(1);

        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            recorded: 0,
        }
    }

    /// Append a sample stamped with the current time
    pub fn record(&mut self, sample: TimingSample) {
        self.record_at(sample, Instant::now());
    }

    pub(crate) fn record_at(&mut self, sample: TimingSample, captured_at: Instant) {
        let slot = Slot {
            sample,
            captured_at,
        };
        let idx = (self.recorded % self.capacity as u64) as usize;

        if self.slots.len() < self.capacity {
            self.slots.push(slot);
        } else {
            self.slots[idx] = slot;
        }

        self.recorded += 1;
    }

    /// Discard all samples; capacity is kept
    pub fn reset(&mut self) {
        log::debug!("PerfTracker reset after {} samples", self.recorded);
        self.slots.clear();
        self.recorded = 0;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples currently in the window
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Samples recorded since construction or the last reset
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    fn newest_index(&self) -> Option<usize> {
        if self.recorded == 0 {
            return None;
        }
        Some(((self.recorded - 1) % self.capacity as u64) as usize)
    }

    fn oldest_index(&self) -> Option<usize> {
        if self.recorded == 0 {
            None
        } else if self.recorded <= self.capacity as u64 {
            Some(0)
        } else {
            Some((self.recorded % self.capacity as u64) as usize)
        }
    }

    pub fn latest(&self) -> Option<TimingSample> {
        self.newest_index().map(|idx| self.slots[idx].sample)
    }

    /// Frames per second across the window: `(n - 1) / (newest - oldest)`
    ///
    /// Zero with fewer than two samples or no measurable elapsed time.
    pub fn frame_rate(&self) -> f64 {
        if self.slots.len() < 2 {
            return 0.0;
        }

        let (Some(oldest), Some(newest)) = (self.oldest_index(), self.newest_index()) else {
            return 0.0;
        };

        let elapsed = self.slots[newest]
            .captured_at
            .saturating_duration_since(self.slots[oldest].captured_at)
            .as_secs_f64();

        if elapsed > 0.0 {
            (self.slots.len() - 1) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Arithmetic mean of `field` over the window; zero when empty
    pub fn average(&self, field: TimingField) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.slots.iter().map(|slot| slot.sample.get(field)).sum();
        sum / self.slots.len() as f64
    }

    pub fn stats(&self) -> PerfStats {
        PerfStats {
            frame_rate: self.frame_rate(),
            avg_conversion_ms: self.average(TimingField::Conversion),
            avg_filter_ms: self.average(TimingField::Filter),
            avg_composition_ms: self.average(TimingField::Composition),
            avg_total_ms: self.average(TimingField::Total),
            avg_end_to_end_ms: self.average(TimingField::EndToEnd),
            samples: self.slots.len(),
        }
    }
}

impl Default for PerfTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
