//! Timing sample and statistics types

/// Stage latencies for one frame, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimingSample {
    pub conversion_ms: f64,
    pub filter_ms: f64,
    pub composition_ms: f64,
    /// Conversion through composition, measured as one span
    pub total_ms: f64,
    /// Capture to composited, including time spent before the pipeline ran
    pub end_to_end_ms: f64,
}

impl TimingSample {
    pub fn new(
        conversion_ms: f64,
        filter_ms: f64,
        composition_ms: f64,
        total_ms: f64,
        end_to_end_ms: f64,
    ) -> Self {
        Self {
            conversion_ms,
            filter_ms,
            composition_ms,
            total_ms,
            end_to_end_ms,
        }
    }

    pub fn get(&self, field: TimingField) -> f64 {
        match field {
            TimingField::Conversion => self.conversion_ms,
            TimingField::Filter => self.filter_ms,
            TimingField::Composition => self.composition_ms,
            TimingField::Total => self.total_ms,
            TimingField::EndToEnd => self.end_to_end_ms,
        }
    }
}

/// Selects one of the five measured quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingField {
    Conversion,
    Filter,
    Composition,
    Total,
    EndToEnd,
}

impl TimingField {
    pub const ALL: [TimingField; 5] = [
        TimingField::Conversion,
        TimingField::Filter,
        TimingField::Composition,
        TimingField::Total,
        TimingField::EndToEnd,
    ];
}

/// Snapshot of the rolling statistics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerfStats {
    pub frame_rate: f64,
    pub avg_conversion_ms: f64,
    pub avg_filter_ms: f64,
    pub avg_composition_ms: f64,
    pub avg_total_ms: f64,
    pub avg_end_to_end_ms: f64,
    /// Samples currently in the window
    pub samples: usize,
}
