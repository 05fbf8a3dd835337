//! Frame pipeline: convert, filter, composite, record timings
//!
//! One frame is in flight at a time; `process` takes `&mut self`, which is
//! what keeps the tracker single-writer.

use crate::config::PipelineConfig;
use crate::modes::ExecutionMode;
use pixpipe_convert::{yuv_to_argb, PackedFrame, PlanarFrame};
use pixpipe_filters::FilterKind;
use pixpipe_perf::{PerfStats, PerfTracker, TimingSample};
use std::time::{Duration, Instant};

/// Filtered frame plus the timings recorded for it
#[derive(Debug, Clone)]
pub struct ProcessedFrame {
    pub frame: PackedFrame,
    pub timing: TimingSample,
}

fn as_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

pub struct Pipeline {
    config: PipelineConfig,
    tracker: PerfTracker,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let mut config = config;
        if config.downscale_factor == 0 {
            log::warn!("Downscale factor 0 configured, using 1");
            config.downscale_factor = 1;
        }

        log::debug!(
            "Pipeline created: filter={}, mode={} ({} backend), downscale={}, window={}",
            config.filter.name(),
            config.mode.name(),
            config.mode.backend().name(),
            config.downscale_factor,
            config.tracker_capacity
        );

        Self {
            tracker: PerfTracker::new(config.tracker_capacity),
            config,
        }
    }

    /// Run one frame through the pipeline
    ///
    /// `captured_at` is when the source frame was captured and anchors the
    /// end-to-end latency. `composite` receives the filtered frame and is
    /// timed as the composition stage.
    pub fn process<F>(
        &mut self,
        source: &PlanarFrame<'_>,
        captured_at: Instant,
        composite: F,
    ) -> ProcessedFrame
    where
        F: FnOnce(&PackedFrame),
    {
        let backend = self.config.mode.backend();
        let start = Instant::now();

        let converted = yuv_to_argb(source, self.config.downscale_factor);
        let converted_at = Instant::now();

        let frame = backend.apply(&converted, self.config.filter);
        let filtered_at = Instant::now();

        composite(&frame);
        let composited_at = Instant::now();

        let timing = TimingSample {
            conversion_ms: as_ms(converted_at - start),
            filter_ms: as_ms(filtered_at - converted_at),
            composition_ms: as_ms(composited_at - filtered_at),
            total_ms: as_ms(composited_at - start),
            end_to_end_ms: as_ms(composited_at.saturating_duration_since(captured_at)),
        };
        self.tracker.record(timing);

        log::trace!(
            "Frame {}x{} [{}]: convert {:.3}ms, filter {:.3}ms, composite {:.3}ms, e2e {:.3}ms",
            frame.width(),
            frame.height(),
            self.config.filter.name(),
            timing.conversion_ms,
            timing.filter_ms,
            timing.composition_ms,
            timing.end_to_end_ms
        );

        ProcessedFrame { frame, timing }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn filter(&self) -> FilterKind {
        self.config.filter
    }

    pub fn set_filter(&mut self, filter: FilterKind) {
        log::debug!("Filter: {} -> {}", self.config.filter.name(), filter.name());
        self.config.filter = filter;
    }

    /// Advance to the next filter and return it
    pub fn cycle_filter(&mut self) -> FilterKind {
        self.set_filter(self.config.filter.next());
        self.config.filter
    }

    pub fn mode(&self) -> ExecutionMode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: ExecutionMode) {
        log::debug!(
            "Execution mode: {} -> {} ({} backend)",
            self.config.mode.name(),
            mode.name(),
            mode.backend().name()
        );
        self.config.mode = mode;
    }

    /// Advance to the next execution mode and return it
    pub fn cycle_mode(&mut self) -> ExecutionMode {
        self.set_mode(self.config.mode.next());
        self.config.mode
    }

    pub fn set_downscale_factor(&mut self, factor: u32) {
        if factor == 0 {
            log::warn!("Downscale factor 0 requested, using 1");
        }
        self.config.downscale_factor = factor.max(1);
    }

    pub fn tracker(&self) -> &PerfTracker {
        &self.tracker
    }

    pub fn stats(&self) -> PerfStats {
        self.tracker.stats()
    }

    pub fn reset_stats(&mut self) {
        self.tracker.reset();
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixpipe_convert::{pack_rgb, OPAQUE_BLACK};
    use pixpipe_perf::TimingField;

    struct TestSource {
        luma: Vec<u8>,
        chroma: Vec<u8>,
        width: u32,
        height: u32,
    }

    impl TestSource {
        fn uniform(width: u32, height: u32, y: u8) -> Self {
            let (w, h) = (width as usize, height as usize);
            Self {
                luma: vec![y; w * h],
                chroma: vec![128; w * h.div_ceil(2)],
                width,
                height,
            }
        }

        fn frame(&self) -> PlanarFrame<'_> {
            let w = self.width as usize;
            PlanarFrame::from_nv12(self.width, self.height, &self.luma, w, &self.chroma, w)
                .unwrap()
        }
    }

    #[test]
    fn test_process_default_is_passthrough_gray() {
        let source = TestSource::uniform(8, 6, 90);
        let mut pipeline = Pipeline::default();

        let out = pipeline.process(&source.frame(), Instant::now(), |_| {});
        assert_eq!(out.frame.dimensions(), (8, 6));
        assert!(out.frame.pixels().iter().all(|&p| p == pack_rgb(90, 90, 90)));
        assert_eq!(pipeline.tracker().len(), 1);
    }

    #[test]
    fn test_process_applies_downscale_and_filter() {
        let source = TestSource::uniform(16, 12, 200);
        let mut pipeline = Pipeline::new(PipelineConfig {
            downscale_factor: 4,
            filter: FilterKind::EdgeDetect,
            ..PipelineConfig::default()
        });

        let out = pipeline.process(&source.frame(), Instant::now(), |_| {});
        assert_eq!(out.frame.dimensions(), (4, 3));
        assert!(out.frame.pixels().iter().all(|&p| p == OPAQUE_BLACK));
    }

    #[test]
    fn test_compositor_sees_filtered_frame() {
        let source = TestSource::uniform(4, 4, 50);
        let mut pipeline = Pipeline::default();
        pipeline.set_filter(FilterKind::Emboss);

        let mut seen = None;
        let out = pipeline.process(&source.frame(), Instant::now(), |frame| {
            seen = Some(frame.clone());
        });

        assert_eq!(seen.as_ref(), Some(&out.frame));
        assert_eq!(out.frame.pixel(1, 1), pack_rgb(128, 128, 128));
    }

    #[test]
    fn test_timings_are_consistent() {
        let source = TestSource::uniform(32, 32, 10);
        let mut pipeline = Pipeline::default();
        let captured_at = Instant::now();

        let out = pipeline.process(&source.frame(), captured_at, |_| {
            std::thread::sleep(Duration::from_millis(2));
        });
        let t = out.timing;

        for field in TimingField::ALL {
            assert!(t.get(field) >= 0.0);
        }
        assert!(t.composition_ms >= 2.0);
        assert!(t.total_ms >= t.conversion_ms + t.filter_ms + t.composition_ms - 1e-9);
        assert!(t.end_to_end_ms >= t.total_ms);
        assert_eq!(pipeline.tracker().latest(), Some(t));
    }

    #[test]
    fn test_filter_and_mode_cycling() {
        let mut pipeline = Pipeline::default();
        assert_eq!(pipeline.cycle_filter(), FilterKind::Grayscale);
        assert_eq!(pipeline.cycle_mode(), ExecutionMode::Vector);

        for _ in 0..FilterKind::ALL.len() - 1 {
            pipeline.cycle_filter();
        }
        assert_eq!(pipeline.filter(), FilterKind::None);
    }

    #[test]
    fn test_mode_does_not_change_output() {
        let source = TestSource::uniform(10, 10, 120);
        let mut pipeline = Pipeline::default();
        pipeline.set_filter(FilterKind::Blur);

        let reference = pipeline.process(&source.frame(), Instant::now(), |_| {}).frame;
        for _ in 1..ExecutionMode::ALL.len() {
            pipeline.cycle_mode();
            let out = pipeline.process(&source.frame(), Instant::now(), |_| {});
            assert_eq!(out.frame, reference, "Mode {:?}", pipeline.mode());
        }
    }

    #[test]
    fn test_reset_stats() {
        let source = TestSource::uniform(4, 4, 0);
        let mut pipeline = Pipeline::new(PipelineConfig {
            tracker_capacity: 3,
            ..PipelineConfig::default()
        });

        for _ in 0..5 {
            pipeline.process(&source.frame(), Instant::now(), |_| {});
        }
        assert_eq!(pipeline.stats().samples, 3);

        pipeline.reset_stats();
        assert_eq!(pipeline.stats(), PerfStats::default());
        assert_eq!(pipeline.tracker().capacity(), 3);
    }

    #[test]
    fn test_zero_downscale_clamped() {
        let mut pipeline = Pipeline::new(PipelineConfig {
            downscale_factor: 0,
            ..PipelineConfig::default()
        });
        assert_eq!(pipeline.config().downscale_factor, 1);

        pipeline.set_downscale_factor(0);
        assert_eq!(pipeline.config().downscale_factor, 1);
        pipeline.set_downscale_factor(3);
        assert_eq!(pipeline.config().downscale_factor, 3);
    }
}
