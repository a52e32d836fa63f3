//! Posture monitoring session

use kyphos_core::{
    Baseline, FrameTime, KyphosResult, LandmarkFrame, MetricValue, NECK_HISTORY_CAP,
    PostureAnalysis, SittingMetrics,
};
use kyphos_filter::{MovingAverageFilter, OneEuroConfig, OneEuroFilter, DEFAULT_WINDOW};
use kyphos_metrics::{
    analyze_posture, capture_baseline, classifier_for, classify_pelvic_tilt, compose_ergo_score,
    extract_sitting_metrics, AngleHistory, MetricKind, CONFIDENCE_GATE,
};

/// Session configuration, with defaults matching the reference cadence
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Adaptive filter parameters for the sitting metrics
    pub filter: OneEuroConfig,
    /// Window size for the coarse-assessment angle smoothers
    pub average_window: usize,
    /// Neck-angle history capacity
    pub history_cap: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            filter: OneEuroConfig::for_angles(),
            average_window: DEFAULT_WINDOW,
            history_cap: NECK_HISTORY_CAP,
        }
    }
}

/// Combined per-frame output of a monitoring session
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Smoothed, re-banded sitting metrics
    pub metrics: SittingMetrics,
    /// Coarse assessment (status decided from raw geometry; reported
    /// angles smoothed)
    pub analysis: PostureAnalysis,
    /// Frame timestamp
    pub t: FrameTime,
}

/// All persistent analysis state for one tracked subject
pub struct PostureMonitor {
    config: MonitorConfig,
    baseline: Option<Baseline>,

    // One adaptive filter per smoothed sitting metric.
    cva: OneEuroFilter,
    trunk: OneEuroFilter,
    pelvic_abs: OneEuroFilter,
    elbow: OneEuroFilter,
    knee: OneEuroFilter,

    // Coarse-assessment angle smoothers.
    trunk_avg: MovingAverageFilter,
    head_avg: MovingAverageFilter,

    history: AngleHistory,
    confidence_ok: bool,
}

impl PostureMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        PostureMonitor {
            config,
            baseline: None,
            cva: OneEuroFilter::new(config.filter),
            trunk: OneEuroFilter::new(config.filter),
            pelvic_abs: OneEuroFilter::new(config.filter),
            elbow: OneEuroFilter::new(config.filter),
            knee: OneEuroFilter::new(config.filter),
            trunk_avg: MovingAverageFilter::new(config.average_window),
            head_avg: MovingAverageFilter::new(config.average_window),
            history: AngleHistory::with_capacity(config.history_cap),
            confidence_ok: true,
        }
    }

    /// Session configuration
    #[inline]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Current calibration baseline, if one has been captured
    #[inline]
    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    /// Number of neck-angle samples accumulated so far
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Analyze one frame, advancing all session state
    pub fn process(&mut self, frame: &LandmarkFrame, t: FrameTime) -> FrameReport {
        let mut analysis = analyze_posture(frame);

        let gated = analysis.metrics.confidence >= CONFIDENCE_GATE;
        if gated != self.confidence_ok {
            if gated {
                tracing::debug!(confidence = analysis.metrics.confidence, "pose visibility regained");
            } else {
                tracing::warn!(confidence = analysis.metrics.confidence, "pose visibility lost");
            }
            self.confidence_ok = gated;
        }

        // Status and severity are decided from raw geometry; only the
        // reported angles get the steadier moving-average readout.
        if gated {
            if analysis.metrics.spine_visible {
                analysis.metrics.trunk_flexion_deg =
                    self.trunk_avg.push(analysis.metrics.trunk_flexion_deg);
            }
            analysis.metrics.head_neck_deg = self.head_avg.push(analysis.metrics.head_neck_deg);
        }

        let mut metrics =
            extract_sitting_metrics(frame, self.baseline.as_ref(), self.history.as_slice());
        let raw_cva = metrics.cva_deg;

        Self::smooth(&mut metrics.cva_deg, &mut self.cva, MetricKind::Cva, t);
        Self::smooth(&mut metrics.trunk_deg, &mut self.trunk, MetricKind::Trunk, t);
        Self::smooth(&mut metrics.elbow_deg, &mut self.elbow, MetricKind::Elbow, t);
        Self::smooth(&mut metrics.knee_deg, &mut self.knee, MetricKind::Knee, t);

        // The delta is re-derived from the smoothed absolute tilt so the
        // two pelvic readouts stay consistent with each other.
        if metrics.pelvic_tilt_abs_deg.visible {
            metrics.pelvic_tilt_abs_deg.value =
                self.pelvic_abs.filter(t, metrics.pelvic_tilt_abs_deg.value);
            metrics.pelvic_tilt_abs_deg.level =
                classify_pelvic_tilt(metrics.pelvic_tilt_abs_deg.value);
            if let Some(baseline) = &self.baseline {
                metrics.pelvic_tilt_delta_deg.value =
                    metrics.pelvic_tilt_abs_deg.value - baseline.pelvic_tilt_deg;
                metrics.pelvic_tilt_delta_deg.level =
                    classify_pelvic_tilt(metrics.pelvic_tilt_delta_deg.value);
            }
        }

        // Re-banding may have shifted levels; recompose the score so it
        // reflects what is actually reported.
        metrics.ergo_score = compose_ergo_score(
            &metrics.cva_deg,
            &metrics.trunk_deg,
            &metrics.pelvic_tilt_delta_deg,
            &metrics.elbow_deg,
            &metrics.knee_deg,
        );

        if raw_cva.visible {
            self.history.push(raw_cva.value);
        }

        FrameReport {
            metrics,
            analysis,
            t,
        }
    }

    /// Capture a new baseline from the current frame
    ///
    /// Resets all filters and the neck-angle history so the session starts
    /// clean against the new reference.
    pub fn calibrate(&mut self, frame: &LandmarkFrame) -> KyphosResult<Baseline> {
        let baseline = capture_baseline(frame)?;
        self.reset_filters();
        self.history.clear();
        self.baseline = Some(baseline);
        tracing::info!(
            pelvic_tilt_deg = baseline.pelvic_tilt_deg,
            shoulder_width = baseline.shoulder_width,
            "posture baseline captured"
        );
        Ok(baseline)
    }

    /// Return the session to its initial state (no baseline, no history)
    pub fn reset(&mut self) {
        self.reset_filters();
        self.history.clear();
        self.baseline = None;
        self.confidence_ok = true;
    }

    fn reset_filters(&mut self) {
        self.cva.reset();
        self.trunk.reset();
        self.pelvic_abs.reset();
        self.elbow.reset();
        self.knee.reset();
        self.trunk_avg.reset();
        self.head_avg.reset();
    }

    /// Smooth a visible metric in place and re-band the smoothed value.
    /// Invisible metrics bypass the filter entirely, leaving its state
    /// untouched.
    fn smooth(metric: &mut MetricValue, filter: &mut OneEuroFilter, kind: MetricKind, t: FrameTime) {
        if !metric.visible {
            return;
        }
        metric.value = filter.filter(t, metric.value);
        metric.level = classifier_for(kind)(metric.value);
    }
}

impl Default for PostureMonitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyphos_core::{BodyPoint, Landmark, Level, PostureStatus};

    fn upright_frame() -> LandmarkFrame {
        let mut frame = LandmarkFrame::default();
        let mut set = |p: BodyPoint, x: f32, y: f32| {
            *frame.point_mut(p) = Landmark::visible(x, y, 0.0);
        };
        set(BodyPoint::Nose, 0.50, 0.38);
        set(BodyPoint::LeftEar, 0.45, 0.40);
        set(BodyPoint::RightEar, 0.55, 0.40);
        set(BodyPoint::LeftShoulder, 0.45, 0.50);
        set(BodyPoint::RightShoulder, 0.55, 0.50);
        set(BodyPoint::LeftHip, 0.45, 0.70);
        set(BodyPoint::RightHip, 0.55, 0.70);
        set(BodyPoint::LeftElbow, 0.45, 0.62);
        let (s, c) = (100.0f32).to_radians().sin_cos();
        set(BodyPoint::LeftWrist, 0.45 + 0.12 * s, 0.62 - 0.12 * c);
        set(BodyPoint::LeftKnee, 0.45, 0.85);
        set(BodyPoint::LeftAnkle, 0.55, 0.85);
        frame
    }

    fn at(frame: usize) -> FrameTime {
        FrameTime::from_secs_f64(frame as f64 / 30.0)
    }

    #[test]
    fn test_steady_upright_session() {
        let mut monitor = PostureMonitor::default();
        let frame = upright_frame();

        let mut report = monitor.process(&frame, at(0));
        for i in 1..30 {
            report = monitor.process(&frame, at(i));
        }

        assert_eq!(report.analysis.status, PostureStatus::Good);
        assert_eq!(report.metrics.cva_deg.level, Level::Green);
        assert!((report.metrics.cva_deg.value - 180.0).abs() < 1.0);
        assert_eq!(report.metrics.elbow_deg.level, Level::Green);
        assert!((report.metrics.ergo_score.value - 100.0).abs() < 1e-3);
        assert_eq!(monitor.history_len(), 30);
    }

    #[test]
    fn test_history_accumulates_only_visible_cva() {
        let mut monitor = PostureMonitor::default();
        let visible = upright_frame();
        let mut occluded = upright_frame();
        occluded.point_mut(BodyPoint::LeftEar).visibility = Some(0.1);

        monitor.process(&visible, at(0));
        monitor.process(&occluded, at(1));
        monitor.process(&visible, at(2));
        assert_eq!(monitor.history_len(), 2);
    }

    #[test]
    fn test_calibrate_resets_and_stores_baseline() {
        let mut monitor = PostureMonitor::default();
        let frame = upright_frame();
        for i in 0..20 {
            monitor.process(&frame, at(i));
        }

        let baseline = monitor.calibrate(&frame).unwrap();
        assert_eq!(monitor.baseline(), Some(&baseline));
        assert_eq!(monitor.history_len(), 0);

        // Immediately after calibration against the same pose, the delta
        // is ~0 and green.
        let report = monitor.process(&frame, at(20));
        assert!(report.metrics.pelvic_tilt_delta_deg.value.abs() < 0.5);
        assert_eq!(report.metrics.pelvic_tilt_delta_deg.level, Level::Green);
    }

    #[test]
    fn test_calibrate_rejects_occluded_trunk() {
        let mut monitor = PostureMonitor::default();
        let mut frame = upright_frame();
        frame.point_mut(BodyPoint::LeftHip).visibility = Some(0.0);
        assert!(monitor.calibrate(&frame).is_err());
        assert!(monitor.baseline().is_none());
    }

    #[test]
    fn test_reset_clears_baseline_and_history() {
        let mut monitor = PostureMonitor::default();
        let frame = upright_frame();
        monitor.calibrate(&frame).unwrap();
        monitor.process(&frame, at(0));

        monitor.reset();
        assert!(monitor.baseline().is_none());
        assert_eq!(monitor.history_len(), 0);

        // Without a baseline the delta is back to its neutral default.
        let report = monitor.process(&frame, at(1));
        assert_eq!(report.metrics.pelvic_tilt_delta_deg.value, 0.0);
    }

    #[test]
    fn test_occluded_metric_bypasses_its_filter() {
        let mut monitor = PostureMonitor::default();
        let mut no_arm = upright_frame();
        no_arm.point_mut(BodyPoint::LeftWrist).visibility = Some(0.0);

        let report = monitor.process(&no_arm, at(0));
        assert!(!report.metrics.elbow_deg.visible);
        assert_eq!(report.metrics.elbow_deg.level, Level::NotApplicable);

        // First visible sample afterwards snaps to the raw value: no
        // stale state leaked from the occluded frames.
        let report = monitor.process(&upright_frame(), at(1));
        assert!((report.metrics.elbow_deg.value - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_smoothed_level_matches_smoothed_value() {
        // A jittery elbow bouncing across the green/yellow border must
        // always report the band of the value it reports.
        let mut monitor = PostureMonitor::default();
        for i in 0..60 {
            let mut frame = upright_frame();
            let wobble = if i % 2 == 0 { 12.0 } else { -12.0 };
            let (s, c) = (100.0f32 + wobble).to_radians().sin_cos();
            *frame.point_mut(BodyPoint::LeftWrist) =
                Landmark::visible(0.45 + 0.12 * s, 0.62 - 0.12 * c, 0.0);

            let report = monitor.process(&frame, at(i));
            let m = report.metrics.elbow_deg;
            assert_eq!(m.level, kyphos_metrics::classify_elbow(m.value));
        }
    }
}
