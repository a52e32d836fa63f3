//! Scenario harness
//!
//! Drives a synthetic subject through a full monitoring session at the
//! reference cadence and tallies the per-frame outcomes.

use kyphos_core::{FrameTime, PostureStatus, NOMINAL_FRAME_INTERVAL};
use kyphos_monitor::{FrameReport, PostureMonitor};

use crate::subject::SyntheticSubject;

/// Aggregate outcome of a scenario run
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Report of the last processed frame
    pub final_report: FrameReport,
    /// Frames classified good / slouching / borderline
    pub good_frames: usize,
    pub slouching_frames: usize,
    pub borderline_frames: usize,
}

impl ScenarioOutcome {
    pub fn total_frames(&self) -> usize {
        self.good_frames + self.slouching_frames + self.borderline_frames
    }
}

/// Run `frames` frames of a subject through a monitor at 30 FPS
///
/// The monitor keeps its state across calls, so repeated runs against the
/// same monitor model one continuous session.
pub fn run_scenario(
    monitor: &mut PostureMonitor,
    subject: &mut SyntheticSubject,
    frames: usize,
    start: FrameTime,
) -> ScenarioOutcome {
    assert!(frames > 0, "scenario needs at least one frame");

    let mut good_frames = 0;
    let mut slouching_frames = 0;
    let mut borderline_frames = 0;
    let mut last = None;

    for i in 0..frames {
        let t = FrameTime::from_secs_f64(start.as_secs_f64() + i as f64 * NOMINAL_FRAME_INTERVAL);
        let report = monitor.process(&subject.frame(), t);
        match report.analysis.status {
            PostureStatus::Good => good_frames += 1,
            PostureStatus::Slouching => slouching_frames += 1,
            PostureStatus::Borderline => borderline_frames += 1,
        }
        last = Some(report);
    }

    ScenarioOutcome {
        // frames > 0 is asserted above
        final_report: last.expect("at least one frame processed"),
        good_frames,
        slouching_frames,
        borderline_frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::SubjectProfile;

    #[test]
    fn test_outcome_tallies_every_frame() {
        let mut monitor = PostureMonitor::default();
        let mut subject = SyntheticSubject::new(SubjectProfile::upright(), 1);
        let outcome = run_scenario(&mut monitor, &mut subject, 45, FrameTime::ZERO);
        assert_eq!(outcome.total_frames(), 45);
    }
}
