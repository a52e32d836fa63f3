//! Banding classifiers
//!
//! Every classifier partitions the real line into exactly
//! {green, yellow, red}: green wins inside its closed interval, yellow
//! inside its own, and red is the catch-all. Elbow, knee, and pelvic tilt
//! get dedicated two-sided classifiers because their good band is an
//! interior interval with symmetric yellow shoulders.

use kyphos_core::Level;

/// Closed green/yellow intervals for the generic classifier
///
/// Green takes precedence on shared boundaries, which is how the
/// half-open yellow bands in the published table fall out of two closed
/// intervals.
#[derive(Debug, Clone, Copy)]
pub struct Bands {
    pub green: (f32, f32),
    pub yellow: (f32, f32),
}

/// Craniovertebral angle bands, degrees
pub const CVA_BANDS: Bands = Bands {
    green: (50.0, 180.0),
    yellow: (40.0, 50.0),
};

/// Trunk flexion bands, degrees
pub const TRUNK_BANDS: Bands = Bands {
    green: (0.0, 20.0),
    yellow: (20.0, 30.0),
};

/// Neck-angle variability bands, degrees per minute
pub const NECK_VARIABILITY_BANDS: Bands = Bands {
    green: (0.0, 6.0),
    yellow: (6.0, 10.0),
};

/// Generic three-band classification over closed intervals
pub fn classify(value: f32, bands: &Bands) -> Level {
    if value >= bands.green.0 && value <= bands.green.1 {
        Level::Green
    } else if value >= bands.yellow.0 && value <= bands.yellow.1 {
        Level::Yellow
    } else {
        Level::Red
    }
}

/// CVA: green [50,180], yellow [40,50), red below 40
#[inline]
pub fn classify_cva(deg: f32) -> Level {
    classify(deg, &CVA_BANDS)
}

/// Trunk flexion: green [0,20], yellow (20,30], red beyond
#[inline]
pub fn classify_trunk(deg: f32) -> Level {
    classify(deg, &TRUNK_BANDS)
}

/// Neck variability: green [0,6], yellow (6,10], red beyond
#[inline]
pub fn classify_neck_variability(deg_per_min: f32) -> Level {
    classify(deg_per_min, &NECK_VARIABILITY_BANDS)
}

/// Pelvic tilt delta: green within +-10, yellow within +-20, red beyond
pub fn classify_pelvic_tilt(delta_deg: f32) -> Level {
    let magnitude = delta_deg.abs();
    if magnitude <= 10.0 {
        Level::Green
    } else if magnitude <= 20.0 {
        Level::Yellow
    } else {
        Level::Red
    }
}

/// Elbow: green [90,110], yellow [75,90) or (110,125], red elsewhere
pub fn classify_elbow(deg: f32) -> Level {
    if (90.0..=110.0).contains(&deg) {
        Level::Green
    } else if (75.0..90.0).contains(&deg) || (deg > 110.0 && deg <= 125.0) {
        Level::Yellow
    } else {
        Level::Red
    }
}

/// Knee: green [80,110], yellow [70,80) or (110,120], red elsewhere
pub fn classify_knee(deg: f32) -> Level {
    if (80.0..=110.0).contains(&deg) {
        Level::Green
    } else if (70.0..80.0).contains(&deg) || (deg > 110.0 && deg <= 120.0) {
        Level::Yellow
    } else {
        Level::Red
    }
}

/// Composite ergonomic score: green [80,100], yellow [60,80), red below
pub fn classify_score(score: f32) -> Level {
    if score >= 80.0 {
        Level::Green
    } else if score >= 60.0 {
        Level::Yellow
    } else {
        Level::Red
    }
}

/// Classified sitting metric identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Cva,
    Trunk,
    PelvicTiltDelta,
    Elbow,
    Knee,
    NeckVariability,
}

/// Banding rule for a metric, as an explicit statically-checkable table
pub fn classifier_for(kind: MetricKind) -> fn(f32) -> Level {
    match kind {
        MetricKind::Cva => classify_cva,
        MetricKind::Trunk => classify_trunk,
        MetricKind::PelvicTiltDelta => classify_pelvic_tilt,
        MetricKind::Elbow => classify_elbow,
        MetricKind::Knee => classify_knee,
        MetricKind::NeckVariability => classify_neck_variability,
    }
}
