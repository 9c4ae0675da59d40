use serde::Serialize;

/// Offsets since midnight (seconds) collected for one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartEndBucket {
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
}

/// Mean start and end offsets (seconds since midnight) for one weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MeanStartEnd {
    pub start: f64,
    pub end: f64,
}
