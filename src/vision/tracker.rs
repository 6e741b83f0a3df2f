use super::landmark::Landmark;

/// port over the frame source + pose estimator pipeline. one call per loop
/// iteration, gated by the device's own acquisition latency.
///
/// `Some(empty)` means a frame arrived with no hand in it; the classifier
/// is skipped and the symbol reads unknown upstream. `None` means the feed
/// is exhausted and the control loop should shut down cleanly. adapters
/// over multi-hand estimators must yield the first hand in detection order.
pub trait Tracker {
    fn capture(&mut self) -> Option<Vec<Landmark>>;
}
