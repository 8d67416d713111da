//! Progress reporting for slicing runs.

use super::grid::TileCoord;
use super::TileReport;

/// Observer notified as tiles are written.
///
/// Implementations must be thread-safe: in parallel mode `on_tile` is called
/// from rayon worker threads, in completion order rather than grid order.
pub trait SliceProgress: Send + Sync {
    /// Called once after the full map is written, before the first tile.
    fn on_start(&self, _name: &str, _total: usize) {}

    /// Called after each tile file has been written.
    ///
    /// `completed` counts tiles finished so far, including this one.
    fn on_tile(&self, _coord: TileCoord, _completed: usize, _total: usize) {}

    /// Called once when every tile has been written.
    fn on_finish(&self, _report: &TileReport) {}
}

/// Progress observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl SliceProgress for NoopProgress {}
