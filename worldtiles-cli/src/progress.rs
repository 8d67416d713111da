//! Terminal progress bar for slicing runs.

use indicatif::{ProgressBar, ProgressStyle};
use worldtiles::slicer::{SliceProgress, TileCoord, TileReport};

const TEMPLATE: &str = "{msg:>12} [{bar:40}] {pos}/{len} tiles ({elapsed})";

/// Shows tile progress on stderr. Hidden when stderr is not a terminal.
pub struct TileProgressBar {
    bar: ProgressBar,
}

impl TileProgressBar {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl SliceProgress for TileProgressBar {
    fn on_start(&self, name: &str, total: usize) {
        self.bar.reset();
        self.bar.set_length(total as u64);
        self.bar.set_message(name.to_string());
    }

    fn on_tile(&self, _coord: TileCoord, _completed: usize, _total: usize) {
        self.bar.inc(1);
    }

    fn on_finish(&self, report: &TileReport) {
        self.bar.finish_with_message(format!("{} done", report.tile_count));
    }
}
