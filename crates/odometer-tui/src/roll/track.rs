//! One character position of a roll

use std::time::{Duration, Instant};

use odometer_core::{CellId, GlyphSize};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, progress_at};

#[derive(Debug, Clone)]
struct Motion {
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

/// A vertical stack of cells for one character position
///
/// Cells are ordered oldest frame first. Scrolling moves the visible window
/// down the stack until the last cell (the target character) is in view.
#[derive(Debug, Clone)]
pub struct Track {
    /// Column of the track relative to the counter's left edge
    pub x: u16,
    /// Size of one cell
    pub size: GlyphSize,
    /// Target character
    pub target: char,
    cells: Vec<CellId>,
    motion: Option<Motion>,
    /// Eased progress in [0, 1]
    progress: f64,
}

impl Track {
    pub fn new(x: u16, size: GlyphSize, target: char, cells: Vec<CellId>) -> Self {
        Self {
            x,
            size,
            target,
            cells,
            motion: None,
            progress: 0.0,
        }
    }

    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn take_cells(&mut self) -> Vec<CellId> {
        std::mem::take(&mut self.cells)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.motion.as_ref().map(|m| m.duration)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Rows between the first and the last cell
    pub fn max_offset(&self) -> u16 {
        (self.cells.len().saturating_sub(1) as u16).saturating_mul(self.size.height)
    }

    /// Rows currently scrolled past the top of the track
    pub fn offset(&self) -> u16 {
        (self.progress * self.max_offset() as f64).round() as u16
    }

    pub fn start(&mut self, now: Instant, duration: Duration, easing: EasingType) {
        self.progress = 0.0;
        self.motion = Some(Motion {
            start: now,
            duration,
            easing,
        });
    }

    /// Advance to `now`; returns true when the track settled on this call
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(Motion {
            start,
            duration,
            easing,
        }) = self.motion.clone()
        else {
            return false;
        };

        if is_complete_at(start, duration, now) {
            self.settle()
        } else {
            self.progress = easing.apply(progress_at(start, duration, now));
            false
        }
    }

    /// Jump to the final cell; returns true if the track was still moving
    pub fn settle(&mut self) -> bool {
        self.progress = 1.0;
        self.motion.take().is_some()
    }
}
