//! Odometer session: formats numbers, builds tracks and drives the roll
//!
//! The session is either idle or rolling. An animated update is accepted
//! only while idle; it turns the previous and the new value into one track
//! per character position and starts every track. Each [`Odometer::tick`]
//! reports the tracks that settled, and once the last one settles the new
//! value is committed as the previous value for the next roll.

use std::time::Instant;

use odometer_core::digits::ScrollPlan;
use odometer_core::pool::DIGIT_CELL_TAG;
use odometer_core::{
    CellPool, DecimalFormatter, DigitCell, Font, GlyphMetrics, GlyphSize, NumberFormatter,
    OdometerConfig,
};
use ratatui::style::Color;
use tracing::{debug, info, warn};

use super::config::OdometerConfigExt;
use super::timing::staggered_durations;
use super::track::Track;

/// What the widget is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// The formatted current number, no tracks
    Static,
    /// Tracks, moving or settled
    Rolling,
}

/// Completion notifications produced by [`Odometer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEvent {
    TrackSettled { index: usize },
    /// Every track settled; `value` is now the previous number
    Committed { value: i64 },
}

/// Result of [`Odometer::set_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// A roll started over `tracks` positions
    Started { tracks: usize },
    /// Shown immediately without animation
    Applied,
    /// A roll is in flight; the update was dropped
    Ignored,
    /// The formatter produced no text
    Aborted,
}

pub struct Odometer {
    config: OdometerConfig,
    formatter: Box<dyn NumberFormatter>,
    metrics: GlyphMetrics,
    pool: CellPool,
    tracks: Vec<Track>,
    text_color: Color,
    display: DisplayMode,
    /// Text of the number being shown or rolled to
    value: String,
    last_number: i64,
    current_number: i64,
    animating_count: usize,
}

impl Odometer {
    pub fn new(config: &OdometerConfig, font: Font) -> Self {
        let formatter = DecimalFormatter::from_config(config);
        let value = formatter.format(0).unwrap_or_else(|| "0".to_string());

        Self {
            config: config.clone(),
            formatter: Box::new(formatter),
            metrics: GlyphMetrics::new(font),
            pool: CellPool::new(),
            tracks: Vec::new(),
            text_color: Color::White,
            display: DisplayMode::Static,
            value,
            last_number: 0,
            current_number: 0,
            animating_count: 0,
        }
    }

    /// Replace the number formatter
    ///
    /// The displayed text is refreshed on the next update.
    pub fn with_formatter(mut self, formatter: Box<dyn NumberFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn set_number(&mut self, number: i64, animated: bool) -> SetOutcome {
        self.set_number_at(number, animated, Instant::now())
    }

    /// Show `number`, rolling to it when `animated`, with the roll clock at `now`
    pub fn set_number_at(&mut self, number: i64, animated: bool, now: Instant) -> SetOutcome {
        if !animated {
            return self.apply_static(number);
        }

        if self.is_animating() {
            debug!(
                "Roll to {} ignored, {} tracks in flight",
                number, self.animating_count
            );
            return SetOutcome::Ignored;
        }

        let Some(plan) = self.prepare(number) else {
            return SetOutcome::Aborted;
        };

        self.current_number = number;
        if self.tracks.is_empty() {
            // Nothing to scroll, commit right away
            self.last_number = number;
            self.display = DisplayMode::Static;
            info!("Odometer settled on {}", number);
            return SetOutcome::Applied;
        }

        self.display = DisplayMode::Rolling;
        self.start_tracks(now);

        debug!(
            "Rolling {:?} -> {:?} over {} tracks",
            plan.previous,
            plan.current,
            self.tracks.len()
        );

        SetOutcome::Started {
            tracks: self.tracks.len(),
        }
    }

    /// Advance every track to `now` and report what settled
    pub fn tick(&mut self, now: Instant) -> Vec<RollEvent> {
        let mut events = Vec::new();
        if !self.is_animating() {
            return events;
        }

        for index in 0..self.tracks.len() {
            if self.tracks[index].advance(now) {
                events.push(RollEvent::TrackSettled { index });
                self.finish_track(&mut events);
            }
        }

        events
    }

    /// Snap every moving track to its final cell and commit
    pub fn stop_animation(&mut self) -> Vec<RollEvent> {
        let mut events = Vec::new();

        for index in 0..self.tracks.len() {
            if self.tracks[index].settle() {
                events.push(RollEvent::TrackSettled { index });
                self.finish_track(&mut events);
            }
        }

        events
    }

    pub fn font(&self) -> Font {
        self.metrics.font()
    }

    /// Change the font, re-measuring glyphs and re-laying out any tracks
    pub fn set_font(&mut self, font: Font) {
        self.metrics.set_font(font);
        self.layout_tracks();
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn current_number(&self) -> i64 {
        self.current_number
    }

    pub fn last_number(&self) -> i64 {
        self.last_number
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating_count > 0
    }

    pub fn animating_count(&self) -> usize {
        self.animating_count
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    /// Formatted text of the number being shown or rolled to
    pub fn display_text(&self) -> &str {
        &self.value
    }

    /// Size of the displayed text in terminal cells
    pub fn content_size(&mut self) -> GlyphSize {
        self.metrics.text_size(&self.value)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn cell(&self, track: &Track, index: usize) -> Option<&DigitCell> {
        track.cells().get(index).and_then(|id| self.pool.get(*id))
    }

    pub fn pool(&self) -> &CellPool {
        &self.pool
    }

    fn apply_static(&mut self, number: i64) -> SetOutcome {
        let Some(text) = self.formatter.format(number) else {
            debug!("Formatter produced no text for {}, update dropped", number);
            return SetOutcome::Aborted;
        };

        self.release_tracks();
        self.animating_count = 0;
        self.value = text;
        self.current_number = number;
        self.last_number = number;
        self.display = DisplayMode::Static;
        SetOutcome::Applied
    }

    /// Build one track per position of the new value
    fn prepare(&mut self, number: i64) -> Option<ScrollPlan> {
        let (Some(end), Some(start)) = (
            self.formatter.format(number),
            self.formatter.format(self.last_number),
        ) else {
            debug!("Formatter produced no text for {}, roll dropped", number);
            return None;
        };

        self.release_tracks();

        let plan = ScrollPlan::build(&start, &end, self.config.density);
        self.value = end;

        for (target, frames) in plan.current.chars().zip(&plan.tracks) {
            let cells = frames
                .iter()
                .map(|text| {
                    let id = self.pool.dequeue(DIGIT_CELL_TAG);
                    if let Some(cell) = self.pool.get_mut(id) {
                        cell.text = *text;
                    }
                    id
                })
                .collect();
            self.tracks.push(Track::new(0, GlyphSize::default(), target, cells));
        }
        self.layout_tracks();

        Some(plan)
    }

    /// Position tracks side by side and stack their cells
    fn layout_tracks(&mut self) {
        let mut x = 0u16;
        for track in &mut self.tracks {
            let size = self.metrics.size_of(track.target);
            track.x = x;
            track.size = size;
            x = x.saturating_add(size.width);

            for (row, id) in track.cells().iter().enumerate() {
                if let Some(cell) = self.pool.get_mut(*id) {
                    cell.y = (row as u16).saturating_mul(size.height);
                }
            }
        }
    }

    fn start_tracks(&mut self, now: Instant) {
        let durations = staggered_durations(
            self.config.animation_duration(),
            self.config.duration_offset(),
            self.config.min_track_duration(),
            self.tracks.len(),
        );

        for (track, duration) in self.tracks.iter_mut().zip(durations) {
            track.start(now, duration, self.config.easing);
            self.animating_count += 1;
        }
    }

    fn release_tracks(&mut self) {
        for mut track in self.tracks.drain(..) {
            for id in track.take_cells() {
                if let Err(e) = self.pool.enqueue(id) {
                    warn!("Failed to recycle digit cell: {}", e);
                }
            }
        }
    }

    fn finish_track(&mut self, events: &mut Vec<RollEvent>) {
        self.animating_count = self.animating_count.saturating_sub(1);
        if self.animating_count == 0 {
            self.last_number = self.current_number;
            info!("Odometer settled on {}", self.current_number);
            events.push(RollEvent::Committed {
                value: self.current_number,
            });
        }
    }
}
