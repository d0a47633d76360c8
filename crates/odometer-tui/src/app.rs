use std::time::Instant;

use odometer_core::AppConfig;

use crate::input::Action;
use crate::roll::{Odometer, RollEvent, SetOutcome};
use crate::theme::Theme;

/// State of the interactive counter host
pub struct App {
    pub odometer: Odometer,
    pub theme: Theme,
    /// Digits typed but not yet applied
    pub input: String,
    /// Roll to new numbers instead of jumping
    pub animated: bool,
    pub step: i64,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui.theme);
        let odometer = Odometer::new(&config.odometer, theme.font).with_text_color(theme.text);

        Self {
            odometer,
            theme,
            input: String::new(),
            animated: true,
            step: config.odometer.step,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::InputChar(c) => {
                // Sign only at the front
                if c != '-' || self.input.is_empty() {
                    self.input.push(c);
                }
            }
            Action::Backspace => {
                self.input.pop();
            }
            Action::Apply => self.apply_input(now),
            Action::Increment => self.add(self.step, now),
            Action::Decrement => self.add(-self.step, now),
            Action::ToggleAnimated => {
                self.animated = !self.animated;
                let label = if self.animated { "on" } else { "off" };
                self.set_status(format!("Animation {}", label));
            }
            Action::StopAnimation => {
                let events = self.odometer.stop_animation();
                self.handle_events(&events);
            }
            Action::CycleFont => {
                let mut font = self.odometer.font();
                font.face = font.face.next();
                self.odometer.set_font(font);
                self.set_status(format!("Font: {}", font.face.name()));
            }
            Action::ToggleBold => {
                let mut font = self.odometer.font();
                font.bold = !font.bold;
                self.odometer.set_font(font);
            }
            Action::None => {}
        }
    }

    /// Show `number` using the current animation setting
    pub fn show(&mut self, number: i64, now: Instant) -> SetOutcome {
        let outcome = self.odometer.set_number_at(number, self.animated, now);
        match outcome {
            SetOutcome::Started { .. } => self.set_status(format!("Rolling to {}", number)),
            SetOutcome::Applied => self.set_status(format!("Showing {}", number)),
            SetOutcome::Ignored => self.set_status("Still rolling, update ignored"),
            SetOutcome::Aborted => {}
        }
        outcome
    }

    /// Step the target number by `delta`
    pub fn add(&mut self, delta: i64, now: Instant) {
        let target = self.odometer.current_number().saturating_add(delta);
        self.show(target, now);
    }

    fn apply_input(&mut self, now: Instant) {
        if self.input.is_empty() {
            return;
        }
        match self.input.parse::<i64>() {
            Ok(number) => {
                self.input.clear();
                self.show(number, now);
            }
            Err(_) => {
                self.set_status(format!("Not a number: {}", self.input));
                self.input.clear();
            }
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let events = self.odometer.tick(now);
        self.handle_events(&events);
    }

    fn handle_events(&mut self, events: &[RollEvent]) {
        for event in events {
            if let RollEvent::Committed { value } = event {
                self.set_status(format!("Settled on {}", value));
            }
        }
    }

    /// Whether the host should poll at the animation frame rate
    #[inline]
    pub fn needs_fast_update(&self) -> bool {
        self.odometer.is_animating()
    }

    pub fn mode_label(&self) -> String {
        if self.odometer.is_animating() {
            format!("ROLLING {}", self.odometer.animating_count())
        } else {
            "IDLE".to_string()
        }
    }
}
