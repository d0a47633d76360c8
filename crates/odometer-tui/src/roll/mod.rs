//! Rolling digit animation for the odometer widget
//!
//! A roll replaces the displayed number with a new one by scrolling every
//! character position (a *track*) through a stack of digit cells until the
//! target character is in view.
//!
//! ## Atoms
//! - `easing` - Easing curves for roll progress
//! - `timing` - Clock arithmetic and staggered track durations
//! - `config` - Duration helpers over the core configuration
//!
//! ## Molecules
//! - `track` - One character position and its motion
//! - `animation` - The [`Odometer`] session driving all tracks
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use odometer_core::{Font, OdometerConfig};
//! use odometer_tui::roll::{Odometer, RollEvent};
//!
//! let mut odometer = Odometer::new(&OdometerConfig::default(), Font::default());
//! odometer.set_number(1_234, true);
//!
//! // In the host loop
//! for event in odometer.tick(Instant::now()) {
//!     if let RollEvent::Committed { value } = event {
//!         println!("settled on {}", value);
//!     }
//! }
//! ```

// Atoms
pub mod config;
pub mod easing;
pub mod timing;

// Molecules
pub mod animation;
pub mod track;

pub use animation::{DisplayMode, Odometer, RollEvent, SetOutcome};
pub use config::{OdometerConfigExt, UiConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use track::Track;
