pub mod config;
pub mod digits;
pub mod error;
pub mod format;
pub mod glyph;
pub mod pool;

pub use config::{AppConfig, EasingType, OdometerConfig, ThemeConfig};
pub use error::{Error, Result};
pub use format::{DecimalFormatter, NumberFormatter};
pub use glyph::{Font, FontFace, GlyphMetrics, GlyphSize};
pub use pool::{CellId, CellPool, DigitCell};
