//! Terminal glyph fonts and glyph size measurement

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::digits::is_digit;

/// How counter characters are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    /// One terminal cell per character
    Plain,
    /// Full-width forms, two cells per character
    Wide,
    /// 3x5 block-art digits
    #[default]
    Block,
}

impl FontFace {
    pub fn next(self) -> Self {
        match self {
            FontFace::Plain => FontFace::Wide,
            FontFace::Wide => FontFace::Block,
            FontFace::Block => FontFace::Plain,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FontFace::Plain => "plain",
            FontFace::Wide => "wide",
            FontFace::Block => "block",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Font {
    pub face: FontFace,
    pub bold: bool,
}

const BLOCK_HEIGHT: usize = 5;

const BLOCK_DIGITS: [[&str; BLOCK_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

impl Font {
    pub fn new(face: FontFace, bold: bool) -> Self {
        Self { face, bold }
    }

    /// Rows drawn for `ch`, top to bottom
    ///
    /// Every glyph of a face has the same number of rows.
    pub fn rows(&self, ch: char) -> Vec<String> {
        match self.face {
            FontFace::Plain => vec![ch.to_string()],
            FontFace::Wide => vec![wide_form(ch).to_string()],
            FontFace::Block => block_rows(ch),
        }
    }

    pub fn height(&self) -> u16 {
        match self.face {
            FontFace::Plain | FontFace::Wide => 1,
            FontFace::Block => BLOCK_HEIGHT as u16,
        }
    }
}

fn wide_form(ch: char) -> char {
    match ch {
        '0'..='9' | ',' | '.' | '-' => {
            char::from_u32(ch as u32 - 0x20 + 0xFF00).unwrap_or(ch)
        }
        ' ' => '\u{3000}',
        _ => ch,
    }
}

fn block_rows(ch: char) -> Vec<String> {
    let pattern: [&str; BLOCK_HEIGHT] = match ch {
        '0'..='9' => BLOCK_DIGITS[(ch as u8 - b'0') as usize],
        ',' => [" ", " ", " ", "▄", "▘"],
        '.' => [" ", " ", " ", " ", "▄"],
        '-' => ["   ", "   ", "███", "   ", "   "],
        ' ' => ["  "; BLOCK_HEIGHT],
        _ => {
            let width = UnicodeWidthStr::width(ch.to_string().as_str()).max(1);
            let blank = " ".repeat(width);
            let mut rows = vec![blank; BLOCK_HEIGHT - 1];
            rows.push(ch.to_string());
            return rows;
        }
    };

    // One column of spacing after each glyph
    pattern.iter().map(|row| format!("{} ", row)).collect()
}

/// Size of a glyph in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphSize {
    pub width: u16,
    pub height: u16,
}

/// Glyph size cache for one font
///
/// All digits share the measurement of `8`.
#[derive(Debug, Clone, Default)]
pub struct GlyphMetrics {
    font: Font,
    cache: HashMap<String, GlyphSize>,
}

impl GlyphMetrics {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            cache: HashMap::new(),
        }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Switch fonts, dropping every cached measurement
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.cache.clear();
    }

    pub fn size_of(&mut self, ch: char) -> GlyphSize {
        let key = if is_digit(ch) { '8' } else { ch };
        let font = self.font;

        *self.cache.entry(key.to_string()).or_insert_with(|| {
            let rows = font.rows(key);
            GlyphSize {
                width: rows
                    .iter()
                    .map(|row| UnicodeWidthStr::width(row.as_str()) as u16)
                    .max()
                    .unwrap_or(0),
                height: rows.len() as u16,
            }
        })
    }

    /// Combined size of `text` laid out on one line
    pub fn text_size(&mut self, text: &str) -> GlyphSize {
        text.chars().fold(GlyphSize::default(), |acc, ch| {
            let size = self.size_of(ch);
            GlyphSize {
                width: acc.width + size.width,
                height: acc.height.max(size.height),
            }
        })
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
