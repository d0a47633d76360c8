//! Number formatting for the counter display

use crate::config::OdometerConfig;

/// Turns a number into the characters shown on the counter
///
/// Returning `None` aborts the update that asked for it.
pub trait NumberFormatter {
    fn format(&self, number: i64) -> Option<String>;
}

/// Decimal formatter with optional thousands grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormatter {
    separator: Option<char>,
    group_size: usize,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self {
            separator: Some(','),
            group_size: 3,
        }
    }
}

impl DecimalFormatter {
    /// Formatter without grouping separators
    pub fn plain() -> Self {
        Self {
            separator: None,
            group_size: 3,
        }
    }

    pub fn with_separator(separator: char) -> Self {
        Self {
            separator: Some(separator),
            ..Self::default()
        }
    }

    pub fn from_config(config: &OdometerConfig) -> Self {
        if config.grouping {
            Self::with_separator(config.grouping_separator)
        } else {
            Self::plain()
        }
    }

    pub fn separator(&self) -> Option<char> {
        self.separator
    }
}

impl NumberFormatter for DecimalFormatter {
    fn format(&self, number: i64) -> Option<String> {
        let digits = number.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if number < 0 {
            out.push('-');
        }

        match self.separator {
            Some(separator) if self.group_size > 0 => {
                let lead = digits.len() % self.group_size;
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (i + self.group_size - lead) % self.group_size == 0 {
                        out.push(separator);
                    }
                    out.push(ch);
                }
            }
            _ => out.push_str(&digits),
        }

        Some(out)
    }
}
