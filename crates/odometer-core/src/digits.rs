//! Per-position digit sequences for a roll
//!
//! A roll from one formatted number to another scrolls every character
//! position through a short list of frames. The previous string is aligned
//! to the width of the new one first, so both strings can be walked
//! position by position.

/// Most filler frames a position can scroll through before its target
///
/// Ten frames visit every digit once, so a larger density changes nothing.
pub const MAX_DENSITY: usize = 9;

/// Digit check used for all roll decisions
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(10)
}

#[inline]
fn digit_char(value: u32) -> char {
    char::from_digit(value % 10, 10).unwrap_or('0')
}

/// Align `previous` to the character length of `current`
///
/// Shorter strings are left-padded with `0`, longer ones lose their
/// leading characters.
pub fn align_previous(previous: &str, current: &str) -> String {
    let prev_len = previous.chars().count();
    let cur_len = current.chars().count();

    if prev_len < cur_len {
        let mut aligned = "0".repeat(cur_len - prev_len);
        aligned.push_str(previous);
        aligned
    } else {
        previous.chars().skip(prev_len - cur_len).collect()
    }
}

/// Frames a single position scrolls through, oldest first
///
/// The last frame is always `end`. Between two different digits the
/// sequence counts up modulo 10 and holds at most `density + 1` frames.
/// `density` is clamped to `1..=MAX_DENSITY`.
pub fn scroll_sequence(start: Option<char>, end: char, density: usize) -> Vec<char> {
    let frames = density.clamp(1, MAX_DENSITY) as u32 + 1;

    match (start.and_then(digit_value), digit_value(end)) {
        (Some(from), Some(to)) if from == to => vec![end],
        (Some(from), Some(to)) => {
            let mut sequence = Vec::with_capacity(frames as usize);
            for step in 0..frames {
                let value = (from + step) % 10;
                sequence.push(digit_char(value));
                if value == to {
                    break;
                }
            }
            // Ceiling hit before reaching the target
            if let Some(last) = sequence.last_mut() {
                *last = end;
            }
            sequence
        }
        (_, Some(to)) => {
            let mut sequence: Vec<char> = (0..frames).map(|step| digit_char(to + step)).collect();
            sequence.push(end);
            sequence
        }
        (_, None) => vec![end],
    }
}

/// Scroll sequences for every position of a roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollPlan {
    /// Previous value after alignment
    pub previous: String,
    pub current: String,
    pub tracks: Vec<Vec<char>>,
}

impl ScrollPlan {
    pub fn build(previous: &str, current: &str, density: usize) -> Self {
        let aligned = align_previous(previous, current);
        let tracks = aligned
            .chars()
            .zip(current.chars())
            .map(|(from, to)| scroll_sequence(Some(from), to, density))
            .collect();

        Self {
            previous: aligned,
            current: current.to_string(),
            tracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(start: char, end: char, density: usize) -> String {
        scroll_sequence(Some(start), end, density).into_iter().collect()
    }

    #[test]
    fn test_align_pads_shorter_previous() {
        assert_eq!(align_previous("7", "1,234"), "00007");
        assert_eq!(align_previous("999", "1,000"), "00999");
        assert_eq!(align_previous("42", "42"), "42");
    }

    #[test]
    fn test_align_drops_leading_of_longer_previous() {
        assert_eq!(align_previous("1,000", "999"), "000");
        assert_eq!(align_previous("-12", "5"), "2");
    }

    #[test]
    fn test_aligned_length_matches_target() {
        for (prev, cur) in [("0", "10"), ("5", "12,345"), ("98,765", "4"), ("-3", "300")] {
            assert_eq!(
                align_previous(prev, cur).chars().count(),
                cur.chars().count(),
                "{} -> {}",
                prev,
                cur
            );
        }
    }

    #[test]
    fn test_equal_digits_single_frame() {
        for d in '0'..='9' {
            assert_eq!(scroll_sequence(Some(d), d, 9), vec![d]);
        }
    }

    #[test]
    fn test_differing_digits_step_up() {
        assert_eq!(seq('1', '4', 9), "1234");
        assert_eq!(seq('9', '0', 9), "90");
        assert_eq!(seq('3', '2', 9), "3456789012");
    }

    #[test]
    fn test_differing_digits_invariants() {
        for density in 1..=9 {
            for from in 0..10u32 {
                for to in 0..10u32 {
                    if from == to {
                        continue;
                    }
                    let start = char::from_digit(from, 10).unwrap();
                    let end = char::from_digit(to, 10).unwrap();
                    let sequence = scroll_sequence(Some(start), end, density);

                    assert_eq!(sequence.first(), Some(&start));
                    assert_eq!(sequence.last(), Some(&end));
                    assert!(sequence.len() <= density + 1);

                    // Every frame except a clipped final one steps by +1
                    let body = &sequence[..sequence.len() - 1];
                    for pair in body.windows(2) {
                        let a = pair[0].to_digit(10).unwrap();
                        let b = pair[1].to_digit(10).unwrap();
                        assert_eq!((a + 1) % 10, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ceiling_replaces_last_frame() {
        assert_eq!(seq('0', '9', 3), "0129");
    }

    #[test]
    fn test_separator_target_settles_immediately() {
        assert_eq!(scroll_sequence(Some('0'), ',', 9), vec![',']);
        assert_eq!(scroll_sequence(None, '-', 9), vec!['-']);
    }

    #[test]
    fn test_digit_after_separator_gets_filler() {
        assert_eq!(
            scroll_sequence(Some(','), '7', 9).into_iter().collect::<String>(),
            "78901234567"
        );
        assert_eq!(
            scroll_sequence(None, '2', 2).into_iter().collect::<String>(),
            "2342"
        );
    }

    #[test]
    fn test_zero_density_clamped() {
        assert_eq!(seq('4', '6', 0), "46");
    }

    #[test]
    fn test_oversized_density_clamped() {
        let huge = 4_294_967_296;
        assert_eq!(seq('0', '9', huge), "0123456789");
        assert_eq!(scroll_sequence(Some('-'), '7', huge).len(), MAX_DENSITY + 2);
        assert_eq!(scroll_sequence(None, '1', usize::MAX).len(), MAX_DENSITY + 2);
    }

    #[test]
    fn test_plan_positions() {
        let plan = ScrollPlan::build("999", "1,000", 9);
        assert_eq!(plan.previous, "00999");
        assert_eq!(plan.tracks.len(), 5);
        assert_eq!(plan.tracks[0], vec!['0', '1']);
        assert_eq!(plan.tracks[1], vec![',']);
        assert_eq!(plan.tracks[2], vec!['9', '0']);
        assert!(plan.tracks.iter().all(|t| t.len() <= 2));
    }
}
