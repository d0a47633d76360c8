use anyhow::{anyhow, Result};
use serde::Serialize;

use odometer_core::digits::ScrollPlan;
use odometer_core::{AppConfig, DecimalFormatter, NumberFormatter};
use odometer_tui::roll::timing::staggered_durations;
use odometer_tui::roll::OdometerConfigExt;

#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub from: i64,
    pub to: i64,
    pub previous: String,
    pub current: String,
    pub tracks: Vec<TrackPlan>,
    /// Time until the last track settles
    pub total_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct TrackPlan {
    pub target: char,
    pub frames: String,
    pub duration_ms: u64,
}

pub fn run(config: &AppConfig, from: i64, to: i64, json: bool) -> Result<()> {
    let plan = build(config, from, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} -> {} ({} tracks, {} ms)",
        plan.previous,
        plan.current,
        plan.tracks.len(),
        plan.total_ms
    );
    for (i, track) in plan.tracks.iter().enumerate() {
        println!(
            "  [{}] '{}' {:>5} ms  {}",
            i, track.target, track.duration_ms, track.frames
        );
    }

    Ok(())
}

/// Frames and settle time of every track of a roll from `from` to `to`
pub fn build(config: &AppConfig, from: i64, to: i64) -> Result<PlanOutput> {
    let formatter = DecimalFormatter::from_config(&config.odometer);
    let format = |n: i64| {
        formatter
            .format(n)
            .ok_or_else(|| anyhow!("Cannot format {}", n))
    };
    let previous = format(from)?;
    let current = format(to)?;

    let scroll = ScrollPlan::build(&previous, &current, config.odometer.density);
    let durations = staggered_durations(
        config.odometer.animation_duration(),
        config.odometer.duration_offset(),
        config.odometer.min_track_duration(),
        scroll.tracks.len(),
    );

    let tracks: Vec<TrackPlan> = scroll
        .current
        .chars()
        .zip(&scroll.tracks)
        .zip(durations)
        .map(|((target, frames), duration)| TrackPlan {
            target,
            frames: frames.iter().collect(),
            duration_ms: duration.as_millis() as u64,
        })
        .collect();
    let total_ms = tracks.iter().map(|t| t.duration_ms).max().unwrap_or(0);

    Ok(PlanOutput {
        from,
        to,
        previous,
        current,
        tracks,
        total_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_plan() {
        let plan = build(&AppConfig::default(), 0, 42).unwrap();
        assert_eq!(plan.current, "42");
        assert_eq!(plan.tracks.len(), 2);
        assert_eq!(plan.tracks[0].frames, "01234");
        assert_eq!(plan.tracks[1].frames, "012");
        assert_eq!(plan.tracks[0].duration_ms, 1100);
        assert_eq!(plan.total_ms, 1300);
    }

    #[test]
    fn test_separator_track_has_one_frame() {
        let plan = build(&AppConfig::default(), 0, 1234).unwrap();
        assert_eq!(plan.current, "1,234");
        assert_eq!(plan.tracks[1].target, ',');
        assert_eq!(plan.tracks[1].frames, ",");
    }

    #[test]
    fn test_json_shape() {
        let plan = build(&AppConfig::default(), 9, 10).unwrap();
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["from"], 9);
        assert_eq!(value["tracks"][1]["target"], "0");
        assert!(value["tracks"][1]["duration_ms"].is_u64());
    }
}
