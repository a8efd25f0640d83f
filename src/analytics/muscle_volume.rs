//! Lifting volume per muscle group over a trailing window

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::exercises::{MuscleGroup, find_exercise_by_name};
use crate::models::Activity;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Volume per muscle group. Groups without any contribution are absent.
pub type MuscleVolume = BTreeMap<MuscleGroup, f64>;

/// Sum lifting volume per muscle group for activities in `[now - window, now]`.
///
/// Every group an exercise works receives the full session volume. Exercises
/// missing from the dictionary contribute nothing. A window reaching past the
/// earliest representable time covers the whole log; a negative one covers nothing.
pub fn aggregate_muscle_volume(
    activities: &[Activity],
    now: DateTime<Utc>,
    window: Duration,
) -> MuscleVolume {
    let since = now.checked_sub_signed(window).unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut volumes = MuscleVolume::new();

    for activity in activities {
        if activity.date < since || activity.date > now {
            continue;
        }
        let Some(log) = activity.as_weight_lifting() else {
            continue;
        };

        let exercise = match find_exercise_by_name(&log.exercise) {
            Some(ex) => ex,
            None => {
                debug!(
                    exercise = %log.exercise,
                    "Exercise not in dictionary, skipped for muscle volume"
                );
                continue;
            }
        };

        let volume = log.total_volume();
        for muscle in exercise.muscle_groups {
            *volumes.entry(*muscle).or_insert(0.0) += volume;
        }
    }

    volumes
}

/// Volume over the last 7 days as of now
pub fn weekly_muscle_volume(activities: &[Activity]) -> MuscleVolume {
    aggregate_muscle_volume(activities, Utc::now(), Duration::days(DEFAULT_WINDOW_DAYS))
}

/// Heatmap band relative to the most trained group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    None,
    Low,
    Moderate,
    High,
    Peak,
}

impl Intensity {
    pub fn bar(&self) -> &'static str {
        match self {
            Intensity::None => "[....]",
            Intensity::Low => "[+...]",
            Intensity::Moderate => "[++..]",
            Intensity::High => "[+++.]",
            Intensity::Peak => "[++++]",
        }
    }
}

/// Classify every muscle group (including untrained ones) by its share of the
/// largest volume, sorted by volume descending.
pub fn intensity_report(volumes: &MuscleVolume) -> Vec<(MuscleGroup, f64, Intensity)> {
    let max_volume = volumes.values().copied().fold(1.0, f64::max);

    let mut report: Vec<_> = MuscleGroup::all()
        .iter()
        .filter(|g| **g != MuscleGroup::Legs)
        .map(|group| {
            let volume = volumes.get(group).copied().unwrap_or(0.0);
            let ratio = (volume / max_volume).min(1.0);
            let level = match ratio {
                r if r <= 0.0 => Intensity::None,
                r if r < 0.25 => Intensity::Low,
                r if r < 0.50 => Intensity::Moderate,
                r if r < 0.75 => Intensity::High,
                _ => Intensity::Peak,
            };
            (*group, volume, level)
        })
        .collect();

    report.sort_by(|a, b| b.1.total_cmp(&a.1));
    report
}
