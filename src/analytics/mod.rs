//! Analytics module - derived views over the activity log
//!
//! Everything here is a pure function of a snapshot: nothing is cached, and
//! calling again with the same activities gives the same result.
//!
//! - Muscle group volume over a trailing window
//! - Chart series (progression, daily volume, weekly swim distance, runs)
//! - Plan pre-fill for new lifting sessions

pub mod muscle_volume;
pub mod prefill;
pub mod series;

pub use muscle_volume::{MuscleVolume, aggregate_muscle_volume, weekly_muscle_volume};
pub use prefill::{DraftExercise, DraftSet, PlanChoice, finalize_draft, prefill_draft};
pub use series::{
    DailyVolume, ProgressionPoint, RunPoint, WeeklyDistance, daily_volume, max_weight_progression,
    running_series, unique_exercises, weekly_swim_distance,
};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{Activity, ActivityType};

/// Which activities the history view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Only(ActivityType),
}

/// Activities passing `filter`, newest first
pub fn history(activities: &[Activity], filter: HistoryFilter) -> Vec<&Activity> {
    let mut shown: Vec<_> = activities
        .iter()
        .filter(|a| match filter {
            HistoryFilter::All => true,
            HistoryFilter::Only(kind) => a.activity_type() == kind,
        })
        .collect();
    shown.sort_by(|a, b| b.date.cmp(&a.date));
    shown
}

/// Dashboard views over one snapshot
pub struct Analytics<'a> {
    activities: &'a [Activity],
}

impl<'a> Analytics<'a> {
    pub fn new(activities: &'a [Activity]) -> Self {
        Self { activities }
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn muscle_volume(&self, now: DateTime<Utc>, window: Duration) -> MuscleVolume {
        aggregate_muscle_volume(self.activities, now, window)
    }

    /// Progression of `exercise`, or of the first exercise alphabetically
    /// when none is given. Returns the exercise that was charted.
    pub fn progression(&self, exercise: Option<&str>) -> Option<(String, Vec<ProgressionPoint>)> {
        let name = match exercise {
            Some(name) => name.to_string(),
            None => self.exercises().into_iter().next()?,
        };
        let points = max_weight_progression(self.activities, &name);
        Some((name, points))
    }

    pub fn exercises(&self) -> Vec<String> {
        unique_exercises(self.activities)
    }

    pub fn daily_volume<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DailyVolume> {
        daily_volume(self.activities, tz)
    }

    pub fn weekly_swim_distance<Tz: TimeZone>(&self, tz: &Tz) -> Vec<WeeklyDistance> {
        weekly_swim_distance(self.activities, tz)
    }

    pub fn running(&self) -> Vec<RunPoint> {
        running_series(self.activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, RunningLog, SetLog, WeightLiftingLog};

    fn create_lift(exercise: &str, weight: f64, ts: &str) -> Activity {
        Activity {
            id: format!("lift-{}", ts),
            date: ts.parse().unwrap(),
            kind: ActivityKind::WeightLifting(WeightLiftingLog {
                exercise: exercise.to_string(),
                sets: vec![SetLog { reps: 5, weight }],
                workout_plan_id: None,
                workout_plan_name: None,
            }),
        }
    }

    fn create_run(ts: &str) -> Activity {
        Activity {
            id: format!("run-{}", ts),
            date: ts.parse().unwrap(),
            kind: ActivityKind::Running(RunningLog { distance: 5.0, duration: 25.0 }),
        }
    }

    #[test]
    fn test_history_filter_and_order() {
        let activities = vec![
            create_lift("Squat", 100.0, "2024-03-02T10:00:00Z"),
            create_run("2024-03-05T10:00:00Z"),
            create_lift("Squat", 110.0, "2024-03-04T10:00:00Z"),
        ];

        let all = history(&activities, HistoryFilter::All);
        let ids: Vec<_> = all.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "run-2024-03-05T10:00:00Z",
                "lift-2024-03-04T10:00:00Z",
                "lift-2024-03-02T10:00:00Z"
            ]
        );

        let lifts = history(&activities, HistoryFilter::Only(ActivityType::WeightLifting));
        assert_eq!(lifts.len(), 2);
        assert!(history(&activities, HistoryFilter::Only(ActivityType::Swimming)).is_empty());
    }

    #[test]
    fn test_default_progression_exercise() {
        let activities = vec![
            create_lift("Squat", 100.0, "2024-03-02T10:00:00Z"),
            create_lift("Bench Press", 60.0, "2024-03-03T10:00:00Z"),
        ];
        let analytics = Analytics::new(&activities);

        let (name, points) = analytics.progression(None).unwrap();
        assert_eq!(name, "Bench Press");
        assert_eq!(points.len(), 1);

        let (name, points) = analytics.progression(Some("squat")).unwrap();
        assert_eq!(name, "squat");
        assert_eq!(points[0].max_weight, 100.0);
    }

    #[test]
    fn test_no_progression_without_lifts() {
        let activities = vec![create_run("2024-03-05T10:00:00Z")];
        let analytics = Analytics::new(&activities);
        assert!(analytics.progression(None).is_none());
        assert_eq!(analytics.running().len(), 1);
    }
}
