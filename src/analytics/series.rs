//! Chart series derived from the activity log
//!
//! All series are returned in chronological order. Bucketing by day or week
//! happens in the caller's time zone.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::exercises::same_exercise;
use crate::models::{Activity, BodyWeightEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionPoint {
    pub date: DateTime<Utc>,
    pub max_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyVolume {
    pub day: NaiveDate,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyDistance {
    pub week_start: NaiveDate,
    pub distance: f64, // meters
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunPoint {
    pub date: DateTime<Utc>,
    pub distance: f64, // km
    pub pace: f64,     // min/km, 0 = no pace
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyWeightPoint {
    pub date: DateTime<Utc>,
    pub weight: f64,
}

/// Heaviest set of each session of `exercise`, oldest first
pub fn max_weight_progression(activities: &[Activity], exercise: &str) -> Vec<ProgressionPoint> {
    let mut points: Vec<_> = activities
        .iter()
        .filter_map(|a| a.as_weight_lifting().map(|log| (a.date, log)))
        .filter(|(_, log)| same_exercise(&log.exercise, exercise))
        .map(|(date, log)| ProgressionPoint { date, max_weight: log.max_weight() })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}

/// Total lifting volume per calendar day
pub fn daily_volume<Tz: TimeZone>(activities: &[Activity], tz: &Tz) -> Vec<DailyVolume> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for activity in activities {
        if let Some(log) = activity.as_weight_lifting() {
            let day = activity.date.with_timezone(tz).date_naive();
            *by_day.entry(day).or_insert(0.0) += log.total_volume();
        }
    }

    by_day
        .into_iter()
        .map(|(day, volume)| DailyVolume { day, volume })
        .collect()
}

/// Monday of the ISO week containing `date`
pub fn iso_week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Swimming distance per ISO week
pub fn weekly_swim_distance<Tz: TimeZone>(activities: &[Activity], tz: &Tz) -> Vec<WeeklyDistance> {
    let mut by_week: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for activity in activities {
        if let Some(swim) = activity.as_swimming() {
            let week = iso_week_start(activity.date.with_timezone(tz).date_naive());
            *by_week.entry(week).or_insert(0.0) += swim.distance;
        }
    }

    by_week
        .into_iter()
        .map(|(week_start, distance)| WeeklyDistance { week_start, distance })
        .collect()
}

/// One point per run, oldest first
pub fn running_series(activities: &[Activity]) -> Vec<RunPoint> {
    let mut points: Vec<_> = activities
        .iter()
        .filter_map(|a| {
            a.as_running().map(|run| RunPoint {
                date: a.date,
                distance: run.distance,
                pace: run.pace(),
            })
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}

pub fn body_weight_series(entries: &[BodyWeightEntry]) -> Vec<BodyWeightPoint> {
    let mut points: Vec<_> = entries
        .iter()
        .map(|e| BodyWeightPoint { date: e.date, weight: e.weight })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Distinct lifting exercise names, alphabetical.
///
/// Names differing only by case count once; the spelling from the first
/// activity in store order (the newest) is kept.
pub fn unique_exercises(activities: &[Activity]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for log in activities.iter().filter_map(Activity::as_weight_lifting) {
        let name = log.exercise.trim();
        if !names.iter().any(|n| same_exercise(n, name)) {
            names.push(name.to_string());
        }
    }
    names.sort_by_key(|n| n.to_lowercase());
    names
}
