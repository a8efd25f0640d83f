//! Records kept by the tracker: activities, workout plans and body-weight entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Activity discriminant, also used to pick a tip prompt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ActivityType {
    #[serde(rename = "Weight Lifting")]
    #[value(name = "lifting")]
    WeightLifting,
    #[value(name = "swimming")]
    Swimming,
    #[value(name = "running")]
    Running,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::WeightLifting => "Weight Lifting",
            ActivityType::Swimming => "Swimming",
            ActivityType::Running => "Running",
        }
    }

    pub fn all() -> &'static [ActivityType] {
        &[
            ActivityType::WeightLifting,
            ActivityType::Swimming,
            ActivityType::Running,
        ]
    }
}

/// One set of a lifting exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    pub reps: u32,
    pub weight: f64, // kg
}

impl SetLog {
    pub fn new(reps: u32, weight: f64) -> Result<Self> {
        let set = Self { reps, weight };
        set.validate()?;
        Ok(set)
    }

    /// reps x weight
    pub fn volume(&self) -> f64 {
        self.reps as f64 * self.weight
    }

    fn validate(&self) -> Result<()> {
        if self.reps == 0 {
            return Err(Error::validation("reps must be positive"));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::validation(format!(
                "weight must be a non-negative number, got {}",
                self.weight
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLiftingLog {
    pub exercise: String,
    pub sets: Vec<SetLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_plan_id: Option<String>,
    /// Plan name as it was when the session was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_plan_name: Option<String>,
}

impl WeightLiftingLog {
    /// Session volume: sum of reps x weight over all sets
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetLog::volume).sum()
    }

    /// Heaviest set, 0 when no sets were logged
    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimmingLog {
    pub distance: f64, // meters
    pub duration: f64, // minutes
    pub laps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningLog {
    pub distance: f64, // kilometers
    pub duration: f64, // minutes
}

impl RunningLog {
    /// Minutes per km, or 0 when duration or distance is not positive
    pub fn pace(&self) -> f64 {
        if self.duration > 0.0 && self.distance > 0.0 {
            self.duration / self.distance
        } else {
            0.0
        }
    }
}

/// Activity payload without id and timestamp, i.e. what a form submits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityKind {
    #[serde(rename = "Weight Lifting")]
    WeightLifting(WeightLiftingLog),
    Swimming(SwimmingLog),
    Running(RunningLog),
}

pub type NewActivity = ActivityKind;

impl ActivityKind {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivityKind::WeightLifting(_) => ActivityType::WeightLifting,
            ActivityKind::Swimming(_) => ActivityType::Swimming,
            ActivityKind::Running(_) => ActivityType::Running,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ActivityKind::WeightLifting(log) => {
                if log.exercise.trim().is_empty() {
                    return Err(Error::validation("exercise name is required"));
                }
                log.sets.iter().try_for_each(SetLog::validate)
            }
            ActivityKind::Swimming(log) => {
                non_negative("distance", log.distance)?;
                if !log.duration.is_finite() || log.duration <= 0.0 {
                    return Err(Error::validation("swim duration must be positive"));
                }
                if log.laps == 0 {
                    return Err(Error::validation("laps must be positive"));
                }
                Ok(())
            }
            ActivityKind::Running(log) => {
                non_negative("distance", log.distance)?;
                non_negative("duration", log.duration)
            }
        }
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::validation(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Logged activity. `id` and `date` are assigned once at creation and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    pub fn activity_type(&self) -> ActivityType {
        self.kind.activity_type()
    }

    pub fn as_weight_lifting(&self) -> Option<&WeightLiftingLog> {
        match &self.kind {
            ActivityKind::WeightLifting(log) => Some(log),
            _ => None,
        }
    }

    pub fn as_swimming(&self) -> Option<&SwimmingLog> {
        match &self.kind {
            ActivityKind::Swimming(log) => Some(log),
            _ => None,
        }
    }

    pub fn as_running(&self) -> Option<&RunningLog> {
        match &self.kind {
            ActivityKind::Running(log) => Some(log),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub exercises: Vec<PlanExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub name: String,
    pub exercises: Vec<NewPlanExercise>,
}

impl NewPlan {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("plan name is required"));
        }
        for ex in &self.exercises {
            if ex.name.trim().is_empty() {
                return Err(Error::validation("every plan exercise needs a name"));
            }
            if ex.sets == 0 || ex.reps == 0 {
                return Err(Error::validation(format!(
                    "'{}': target sets and reps must be positive",
                    ex.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyWeightEntry {
    pub id: String,
    pub weight: f64, // kg
    pub date: DateTime<Utc>,
}

pub fn validate_body_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(Error::validation(format!(
            "body weight must be positive, got {}",
            weight
        )));
    }
    Ok(())
}
