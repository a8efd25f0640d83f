//! Plan pre-fill: seed a new lifting session from a plan and the weights used
//! the last time that plan was logged

use serde::Serialize;

use crate::error::{Error, Result};
use crate::exercises::same_exercise;
use crate::models::{Activity, ActivityKind, NewActivity, SetLog, WeightLiftingLog, WorkoutPlan};

/// What the new session is based on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanChoice {
    Freestyle,
    Plan(String),
}

/// Editable set; `None` is a blank field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DraftSet {
    pub reps: Option<u32>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftExercise {
    pub name: String,
    pub sets: Vec<DraftSet>,
}

/// All lifting logs of the most recent session logged against `plan_id`.
///
/// A session is every activity sharing the newest timestamp among the plan's
/// activities. Empty when the plan was never logged.
pub fn last_session_for_plan<'a>(
    activities: &'a [Activity],
    plan_id: &str,
) -> Vec<&'a WeightLiftingLog> {
    let plan_logs: Vec<_> = activities
        .iter()
        .filter_map(|a| a.as_weight_lifting().map(|log| (a.date, log)))
        .filter(|(_, log)| log.workout_plan_id.as_deref() == Some(plan_id))
        .collect();

    let Some(last_date) = plan_logs.iter().map(|(date, _)| *date).max() else {
        return Vec::new();
    };

    plan_logs
        .into_iter()
        .filter(|(date, _)| *date == last_date)
        .map(|(_, log)| log)
        .collect()
}

/// Build the initial draft for a new lifting session.
///
/// Freestyle gives one blank exercise with one blank set. A plan gives its
/// exercises in order, each with exactly the prescribed number of sets:
/// reps come from the plan, weights from the matching set of the last session
/// (0 when that set or exercise was not logged).
pub fn prefill_draft(
    choice: &PlanChoice,
    plans: &[WorkoutPlan],
    activities: &[Activity],
) -> Result<Vec<DraftExercise>> {
    let plan_id = match choice {
        PlanChoice::Freestyle => {
            return Ok(vec![DraftExercise {
                name: String::new(),
                sets: vec![DraftSet::default()],
            }]);
        }
        PlanChoice::Plan(id) => id,
    };

    let plan = find_plan(plans, plan_id)?;
    let last_session = last_session_for_plan(activities, &plan.id);

    let draft = plan
        .exercises
        .iter()
        .map(|ex| {
            let last_log = last_session.iter().find(|log| same_exercise(&log.exercise, &ex.name));
            let sets = (0..ex.sets as usize)
                .map(|i| {
                    let last_set = last_log.and_then(|log| log.sets.get(i));
                    DraftSet {
                        reps: Some(ex.reps),
                        weight: Some(last_set.map_or(0.0, |s| s.weight)),
                    }
                })
                .collect();
            DraftExercise { name: ex.name.clone(), sets }
        })
        .collect();

    Ok(draft)
}

/// Turn an edited draft into activities ready to append as one session.
///
/// Exercises without a name are skipped, sets missing reps or weight are
/// dropped, and exercises left without any complete set are skipped. Plan id
/// and name are attached when the session was started from a plan.
pub fn finalize_draft(
    draft: &[DraftExercise],
    choice: &PlanChoice,
    plans: &[WorkoutPlan],
) -> Result<Vec<NewActivity>> {
    let plan = match choice {
        PlanChoice::Freestyle => None,
        PlanChoice::Plan(id) => Some(find_plan(plans, id)?),
    };

    let mut activities = Vec::new();
    for exercise in draft {
        let name = exercise.name.trim();
        if name.is_empty() {
            continue;
        }

        let sets = exercise
            .sets
            .iter()
            .filter_map(|s| match (s.reps, s.weight) {
                (Some(reps), Some(weight)) => Some(SetLog::new(reps, weight)),
                _ => None,
            })
            .collect::<Result<Vec<_>>>()?;
        if sets.is_empty() {
            continue;
        }

        activities.push(ActivityKind::WeightLifting(WeightLiftingLog {
            exercise: name.to_string(),
            sets,
            workout_plan_id: plan.map(|p| p.id.clone()),
            workout_plan_name: plan.map(|p| p.name.clone()),
        }));
    }

    Ok(activities)
}

fn find_plan<'a>(plans: &'a [WorkoutPlan], id: &str) -> Result<&'a WorkoutPlan> {
    plans
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::PlanNotFound(id.to_string()))
}
