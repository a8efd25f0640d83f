//! Activity store, plan catalog and body-weight history over a [`KeyValueStore`]

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use super::KeyValueStore;
use crate::error::{Error, Result};
use crate::models::{
    Activity, BodyWeightEntry, NewActivity, NewPlan, PlanExercise, WorkoutPlan,
    validate_body_weight,
};

pub const ACTIVITIES_KEY: &str = "activities";
pub const PLANS_KEY: &str = "workoutPlans";
pub const BODY_WEIGHT_KEY: &str = "bodyWeightHistory";

/// Collections of the single local user.
///
/// Every call reads the full collection from the store, so callers always
/// work on a fresh snapshot.
pub struct Repository<S: KeyValueStore> {
    store: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store, clock: Utc::now }
    }

    /// Replace the timestamp source used for new records
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    // --- Activities ---

    /// Current snapshot, newest first by insertion
    pub fn list_activities(&self) -> Result<Vec<Activity>> {
        self.load_list(ACTIVITIES_KEY)
    }

    pub fn append_activity(&mut self, activity: NewActivity) -> Result<Activity> {
        let mut added = self.append_activities(vec![activity])?;
        Ok(added.remove(0))
    }

    /// Append one logged session. All records share one timestamp, which is
    /// how a later session lookup groups them back together.
    pub fn append_activities(&mut self, activities: Vec<NewActivity>) -> Result<Vec<Activity>> {
        for activity in &activities {
            activity.validate()?;
        }

        let now = (self.clock)();
        let added: Vec<Activity> = activities
            .into_iter()
            .map(|kind| Activity { id: new_id(now), date: now, kind })
            .collect();

        let mut all = self.list_activities()?;
        // Newest at the front, keeping the session's own order
        for activity in added.iter().rev() {
            all.insert(0, activity.clone());
        }
        self.save_list(ACTIVITIES_KEY, &all)?;

        for activity in &added {
            info!(id = %activity.id, kind = activity.activity_type().label(), "Activity logged");
        }
        Ok(added)
    }

    /// Returns false when no activity had that id
    pub fn delete_activity(&mut self, id: &str) -> Result<bool> {
        let mut all = self.list_activities()?;
        let before = all.len();
        all.retain(|a| a.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.save_list(ACTIVITIES_KEY, &all)?;
        info!(id, "Activity deleted");
        Ok(true)
    }

    // --- Workout plans ---

    pub fn list_plans(&self) -> Result<Vec<WorkoutPlan>> {
        self.load_list(PLANS_KEY)
    }

    pub fn append_plan(&mut self, plan: NewPlan) -> Result<WorkoutPlan> {
        plan.validate()?;

        let now = (self.clock)();
        let plan = WorkoutPlan {
            id: new_id(now),
            name: plan.name.trim().to_string(),
            exercises: plan
                .exercises
                .into_iter()
                .map(|ex| PlanExercise {
                    id: new_id(now),
                    name: ex.name.trim().to_string(),
                    sets: ex.sets,
                    reps: ex.reps,
                })
                .collect(),
        };

        let mut all = self.list_plans()?;
        all.push(plan.clone());
        self.save_list(PLANS_KEY, &all)?;

        info!(id = %plan.id, name = %plan.name, "Workout plan created");
        Ok(plan)
    }

    /// Past activities keep their plan name snapshot, nothing cascades
    pub fn delete_plan(&mut self, id: &str) -> Result<bool> {
        let mut all = self.list_plans()?;
        let before = all.len();
        all.retain(|p| p.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.save_list(PLANS_KEY, &all)?;
        info!(id, "Workout plan deleted");
        Ok(true)
    }

    // --- Body weight ---

    /// Entries sorted newest first
    pub fn list_body_weight(&self) -> Result<Vec<BodyWeightEntry>> {
        self.load_list(BODY_WEIGHT_KEY)
    }

    pub fn append_body_weight(&mut self, weight: f64) -> Result<BodyWeightEntry> {
        validate_body_weight(weight)?;

        let now = (self.clock)();
        let entry = BodyWeightEntry { id: new_id(now), weight, date: now };

        let mut all = self.list_body_weight()?;
        all.insert(0, entry.clone());
        all.sort_by(|a, b| b.date.cmp(&a.date));
        self.save_list(BODY_WEIGHT_KEY, &all)?;

        info!(id = %entry.id, weight, "Body weight recorded");
        Ok(entry)
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.load(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_list<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)
            .map_err(|source| Error::Serialization { key: key.to_string(), source })?;
        self.store.save(key, &raw)
    }
}

/// Creation time in millis plus a random suffix
fn new_id(now: DateTime<Utc>) -> String {
    format!("{}-{:08x}", now.timestamp_millis(), rand::random::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::{ActivityKind, NewPlanExercise, RunningLog, SetLog, WeightLiftingLog};
    use std::sync::atomic::{AtomicI64, Ordering};

    static TICK: AtomicI64 = AtomicI64::new(0);

    /// Each call is one minute later than the previous one
    fn ticking_clock() -> DateTime<Utc> {
        let n = TICK.fetch_add(1, Ordering::SeqCst);
        DateTime::from_timestamp(1_700_000_000 + n * 60, 0).unwrap()
    }

    fn repo() -> Repository<MemoryStore> {
        Repository::new(MemoryStore::new())
    }

    fn bench(weight: f64) -> NewActivity {
        ActivityKind::WeightLifting(WeightLiftingLog {
            exercise: "Bench Press".to_string(),
            sets: vec![SetLog { reps: 10, weight }],
            workout_plan_id: None,
            workout_plan_name: None,
        })
    }

    #[test]
    fn test_empty_collections() {
        let repo = repo();
        assert!(repo.list_activities().unwrap().is_empty());
        assert!(repo.list_plans().unwrap().is_empty());
        assert!(repo.list_body_weight().unwrap().is_empty());
    }

    #[test]
    fn test_append_prepends_newest() {
        let mut repo = repo();
        let first = repo.append_activity(bench(50.0)).unwrap();
        let second = repo
            .append_activity(ActivityKind::Running(RunningLog { distance: 5.0, duration: 25.0 }))
            .unwrap();

        let all = repo.list_activities().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_session_shares_timestamp() {
        let mut repo = repo();
        let added = repo.append_activities(vec![bench(50.0), bench(55.0)]).unwrap();
        assert_eq!(added[0].date, added[1].date);

        let all = repo.list_activities().unwrap();
        assert_eq!(all[0].id, added[0].id);
        assert_eq!(all[1].id, added[1].id);
    }

    #[test]
    fn test_invalid_activity_rejected_and_nothing_saved() {
        let mut repo = repo();
        let bad = ActivityKind::WeightLifting(WeightLiftingLog {
            exercise: "Squat".to_string(),
            sets: vec![SetLog { reps: 0, weight: 100.0 }],
            workout_plan_id: None,
            workout_plan_name: None,
        });
        let result = repo.append_activities(vec![bench(50.0), bad]);
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(repo.list_activities().unwrap().is_empty());
    }

    #[test]
    fn test_delete_activity() {
        let mut repo = repo();
        let a = repo.append_activity(bench(50.0)).unwrap();
        assert!(repo.delete_activity(&a.id).unwrap());
        assert!(!repo.delete_activity(&a.id).unwrap());
        assert!(repo.list_activities().unwrap().is_empty());
    }

    #[test]
    fn test_plan_append_and_delete_keeps_activities() {
        let mut repo = repo();
        let plan = repo
            .append_plan(NewPlan {
                name: "Push Day".to_string(),
                exercises: vec![NewPlanExercise {
                    name: "Bench Press".to_string(),
                    sets: 3,
                    reps: 10,
                }],
            })
            .unwrap();
        assert_eq!(plan.exercises.len(), 1);
        assert!(!plan.exercises[0].id.is_empty());

        repo.append_activity(ActivityKind::WeightLifting(WeightLiftingLog {
            exercise: "Bench Press".to_string(),
            sets: vec![SetLog { reps: 10, weight: 60.0 }],
            workout_plan_id: Some(plan.id.clone()),
            workout_plan_name: Some(plan.name.clone()),
        }))
        .unwrap();

        assert!(repo.delete_plan(&plan.id).unwrap());
        assert!(repo.list_plans().unwrap().is_empty());

        let activities = repo.list_activities().unwrap();
        let log = activities[0].as_weight_lifting().unwrap();
        assert_eq!(log.workout_plan_name.as_deref(), Some("Push Day"));
    }

    #[test]
    fn test_plans_keep_creation_order() {
        let mut repo = repo();
        for name in ["A", "B"] {
            repo.append_plan(NewPlan { name: name.to_string(), exercises: vec![] }).unwrap();
        }
        let names: Vec<_> = repo.list_plans().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_body_weight_sorted_descending() {
        let mut repo = repo().with_clock(ticking_clock);
        repo.append_body_weight(82.0).unwrap();
        repo.append_body_weight(81.5).unwrap();
        repo.append_body_weight(81.0).unwrap();

        let entries = repo.list_body_weight().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(entries[0].weight, 81.0);

        assert!(repo.append_body_weight(0.0).is_err());
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let mut store = MemoryStore::new();
        store.save(ACTIVITIES_KEY, "not json").unwrap();
        let repo = Repository::new(store);
        assert!(matches!(repo.list_activities(), Err(Error::Corrupt { .. })));
    }
}
