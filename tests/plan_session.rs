//! Log plan sessions through a file-backed repository and pre-fill the next one

use fitlog::analytics::{DraftSet, PlanChoice, finalize_draft, prefill_draft};
use fitlog::db::repo::ACTIVITIES_KEY;
use fitlog::db::{Database, KeyValueStore, Repository};
use fitlog::models::{ActivityType, NewPlan, NewPlanExercise};

fn set(reps: u32, weight: f64) -> DraftSet {
    DraftSet { reps: Some(reps), weight: Some(weight) }
}

fn push_day() -> NewPlan {
    NewPlan {
        name: "Push Day".to_string(),
        exercises: vec![
            NewPlanExercise { name: "Bench Press".to_string(), sets: 2, reps: 10 },
            NewPlanExercise { name: "Overhead Press".to_string(), sets: 3, reps: 8 },
        ],
    }
}

#[test]
fn test_collections_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitlog.db");
    let path = path.to_str().unwrap();

    let plan_id = {
        let mut repo = Repository::new(Database::open(path).unwrap());
        let plan = repo.append_plan(push_day()).unwrap();
        repo.append_body_weight(80.2).unwrap();
        plan.id
    };

    let repo = Repository::new(Database::open(path).unwrap());
    let plans = repo.list_plans().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, plan_id);
    assert_eq!(plans[0].exercises[1].name, "Overhead Press");
    assert_eq!(repo.list_body_weight().unwrap()[0].weight, 80.2);
}

#[test]
fn test_logged_session_prefills_next_one() {
    let mut repo = Repository::new(Database::open_in_memory().unwrap());
    let plan = repo.append_plan(push_day()).unwrap();
    let choice = PlanChoice::Plan(plan.id.clone());

    let plans = repo.list_plans().unwrap();
    let mut draft = prefill_draft(&choice, &plans, &repo.list_activities().unwrap()).unwrap();
    assert_eq!(draft[0].sets, vec![set(10, 0.0); 2]);

    // Lift 60 / 62.5 on bench; leave overhead press blank
    draft[0].sets[0].weight = Some(60.0);
    draft[0].sets[1].weight = Some(62.5);
    for s in &mut draft[1].sets {
        s.weight = None;
    }

    let session = finalize_draft(&draft, &choice, &plans).unwrap();
    assert_eq!(session.len(), 1);
    repo.append_activities(session).unwrap();

    let activities = repo.list_activities().unwrap();
    assert_eq!(activities[0].activity_type(), ActivityType::WeightLifting);
    assert_eq!(
        activities[0].as_weight_lifting().unwrap().workout_plan_name.as_deref(),
        Some("Push Day")
    );

    let next = prefill_draft(&choice, &plans, &activities).unwrap();
    assert_eq!(next[0].sets, vec![set(10, 60.0), set(10, 62.5)]);
    assert_eq!(next[1].sets, vec![set(8, 0.0); 3]);

    // Deleting the plan leaves history untouched
    assert!(repo.delete_plan(&plan.id).unwrap());
    assert_eq!(repo.list_activities().unwrap().len(), 1);
}

#[test]
fn test_stored_format_uses_type_tag() {
    let mut repo = Repository::new(Database::open_in_memory().unwrap());
    repo.append_body_weight(79.0).unwrap();
    let plan = repo.append_plan(push_day()).unwrap();
    let draft = prefill_draft(&PlanChoice::Plan(plan.id.clone()), &[plan.clone()], &[]).unwrap();
    let session = finalize_draft(&draft, &PlanChoice::Plan(plan.id.clone()), &[plan]).unwrap();
    repo.append_activities(session).unwrap();

    let db = repo.into_inner();
    let raw = db.load(ACTIVITIES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["type"], "Weight Lifting");
    assert_eq!(value[0]["exercise"], "Bench Press");
    assert!(value[0]["workoutPlanId"].is_string());
}
