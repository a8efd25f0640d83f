//! fitlog - Personal workout log

use anyhow::{Context, Result, bail};
use chrono::{Duration, Local, Utc};
use clap::{Parser, Subcommand};

use fitlog::analytics::muscle_volume::{
    DEFAULT_WINDOW_DAYS, intensity_report, weekly_muscle_volume,
};
use fitlog::analytics::series::body_weight_series;
use fitlog::analytics::{
    Analytics, DraftExercise, HistoryFilter, PlanChoice, finalize_draft, history, prefill_draft,
};
use fitlog::config::Config;
use fitlog::db::{Database, Repository};
use fitlog::exercises::{get_all_exercises, same_exercise};
use fitlog::models::{
    Activity, ActivityKind, ActivityType, NewPlan, NewPlanExercise, RunningLog, SetLog,
    SwimmingLog, WeightLiftingLog,
};
use fitlog::tips::{TipState, request_tip};

/// Upper bound for `dashboard --days`, about a century
const MAX_WINDOW_DAYS: i64 = 36_500;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(author, version, about = "Personal workout log with progress analytics")]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "FITLOG_DB", global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a freestyle lifting exercise
    Lift {
        /// Exercise name (e.g. "Bench Press")
        exercise: String,

        /// Set as REPSxWEIGHT, repeatable (e.g. -s 10x60 -s 8x65)
        #[arg(short, long = "set", value_parser = parse_set, required = true)]
        sets: Vec<SetLog>,
    },

    /// Log a swim
    Swim {
        /// Distance in meters
        distance: f64,
        /// Duration in minutes
        duration: f64,
        /// Number of laps
        laps: u32,
    },

    /// Log a run
    Run {
        /// Distance in kilometers
        distance: f64,
        /// Duration in minutes
        duration: f64,
    },

    /// Start a lifting session from a plan, pre-filled with last session's weights
    Session {
        /// Plan id, or "freestyle"
        plan: String,

        /// Override the weight of every set of an exercise: NAME=WEIGHT
        #[arg(short, long = "weight", value_parser = parse_weight_override)]
        weights: Vec<(String, f64)>,

        /// Log the session instead of only showing the draft
        #[arg(long)]
        save: bool,
    },

    /// List activity history
    History {
        /// Only show one activity type
        #[arg(short, long, value_enum)]
        kind: Option<ActivityType>,

        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Delete an activity by id
    Delete { id: String },

    /// Manage workout plans
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },

    /// Record or show body weight
    Weight {
        /// Body weight in kg; omit to show history
        kg: Option<f64>,
    },

    /// Show progress dashboard
    Dashboard {
        /// Exercise for the max-weight chart (default: first alphabetically)
        #[arg(short, long)]
        exercise: Option<String>,

        /// Muscle volume window in days (default: 7)
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..=MAX_WINDOW_DAYS))]
        days: Option<i64>,
    },

    /// List known exercises and the muscle groups they work
    Exercises,

    /// Ask the AI coach for a tip
    Tip {
        #[arg(value_enum, default_value = "lifting")]
        kind: ActivityType,
    },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Create a plan
    Add {
        name: String,

        /// Exercise as NAME:SETSxREPS, repeatable (e.g. -e "Bench Press:3x10")
        #[arg(short, long = "exercise", value_parser = parse_plan_exercise, required = true)]
        exercises: Vec<NewPlanExercise>,
    },
    /// List plans
    List,
    /// Delete a plan (logged sessions are kept)
    Delete { id: String },
}

fn parse_set(s: &str) -> Result<SetLog, String> {
    let (reps, weight) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected REPSxWEIGHT, got '{}'", s))?;
    let reps: u32 = reps.trim().parse().map_err(|_| format!("invalid reps in '{}'", s))?;
    let weight: f64 = weight.trim().parse().map_err(|_| format!("invalid weight in '{}'", s))?;
    SetLog::new(reps, weight).map_err(|e| e.to_string())
}

fn parse_plan_exercise(s: &str) -> Result<NewPlanExercise, String> {
    let (name, scheme) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:SETSxREPS, got '{}'", s))?;
    let (sets, reps) = scheme
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected SETSxREPS, got '{}'", scheme))?;
    Ok(NewPlanExercise {
        name: name.trim().to_string(),
        sets: sets.trim().parse().map_err(|_| format!("invalid sets in '{}'", s))?,
        reps: reps.trim().parse().map_err(|_| format!("invalid reps in '{}'", s))?,
    })
}

fn parse_weight_override(s: &str) -> Result<(String, f64), String> {
    let (name, weight) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got '{}'", s))?;
    let weight: f64 = weight.trim().parse().map_err(|_| format!("invalid weight in '{}'", s))?;
    Ok((name.trim().to_string(), weight))
}

fn describe(activity: &Activity) -> String {
    match &activity.kind {
        ActivityKind::WeightLifting(log) => {
            let sets: Vec<_> =
                log.sets.iter().map(|s| format!("{}x{}", s.reps, s.weight)).collect();
            let plan = log
                .workout_plan_name
                .as_deref()
                .map(|p| format!(" [{}]", p))
                .unwrap_or_default();
            format!(
                "{}{} | {} | volume {:.1} kg",
                log.exercise,
                plan,
                sets.join(", "),
                log.total_volume()
            )
        }
        ActivityKind::Swimming(swim) => {
            format!("Swimming | {} m in {} min, {} laps", swim.distance, swim.duration, swim.laps)
        }
        ActivityKind::Running(run) => {
            format!(
                "Running | {} km in {} min, pace {:.2} min/km",
                run.distance,
                run.duration,
                run.pace()
            )
        }
    }
}

fn print_draft(draft: &[DraftExercise]) {
    for ex in draft {
        println!("{}", if ex.name.is_empty() { "<exercise>" } else { ex.name.as_str() });
        for (i, set) in ex.sets.iter().enumerate() {
            let reps = set.reps.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
            let weight = set.weight.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string());
            println!("  #{} {} reps @ {} kg", i + 1, reps, weight);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(|| config.db_path.clone());
    let db = Database::open(&db_path).with_context(|| format!("opening {}", db_path))?;
    let mut repo = Repository::new(db);

    match cli.command {
        Commands::Lift { exercise, sets } => {
            let activity = repo.append_activity(ActivityKind::WeightLifting(WeightLiftingLog {
                exercise,
                sets,
                workout_plan_id: None,
                workout_plan_name: None,
            }))?;
            println!("Logged: {} (id: {})", describe(&activity), activity.id);
        }

        Commands::Swim { distance, duration, laps } => {
            let activity = repo.append_activity(ActivityKind::Swimming(SwimmingLog {
                distance,
                duration,
                laps,
            }))?;
            println!("Logged: {} (id: {})", describe(&activity), activity.id);
        }

        Commands::Run { distance, duration } => {
            let activity =
                repo.append_activity(ActivityKind::Running(RunningLog { distance, duration }))?;
            println!("Logged: {} (id: {})", describe(&activity), activity.id);
        }

        Commands::Session { plan, weights, save } => {
            let choice = if plan == "freestyle" {
                PlanChoice::Freestyle
            } else {
                PlanChoice::Plan(plan)
            };
            let plans = repo.list_plans()?;
            let activities = repo.list_activities()?;

            let mut draft = prefill_draft(&choice, &plans, &activities)?;
            for (name, weight) in &weights {
                let Some(ex) = draft
                    .iter_mut()
                    .find(|ex| same_exercise(&ex.name, name))
                else {
                    bail!("'{}' is not part of this session", name);
                };
                for set in &mut ex.sets {
                    set.weight = Some(*weight);
                }
            }

            print_draft(&draft);

            if save {
                let session = finalize_draft(&draft, &choice, &plans)?;
                if session.is_empty() {
                    bail!("nothing to log: no exercise has a complete set");
                }
                let added = repo.append_activities(session)?;
                println!("Logged {} exercise(s)", added.len());
            }
        }

        Commands::History { kind, limit } => {
            let activities = repo.list_activities()?;
            let filter = kind.map(HistoryFilter::Only).unwrap_or_default();
            println!("Recent activities:");
            println!("{:-<60}", "");
            for a in history(&activities, filter).into_iter().take(limit) {
                println!(
                    "{} | {} | {}",
                    a.date.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                    describe(a),
                    a.id
                );
            }
        }

        Commands::Delete { id } => {
            if repo.delete_activity(&id)? {
                println!("Deleted {}", id);
            } else {
                println!("No activity with id {}", id);
            }
        }

        Commands::Plan { command } => match command {
            PlanCommand::Add { name, exercises } => {
                let plan = repo.append_plan(NewPlan { name, exercises })?;
                println!("Created plan {} (id: {})", plan.name, plan.id);
            }
            PlanCommand::List => {
                for plan in repo.list_plans()? {
                    println!("{} (id: {})", plan.name, plan.id);
                    for ex in &plan.exercises {
                        println!("  {} - {}x{}", ex.name, ex.sets, ex.reps);
                    }
                }
            }
            PlanCommand::Delete { id } => {
                if repo.delete_plan(&id)? {
                    println!("Deleted plan {}", id);
                } else {
                    println!("No plan with id {}", id);
                }
            }
        },

        Commands::Weight { kg } => {
            if let Some(kg) = kg {
                let entry = repo.append_body_weight(kg)?;
                println!("Recorded {:.1} kg", entry.weight);
            } else {
                for point in body_weight_series(&repo.list_body_weight()?) {
                    println!(
                        "{} | {:.1} kg",
                        point.date.with_timezone(&Local).format("%Y-%m-%d"),
                        point.weight
                    );
                }
            }
        }

        Commands::Dashboard { exercise, days } => {
            let activities = repo.list_activities()?;
            let analytics = Analytics::new(&activities);
            if analytics.is_empty() {
                println!("No activities logged yet.");
                return Ok(());
            }

            println!("Muscle volume (last {} days)", days.unwrap_or(DEFAULT_WINDOW_DAYS));
            println!("{:-<40}", "");
            let volumes = match days {
                Some(days) => analytics.muscle_volume(Utc::now(), Duration::days(days)),
                None => weekly_muscle_volume(&activities),
            };
            for (group, volume, level) in intensity_report(&volumes) {
                println!("{:12} {} {:.0}", group.name(), level.bar(), volume);
            }

            if let Some((name, points)) = analytics.progression(exercise.as_deref()) {
                println!("\nMax weight: {}", name);
                for p in points {
                    println!(
                        "  {} | {} kg",
                        p.date.with_timezone(&Local).format("%b %-d"),
                        p.max_weight
                    );
                }
            }

            let daily = analytics.daily_volume(&Local);
            if !daily.is_empty() {
                println!("\nLifting volume per day");
                for d in daily {
                    println!("  {} | {:.0}", d.day.format("%b %-d"), d.volume);
                }
            }

            let runs = analytics.running();
            if !runs.is_empty() {
                println!("\nRuns");
                for r in runs {
                    println!(
                        "  {} | {} km | {:.2} min/km",
                        r.date.with_timezone(&Local).format("%b %-d"),
                        r.distance,
                        r.pace
                    );
                }
            }

            let swims = analytics.weekly_swim_distance(&Local);
            if !swims.is_empty() {
                println!("\nSwimming per week");
                for w in swims {
                    println!("  week of {} | {} m", w.week_start.format("%b %-d"), w.distance);
                }
            }
        }

        Commands::Exercises => {
            for ex in get_all_exercises() {
                let groups: Vec<_> = ex.muscle_groups.iter().map(|g| g.name()).collect();
                println!("{:10} {:28} {}", ex.category.name(), ex.name, groups.join(", "));
            }
        }

        Commands::Tip { kind } => {
            println!("Tip for {}: {}", kind.label(), TipState::Pending.message());
            let state = request_tip(&config, kind).await;
            println!("{}", state.message());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("10x62.5").unwrap(), SetLog { reps: 10, weight: 62.5 });
        assert!(parse_set("10").is_err());
        assert!(parse_set("0x50").is_err());
    }

    #[test]
    fn test_parse_plan_exercise() {
        let ex = parse_plan_exercise("Bench Press:3x10").unwrap();
        assert_eq!(ex, NewPlanExercise { name: "Bench Press".to_string(), sets: 3, reps: 10 });
        assert!(parse_plan_exercise("Bench Press").is_err());
    }

    #[test]
    fn test_dashboard_days_bounded() {
        let cli = Cli::try_parse_from(["fitlog", "dashboard", "--days", "30"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard { days: Some(30), .. }));

        let cli = Cli::try_parse_from(["fitlog", "dashboard"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard { days: None, .. }));

        for days in ["0", "-3", "100000000", "9223372036854775807"] {
            assert!(
                Cli::try_parse_from(["fitlog", "dashboard", "--days", days]).is_err(),
                "accepted --days {}",
                days
            );
        }
    }

    #[test]
    fn test_parse_weight_override() {
        assert_eq!(parse_weight_override("Dips=10").unwrap(), ("Dips".to_string(), 10.0));
        assert!(parse_weight_override("Dips").is_err());
    }
}
