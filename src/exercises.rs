//! Exercise dictionary - which muscle groups each lift works

use serde::{Deserialize, Serialize};

/// Muscle groups used to bucket lifting volume
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs, // taxonomy label only, no exercise maps to it
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Abs,
    Forearms,
}

impl MuscleGroup {
    pub fn name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Forearms => "Forearms",
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Abs,
            MuscleGroup::Forearms,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub name: &'static str,
    pub category: Category,
    pub muscle_groups: &'static [MuscleGroup],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Chest,
    Back,
    Shoulders,
    Legs,
    Arms,
    Abs,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Shoulders => "Shoulders",
            Category::Legs => "Legs",
            Category::Arms => "Arms",
            Category::Abs => "Abs",
        }
    }
}

#[rustfmt::skip]
pub const EXERCISES: &[Exercise] = &[
    // Chest
    Exercise { name: "Bench Press", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps] },
    Exercise { name: "Incline Bench Press", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders] },
    Exercise { name: "Decline Bench Press", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest] },
    Exercise { name: "Dumbbell Press", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps] },
    Exercise { name: "Incline Dumbbell Press", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders] },
    Exercise { name: "Push-ups", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps] },
    Exercise { name: "Dips", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders] },
    Exercise { name: "Cable Fly", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest] },
    Exercise { name: "Dumbbell Fly", category: Category::Chest, muscle_groups: &[MuscleGroup::Chest] },

    // Back
    Exercise { name: "Pull-ups", category: Category::Back, muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps] },
    Exercise { name: "Chin-ups", category: Category::Back, muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps] },
    Exercise { name: "Lat Pulldown", category: Category::Back, muscle_groups: &[MuscleGroup::Back] },
    Exercise { name: "Bent Over Row", category: Category::Back, muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps] },
    Exercise { name: "T-Bar Row", category: Category::Back, muscle_groups: &[MuscleGroup::Back] },
    Exercise { name: "Seated Cable Row", category: Category::Back, muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps] },
    Exercise { name: "Deadlift", category: Category::Back, muscle_groups: &[MuscleGroup::Back, MuscleGroup::Glutes, MuscleGroup::Hamstrings] },
    Exercise { name: "Romanian Deadlift", category: Category::Back, muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::Back] },

    // Shoulders
    Exercise { name: "Overhead Press", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps] },
    Exercise { name: "Arnold Press", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders] },
    Exercise { name: "Lateral Raise", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders] },
    Exercise { name: "Front Raise", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders] },
    Exercise { name: "Rear Delt Fly", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Back] },
    Exercise { name: "Face Pulls", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Back] },
    Exercise { name: "Upright Row", category: Category::Shoulders, muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps] },

    // Legs
    Exercise { name: "Squat", category: Category::Legs, muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::Hamstrings] },
    Exercise { name: "Front Squat", category: Category::Legs, muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes] },
    Exercise { name: "Leg Press", category: Category::Legs, muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes] },
    Exercise { name: "Lunge", category: Category::Legs, muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes] },
    Exercise { name: "Leg Extension", category: Category::Legs, muscle_groups: &[MuscleGroup::Quads] },
    Exercise { name: "Leg Curl", category: Category::Legs, muscle_groups: &[MuscleGroup::Hamstrings] },
    Exercise { name: "Good Mornings", category: Category::Legs, muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes] },
    Exercise { name: "Calf Raise", category: Category::Legs, muscle_groups: &[MuscleGroup::Calves] },
    Exercise { name: "Hip Thrust", category: Category::Legs, muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings] },

    // Arms
    Exercise { name: "Bicep Curl", category: Category::Arms, muscle_groups: &[MuscleGroup::Biceps] },
    Exercise { name: "Hammer Curl", category: Category::Arms, muscle_groups: &[MuscleGroup::Biceps, MuscleGroup::Forearms] },
    Exercise { name: "Preacher Curl", category: Category::Arms, muscle_groups: &[MuscleGroup::Biceps] },
    Exercise { name: "Triceps Pushdown", category: Category::Arms, muscle_groups: &[MuscleGroup::Triceps] },
    Exercise { name: "Skull Crushers", category: Category::Arms, muscle_groups: &[MuscleGroup::Triceps] },
    Exercise { name: "Overhead Triceps Extension", category: Category::Arms, muscle_groups: &[MuscleGroup::Triceps] },
    Exercise { name: "Close Grip Bench Press", category: Category::Arms, muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Chest] },
    Exercise { name: "Wrist Curl", category: Category::Arms, muscle_groups: &[MuscleGroup::Forearms] },

    // Abs
    Exercise { name: "Crunches", category: Category::Abs, muscle_groups: &[MuscleGroup::Abs] },
    Exercise { name: "Leg Raises", category: Category::Abs, muscle_groups: &[MuscleGroup::Abs] },
    Exercise { name: "Plank", category: Category::Abs, muscle_groups: &[MuscleGroup::Abs] },
    Exercise { name: "Russian Twist", category: Category::Abs, muscle_groups: &[MuscleGroup::Abs] },
    Exercise { name: "Cable Crunch", category: Category::Abs, muscle_groups: &[MuscleGroup::Abs] },
];

pub fn get_all_exercises() -> &'static [Exercise] {
    EXERCISES
}

/// Exercise name matching used everywhere: trimmed, case-insensitive equality
pub fn same_exercise(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Find exercise by name (for matching logged activities)
pub fn find_exercise_by_name(name: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| same_exercise(e.name, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let ex = find_exercise_by_name("bench press").unwrap();
        assert_eq!(ex.name, "Bench Press");
        assert_eq!(
            ex.muscle_groups,
            &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps]
        );

        assert!(find_exercise_by_name("  DEADLIFT ").is_some());
    }

    #[test]
    fn test_lookup_is_exact_not_fuzzy() {
        assert!(find_exercise_by_name("Bench").is_none());
        assert!(find_exercise_by_name("Bench Presses").is_none());
    }

    #[test]
    fn test_every_exercise_has_muscle_groups() {
        for ex in get_all_exercises() {
            assert!(!ex.muscle_groups.is_empty(), "{} has no muscle groups", ex.name);
        }
    }

    #[test]
    fn test_names_are_unique_ignoring_case() {
        let all = get_all_exercises();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!same_exercise(a.name, b.name), "duplicate entry {}", a.name);
            }
        }
    }

    #[test]
    fn test_legs_is_not_used_as_bucket() {
        assert!(
            get_all_exercises()
                .iter()
                .all(|ex| !ex.muscle_groups.contains(&MuscleGroup::Legs))
        );
        assert!(MuscleGroup::all().contains(&MuscleGroup::Legs));
    }
}
