use chrono::{Datelike, NaiveDate};

use crate::{Exercise, ExerciseSet, Workout};

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

#[must_use]
pub fn format_set(set: &ExerciseSet) -> String {
    format!("{}lbs * {}", set.weight, set.reps)
}

#[must_use]
pub fn format_sets(sets: &[ExerciseSet]) -> String {
    sets.iter().map(format_set).collect::<Vec<_>>().join(", ")
}

#[must_use]
pub fn format_workout_title(workout: &Workout) -> String {
    format!("{} {}", format_date(workout.date), workout.name)
}

#[must_use]
pub fn format_workout_short_desc(workout: &Workout) -> String {
    workout
        .exercises
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn format_superset_flag(is_superset: bool) -> &'static str {
    if is_superset { "Y" } else { "" }
}

/// One line of the detailed workout view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRow {
    pub exercise: String,
    pub sets: String,
    pub superset: &'static str,
}

impl WorkoutRow {
    fn new(workout: &Workout, exercise: &Exercise) -> Self {
        Self {
            exercise: exercise.name.clone(),
            sets: format_sets(&exercise.sets),
            superset: format_superset_flag(workout.is_superset(exercise.id)),
        }
    }
}

#[must_use]
pub fn workout_rows(workout: &Workout) -> Vec<WorkoutRow> {
    workout
        .exercises
        .iter()
        .map(|e| WorkoutRow::new(workout, e))
        .collect()
}
