use log::debug;

use crate::{IdsExhausted, Workout, WorkoutID, next_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Returns a copy of `workouts` in which `workout` replaces the entry with the same identifier,
/// or is appended if there is no such entry.
#[must_use]
pub fn upsert_workout(workouts: &[Workout], workout: Workout) -> Vec<Workout> {
    let mut result = workouts.to_vec();
    upsert_workout_in_place(&mut result, workout);
    result
}

/// Replaces the entry with the same identifier as `workout` or appends `workout`.
///
/// A replaced entry keeps its position.
pub fn upsert_workout_in_place(workouts: &mut Vec<Workout>, workout: Workout) -> Upsert {
    let id = workout.id;
    if let Some(existing) = workouts.iter_mut().find(|w| w.id == id) {
        *existing = workout;
        debug!("replaced workout {id}");
        Upsert::Replaced
    } else {
        workouts.push(workout);
        debug!("inserted workout {id}");
        Upsert::Inserted
    }
}

pub fn next_workout_id(workouts: &[Workout]) -> Result<WorkoutID, IdsExhausted> {
    next_id(workouts.iter().map(|w| w.id))
}
