#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod action;
mod collection;
mod delete;
mod error;
mod format;
mod id;
mod seed;
mod service;
mod session;
mod workout;

pub use action::{ActionError, ActionKind, WorkoutAction};
pub use collection::{Upsert, next_workout_id, upsert_workout, upsert_workout_in_place};
pub use delete::{DeleteTarget, resolve_delete_target};
pub use error::{ReadError, StorageError, UpdateError};
pub use format::{
    WorkoutRow, format_date, format_set, format_sets, format_superset_flag,
    format_workout_short_desc, format_workout_title, workout_rows,
};
pub use id::{ExerciseID, IdsExhausted, SetID, WorkoutID, next_id};
pub use seed::sample_workouts;
pub use service::Service;
pub use session::EditSession;
pub use workout::{
    DEFAULT_WORKOUT_NAME, Exercise, ExerciseSet, Reps, RepsError, Weight, WeightError, Workout,
    WorkoutRepository, WorkoutService,
};
