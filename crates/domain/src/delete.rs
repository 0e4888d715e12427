use crate::{ExerciseID, SetID, WorkoutAction};

/// What a single delete request removes from a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Exercise {
        exercise_id: ExerciseID,
    },
    Set {
        exercise_id: ExerciseID,
        set_id: SetID,
    },
}

impl DeleteTarget {
    #[must_use]
    pub fn exercise_id(&self) -> ExerciseID {
        match self {
            DeleteTarget::Exercise { exercise_id } | DeleteTarget::Set { exercise_id, .. } => {
                *exercise_id
            }
        }
    }

    #[must_use]
    pub fn into_action(self) -> WorkoutAction {
        match self {
            DeleteTarget::Exercise { exercise_id } => WorkoutAction::DeleteExercise { exercise_id },
            DeleteTarget::Set {
                exercise_id,
                set_id,
            } => WorkoutAction::DeleteExerciseSet {
                exercise_id,
                set_id,
            },
        }
    }
}

impl From<DeleteTarget> for WorkoutAction {
    fn from(value: DeleteTarget) -> Self {
        value.into_action()
    }
}

/// Deletes the whole exercise unless a set is given.
#[must_use]
pub fn resolve_delete_target(exercise_id: ExerciseID, set_id: Option<SetID>) -> DeleteTarget {
    match set_id {
        Some(set_id) => DeleteTarget::Set {
            exercise_id,
            set_id,
        },
        None => DeleteTarget::Exercise { exercise_id },
    }
}
