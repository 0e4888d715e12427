use std::str::FromStr;

use log::debug;
use strum::{Display, EnumString, VariantNames};

use crate::{Exercise, ExerciseID, ExerciseSet, IdsExhausted, SetID, Workout};

/// A change to a single workout during an edit session.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutAction {
    AddExercise {
        name: String,
    },
    UpdateExerciseName {
        exercise_id: ExerciseID,
        name: String,
    },
    DeleteExercise {
        exercise_id: ExerciseID,
    },
    AddExerciseSet {
        exercise_id: ExerciseID,
        set: ExerciseSet,
    },
    UpdateExerciseSet {
        exercise_id: ExerciseID,
        set: ExerciseSet,
    },
    DeleteExerciseSet {
        exercise_id: ExerciseID,
        set_id: SetID,
    },
    AddSuperset {
        exercise_id: ExerciseID,
    },
    DeleteSuperset {
        exercise_id: ExerciseID,
    },
}

impl WorkoutAction {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            WorkoutAction::AddExercise { .. } => ActionKind::AddExercise,
            WorkoutAction::UpdateExerciseName { .. } => ActionKind::UpdateExerciseName,
            WorkoutAction::DeleteExercise { .. } => ActionKind::DeleteExercise,
            WorkoutAction::AddExerciseSet { .. } => ActionKind::AddExerciseSet,
            WorkoutAction::UpdateExerciseSet { .. } => ActionKind::UpdateExerciseSet,
            WorkoutAction::DeleteExerciseSet { .. } => ActionKind::DeleteExerciseSet,
            WorkoutAction::AddSuperset { .. } => ActionKind::AddSuperset,
            WorkoutAction::DeleteSuperset { .. } => ActionKind::DeleteSuperset,
        }
    }
}

/// Names under which actions are dispatched from outside the crate.
#[derive(Debug, Display, EnumString, VariantNames, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum ActionKind {
    AddExercise,
    UpdateExerciseName,
    DeleteExercise,
    AddExerciseSet,
    UpdateExerciseSet,
    DeleteExerciseSet,
    AddSuperset,
    DeleteSuperset,
}

impl ActionKind {
    /// Looks up an action kind by its dispatch name.
    pub fn parse(name: &str) -> Result<Self, ActionError> {
        Self::from_str(name).map_err(|_| ActionError::UnrecognizedAction(name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    UnrecognizedAction(String),
    #[error("exercise {0} not found")]
    ExerciseNotFound(ExerciseID),
    #[error("set {set_id} of exercise {exercise_id} not found")]
    SetNotFound {
        exercise_id: ExerciseID,
        set_id: SetID,
    },
    #[error("set {set_id} of exercise {exercise_id} already exists")]
    DuplicateSet {
        exercise_id: ExerciseID,
        set_id: SetID,
    },
    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),
}

impl Workout {
    /// Returns the workout resulting from `action`, leaving `self` untouched.
    ///
    /// An action either applies completely or fails without producing a workout. Deleting an
    /// exercise, a set or a superset flag that does not exist succeeds without changes.
    pub fn apply(&self, action: WorkoutAction) -> Result<Workout, ActionError> {
        debug!("apply {} to workout {}", action.kind(), self.id);

        let mut workout = self.clone();

        match action {
            WorkoutAction::AddExercise { name } => {
                let id = workout.next_exercise_id()?;
                workout.exercises.push(Exercise::new(id, name));
            }
            WorkoutAction::UpdateExerciseName { exercise_id, name } => {
                workout
                    .exercise_mut(exercise_id)
                    .ok_or(ActionError::ExerciseNotFound(exercise_id))?
                    .name = name;
            }
            WorkoutAction::DeleteExercise { exercise_id } => {
                workout.exercises.retain(|e| e.id != exercise_id);
                workout.supersets.retain(|id| *id != exercise_id);
            }
            WorkoutAction::AddExerciseSet { exercise_id, set } => {
                let exercise = workout
                    .exercise_mut(exercise_id)
                    .ok_or(ActionError::ExerciseNotFound(exercise_id))?;
                if exercise.set(set.id).is_some() {
                    return Err(ActionError::DuplicateSet {
                        exercise_id,
                        set_id: set.id,
                    });
                }
                exercise.sets.push(set);
            }
            WorkoutAction::UpdateExerciseSet { exercise_id, set } => {
                let exercise = workout
                    .exercise_mut(exercise_id)
                    .ok_or(ActionError::ExerciseNotFound(exercise_id))?;
                *exercise
                    .sets
                    .iter_mut()
                    .find(|s| s.id == set.id)
                    .ok_or(ActionError::SetNotFound {
                        exercise_id,
                        set_id: set.id,
                    })? = set;
            }
            WorkoutAction::DeleteExerciseSet {
                exercise_id,
                set_id,
            } => {
                if let Some(exercise) = workout.exercise_mut(exercise_id) {
                    exercise.sets.retain(|s| s.id != set_id);
                }
            }
            WorkoutAction::AddSuperset { exercise_id } => {
                if workout.exercise(exercise_id).is_none() {
                    return Err(ActionError::ExerciseNotFound(exercise_id));
                }
                if !workout.is_superset(exercise_id) {
                    workout.supersets.push(exercise_id);
                }
            }
            WorkoutAction::DeleteSuperset { exercise_id } => {
                workout.supersets.retain(|id| *id != exercise_id);
            }
        }

        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Weight, format_sets};

    use super::*;

    fn set(id: u32, weight: &str, reps: u32) -> ExerciseSet {
        ExerciseSet {
            id: id.into(),
            weight: Weight::try_from(weight).unwrap(),
            reps: reps.into(),
        }
    }

    fn workout() -> Workout {
        Workout {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            name: String::from("Workout 1"),
            exercises: vec![
                Exercise {
                    id: 1.into(),
                    name: String::from("Bench Press"),
                    sets: vec![set(1, "200", 10), set(2, "205", 8)],
                },
                Exercise {
                    id: 2.into(),
                    name: String::from("Squats"),
                    sets: vec![set(1, "250", 10)],
                },
                Exercise::new(5.into(), "Lunges"),
            ],
            supersets: vec![2.into(), 5.into()],
        }
    }

    #[test]
    fn test_apply_add_exercise() {
        let mut workout = workout();
        workout.exercises.remove(1);

        let result = workout
            .apply(WorkoutAction::AddExercise {
                name: String::from("Bench"),
            })
            .unwrap();

        assert_eq!(result.exercises.len(), 3);
        assert_eq!(&result.exercises[..2], &workout.exercises[..]);
        assert_eq!(result.exercises[2], Exercise::new(6.into(), "Bench"));
    }

    #[test]
    fn test_apply_add_exercise_to_empty_workout() {
        let workout = Workout::new_default(1.into(), NaiveDate::default());

        let result = workout
            .apply(WorkoutAction::AddExercise {
                name: String::from("Deadlift"),
            })
            .unwrap();

        assert_eq!(result.exercises, vec![Exercise::new(1.into(), "Deadlift")]);
    }

    #[test]
    fn test_apply_does_not_modify_original() {
        let workout = workout();

        let result = workout
            .apply(WorkoutAction::DeleteExercise {
                exercise_id: 1.into(),
            })
            .unwrap();

        assert_eq!(result.exercises.len(), 2);
        assert_eq!(workout, self::workout());
    }

    #[test]
    fn test_apply_update_exercise_name() {
        let result = workout()
            .apply(WorkoutAction::UpdateExerciseName {
                exercise_id: 2.into(),
                name: String::from("Front Squats"),
            })
            .unwrap();

        assert_eq!(result.exercises[1].name, "Front Squats");
        assert_eq!(result.exercises[1].sets, workout().exercises[1].sets);
    }

    #[test]
    fn test_apply_delete_exercise() {
        let result = workout()
            .apply(WorkoutAction::DeleteExercise {
                exercise_id: 2.into(),
            })
            .unwrap();

        assert_eq!(
            result.exercises.iter().map(|e| *e.id).collect::<Vec<_>>(),
            vec![1, 5]
        );
        assert_eq!(result.supersets, vec![ExerciseID::from(5)]);
        assert_eq!(
            result.apply(WorkoutAction::DeleteExercise {
                exercise_id: 2.into(),
            }),
            Ok(result.clone())
        );
    }

    #[test]
    fn test_apply_add_exercise_set() {
        let result = workout()
            .apply(WorkoutAction::AddExerciseSet {
                exercise_id: 2.into(),
                set: set(2, "255", 8),
            })
            .unwrap();

        assert_eq!(
            result.exercises[1].sets,
            vec![set(1, "250", 10), set(2, "255", 8)]
        );
        assert_eq!(result.exercises[0], workout().exercises[0]);
    }

    #[test]
    fn test_apply_add_exercise_set_twice_with_same_id() {
        let action = WorkoutAction::AddExerciseSet {
            exercise_id: 1.into(),
            set: set(3, "210", 6),
        };
        let result = workout().apply(action.clone()).unwrap();

        assert_eq!(
            result.apply(action),
            Err(ActionError::DuplicateSet {
                exercise_id: 1.into(),
                set_id: 3.into(),
            })
        );
        assert_eq!(
            result.exercises[0].sets.iter().map(|s| *s.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_apply_add_exercise_ids_exhausted() {
        let mut workout = workout();
        workout.exercises.push(Exercise::new(u32::MAX.into(), "Rows"));

        assert_eq!(
            workout.apply(WorkoutAction::AddExercise {
                name: String::from("Curls"),
            }),
            Err(ActionError::IdsExhausted(IdsExhausted(u32::MAX)))
        );
    }

    #[test]
    fn test_apply_update_exercise_set() {
        let result = workout()
            .apply(WorkoutAction::UpdateExerciseSet {
                exercise_id: 1.into(),
                set: set(1, "195", 12),
            })
            .unwrap();

        assert_eq!(
            result.exercises[0].sets,
            vec![set(1, "195", 12), set(2, "205", 8)]
        );
    }

    #[test]
    fn test_apply_delete_exercise_set() {
        let result = workout()
            .apply(WorkoutAction::DeleteExerciseSet {
                exercise_id: 1.into(),
                set_id: 1.into(),
            })
            .unwrap();

        assert_eq!(result.exercises[0].sets, vec![set(2, "205", 8)]);
        assert_eq!(result.exercises[1], workout().exercises[1]);
    }

    #[rstest]
    #[case::missing_set(1, 9)]
    #[case::missing_exercise(9, 1)]
    fn test_apply_delete_exercise_set_absent(#[case] exercise_id: u32, #[case] set_id: u32) {
        assert_eq!(
            workout().apply(WorkoutAction::DeleteExerciseSet {
                exercise_id: exercise_id.into(),
                set_id: set_id.into(),
            }),
            Ok(workout())
        );
    }

    #[test]
    fn test_apply_add_superset() {
        let result = workout()
            .apply(WorkoutAction::AddSuperset {
                exercise_id: 1.into(),
            })
            .unwrap();

        assert_eq!(
            result.supersets,
            vec![ExerciseID::from(2), ExerciseID::from(5), ExerciseID::from(1)]
        );
    }

    #[test]
    fn test_apply_add_superset_is_idempotent() {
        let result = workout()
            .apply(WorkoutAction::AddSuperset {
                exercise_id: 2.into(),
            })
            .unwrap();

        assert_eq!(result.supersets, workout().supersets);
    }

    #[test]
    fn test_apply_delete_superset() {
        let mut workout = workout();
        workout.supersets.push(2.into());

        let result = workout
            .apply(WorkoutAction::DeleteSuperset {
                exercise_id: 2.into(),
            })
            .unwrap();

        assert_eq!(result.supersets, vec![ExerciseID::from(5)]);
        assert_eq!(result.exercises, workout.exercises);
    }

    #[rstest]
    #[case::update_exercise_name(
        WorkoutAction::UpdateExerciseName { exercise_id: 9.into(), name: String::from("X") },
        ActionError::ExerciseNotFound(9.into())
    )]
    #[case::add_exercise_set(
        WorkoutAction::AddExerciseSet { exercise_id: 9.into(), set: set(1, "10", 1) },
        ActionError::ExerciseNotFound(9.into())
    )]
    #[case::update_exercise_set_missing_exercise(
        WorkoutAction::UpdateExerciseSet { exercise_id: 9.into(), set: set(1, "10", 1) },
        ActionError::ExerciseNotFound(9.into())
    )]
    #[case::update_exercise_set_missing_set(
        WorkoutAction::UpdateExerciseSet { exercise_id: 1.into(), set: set(7, "10", 1) },
        ActionError::SetNotFound { exercise_id: 1.into(), set_id: 7.into() }
    )]
    #[case::add_superset(
        WorkoutAction::AddSuperset { exercise_id: 9.into() },
        ActionError::ExerciseNotFound(9.into())
    )]
    #[case::add_exercise_set_duplicate(
        WorkoutAction::AddExerciseSet { exercise_id: 1.into(), set: set(2, "210", 6) },
        ActionError::DuplicateSet { exercise_id: 1.into(), set_id: 2.into() }
    )]
    fn test_apply_not_found(#[case] action: WorkoutAction, #[case] expected: ActionError) {
        assert_eq!(workout().apply(action), Err(expected));
    }

    #[test]
    fn test_apply_sequence() {
        let workout = Workout {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            name: String::from("Workout 1"),
            exercises: vec![Exercise {
                id: 1.into(),
                name: String::from("Bench Press"),
                sets: vec![set(1, "200", 10)],
            }],
            supersets: vec![],
        };

        let result = workout
            .apply(WorkoutAction::AddExerciseSet {
                exercise_id: 1.into(),
                set: set(2, "205", 8),
            })
            .unwrap();

        assert_eq!(
            result.exercises[0].sets,
            vec![set(1, "200", 10), set(2, "205", 8)]
        );
        assert_eq!(
            format_sets(&result.exercises[0].sets),
            "200lbs * 10, 205lbs * 8"
        );
    }

    #[rstest]
    #[case("addExercise", Ok(ActionKind::AddExercise))]
    #[case("updateExerciseName", Ok(ActionKind::UpdateExerciseName))]
    #[case("deleteExerciseSet", Ok(ActionKind::DeleteExerciseSet))]
    #[case("deleteSuperset", Ok(ActionKind::DeleteSuperset))]
    #[case(
        "renameWorkout",
        Err(ActionError::UnrecognizedAction(String::from("renameWorkout")))
    )]
    #[case("", Err(ActionError::UnrecognizedAction(String::new())))]
    fn test_action_kind_parse(
        #[case] name: &str,
        #[case] expected: Result<ActionKind, ActionError>,
    ) {
        assert_eq!(ActionKind::parse(name), expected);
    }

    #[test]
    fn test_action_kind_names() {
        for name in ActionKind::VARIANTS {
            assert_eq!(ActionKind::parse(name).unwrap().to_string(), *name);
        }
    }

    #[test]
    fn test_workout_action_kind() {
        assert_eq!(
            WorkoutAction::DeleteSuperset {
                exercise_id: 1.into()
            }
            .kind(),
            ActionKind::DeleteSuperset
        );
        assert_eq!(
            WorkoutAction::AddExercise {
                name: String::new()
            }
            .kind()
            .to_string(),
            "addExercise"
        );
    }
}
