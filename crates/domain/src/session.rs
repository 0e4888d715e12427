use chrono::NaiveDate;
use log::debug;

use crate::{
    ActionError, DeleteTarget, ExerciseID, SetID, UpdateError, Workout, WorkoutAction,
    WorkoutID, WorkoutService,
};

/// A workout being edited.
///
/// The session works on its own copy. The stored collection only changes when the session is
/// saved; cancelling discards every change.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    original: Option<Workout>,
    workout: Workout,
}

impl EditSession {
    #[must_use]
    pub fn open(workout: &Workout) -> Self {
        debug!("open workout {}", workout.id);
        Self {
            original: Some(workout.clone()),
            workout: workout.clone(),
        }
    }

    #[must_use]
    pub fn new_workout(id: WorkoutID, date: NaiveDate) -> Self {
        debug!("open new workout {id}");
        Self {
            original: None,
            workout: Workout::new_default(id, date),
        }
    }

    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.original.as_ref() != Some(&self.workout)
    }

    pub fn apply(&mut self, action: WorkoutAction) -> Result<&Workout, ActionError> {
        self.workout = self.workout.apply(action)?;
        Ok(&self.workout)
    }

    pub fn delete(&mut self, target: DeleteTarget) -> Result<&Workout, ActionError> {
        self.apply(target.into_action())
    }

    /// Identifier for the next set added to the given exercise.
    pub fn next_set_id(&self, exercise_id: ExerciseID) -> Result<SetID, ActionError> {
        Ok(self
            .workout
            .exercise(exercise_id)
            .ok_or(ActionError::ExerciseNotFound(exercise_id))?
            .next_set_id()?)
    }

    pub fn save(self, service: &impl WorkoutService) -> Result<Workout, UpdateError> {
        service.save_workout(self.workout)
    }

    pub fn cancel(self) {
        debug!("discard changes to workout {}", self.workout.id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ExerciseSet, Reps, Weight, resolve_delete_target, sample_workouts};

    use super::*;

    #[test]
    fn test_edit_session_open() {
        let workout = &sample_workouts()[0];
        let session = EditSession::open(workout);

        assert_eq!(session.workout(), workout);
        assert!(!session.is_new());
        assert!(!session.is_modified());
    }

    #[test]
    fn test_edit_session_new_workout() {
        let session =
            EditSession::new_workout(4.into(), NaiveDate::from_ymd_opt(2023, 2, 4).unwrap());

        assert_eq!(session.workout().name, "New Workout");
        assert!(session.is_new());
        assert!(session.is_modified());
    }

    #[test]
    fn test_edit_session_apply() {
        let workouts = sample_workouts();
        let mut session = EditSession::open(&workouts[1]);
        let set_id = session.next_set_id(1.into()).unwrap();

        assert_eq!(set_id, SetID::from(3));

        session
            .apply(WorkoutAction::AddExerciseSet {
                exercise_id: 1.into(),
                set: ExerciseSet {
                    id: set_id,
                    weight: Weight::try_from("315").unwrap(),
                    reps: Reps::from(5),
                },
            })
            .unwrap();

        assert!(session.is_modified());
        assert_eq!(session.workout().exercises[0].sets.len(), 3);
        assert_eq!(workouts, sample_workouts());
    }

    #[test]
    fn test_edit_session_apply_failure_keeps_workout() {
        let mut session = EditSession::open(&sample_workouts()[0]);

        assert_eq!(
            session.apply(WorkoutAction::UpdateExerciseName {
                exercise_id: 9.into(),
                name: String::from("X"),
            }),
            Err(ActionError::ExerciseNotFound(9.into()))
        );
        assert!(!session.is_modified());
    }

    #[test]
    fn test_edit_session_delete() {
        let mut session = EditSession::open(&sample_workouts()[0]);

        session
            .delete(resolve_delete_target(1.into(), Some(2.into())))
            .unwrap();

        assert_eq!(session.workout().exercises[0].sets.len(), 1);

        session.delete(resolve_delete_target(1.into(), None)).unwrap();

        assert_eq!(session.workout().exercises.len(), 1);
        assert_eq!(session.workout().supersets, vec![ExerciseID::from(2)]);
    }

    #[test]
    fn test_edit_session_next_set_id_exhausted() {
        let mut workout = sample_workouts()[2].clone();
        workout.exercises[0].sets[1].id = u32::MAX.into();
        let session = EditSession::open(&workout);

        assert_eq!(
            session.next_set_id(1.into()),
            Err(ActionError::IdsExhausted(crate::IdsExhausted(u32::MAX)))
        );
    }

    #[test]
    fn test_edit_session_next_set_id_missing_exercise() {
        let session = EditSession::new_workout(1.into(), NaiveDate::default());

        assert_eq!(
            session.next_set_id(1.into()),
            Err(ActionError::ExerciseNotFound(1.into()))
        );
    }
}
