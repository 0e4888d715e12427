use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    EditSession, ReadError, UpdateError, Workout, WorkoutID, WorkoutRepository, WorkoutService,
    next_workout_id,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), "get", "workouts")
    }

    fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        self.get_workouts()?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(ReadError::NotFound(id))
    }

    fn save_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
        let id = workout.id;
        let result = log_on_error!(self.repository.replace_workout(workout), "save", "workout");
        if result.is_ok() {
            debug!("saved workout {id}");
        }
        result
    }

    fn edit_workout(&self, id: WorkoutID) -> Result<EditSession, ReadError> {
        Ok(EditSession::open(&self.get_workout(id)?))
    }

    fn create_workout(&self, date: NaiveDate) -> Result<EditSession, ReadError> {
        let workouts = self.get_workouts()?;
        let id = next_workout_id(&workouts).map_err(|err| ReadError::Other(Box::new(err)))?;
        Ok(EditSession::new_workout(id, date))
    }
}
