use chrono::NaiveDate;
use derive_more::{Display, Into};
use thiserror::Error;

use crate::{
    EditSession, ExerciseID, IdsExhausted, ReadError, SetID, UpdateError, WorkoutID, next_id,
};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    /// Inserts the workout or replaces the stored workout with the same identifier.
    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
}

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    fn save_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    fn edit_workout(&self, id: WorkoutID) -> Result<EditSession, ReadError>;
    fn create_workout(&self, date: NaiveDate) -> Result<EditSession, ReadError>;
}

pub const DEFAULT_WORKOUT_NAME: &str = "New Workout";

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub name: String,
    pub exercises: Vec<Exercise>,
    /// Exercises flagged as part of a superset. Only membership is recorded, so distinct
    /// superset groups within one workout cannot be told apart.
    pub supersets: Vec<ExerciseID>,
}

impl Workout {
    #[must_use]
    pub fn new(id: WorkoutID, date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            id,
            date,
            name: name.into(),
            exercises: vec![],
            supersets: vec![],
        }
    }

    #[must_use]
    pub fn new_default(id: WorkoutID, date: NaiveDate) -> Self {
        Self::new(id, date, DEFAULT_WORKOUT_NAME)
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub(crate) fn exercise_mut(&mut self, id: ExerciseID) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }

    #[must_use]
    pub fn is_superset(&self, id: ExerciseID) -> bool {
        self.supersets.contains(&id)
    }

    pub fn next_exercise_id(&self) -> Result<ExerciseID, IdsExhausted> {
        next_id(self.exercises.iter().map(|e| e.id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    #[must_use]
    pub fn new(id: ExerciseID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sets: vec![],
        }
    }

    #[must_use]
    pub fn set(&self, id: SetID) -> Option<&ExerciseSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    pub fn next_set_id(&self) -> Result<SetID, IdsExhausted> {
        next_id(self.sets.iter().map(|s| s.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseSet {
    pub id: SetID,
    pub weight: Weight,
    pub reps: Reps,
}

/// Weight in pounds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl From<u32> for Reps {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Ok(Reps(parsed_value)),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be an integer")]
    ParseError,
}
