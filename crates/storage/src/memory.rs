use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use liftlog_app::{self as app, log};
use liftlog_domain::{
    self as domain, ReadError, StorageError, UpdateError, upsert_workout_in_place,
};

/// Workout store owned by the running application.
///
/// Replacing a workout is the only write and happens under the store's lock.
pub struct Workouts {
    workouts: Mutex<Vec<domain::Workout>>,
}

impl Workouts {
    #[must_use]
    pub fn new(workouts: Vec<domain::Workout>) -> Self {
        Self {
            workouts: Mutex::new(workouts),
        }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(domain::sample_workouts())
    }
}

impl Default for Workouts {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl domain::WorkoutRepository for Workouts {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, ReadError> {
        Ok(self
            .workouts
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .clone())
    }

    fn replace_workout(&self, workout: domain::Workout) -> Result<domain::Workout, UpdateError> {
        let mut workouts = self.workouts.lock().map_err(|_| StorageError::Poisoned)?;
        upsert_workout_in_place(&mut workouts, workout.clone());
        Ok(workout)
    }
}

#[derive(Default)]
pub struct Settings {
    settings: Mutex<app::Settings>,
}

impl Settings {
    #[must_use]
    pub fn new(settings: app::Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl app::SettingsRepository for Settings {
    fn read_settings(&self) -> Result<app::Settings, app::SettingsError> {
        self.settings
            .lock()
            .map(|settings| *settings)
            .map_err(|err| app::SettingsError::Unknown(err.to_string()))
    }

    fn write_settings(&self, settings: app::Settings) -> Result<(), app::SettingsError> {
        *self
            .settings
            .lock()
            .map_err(|err| app::SettingsError::Unknown(err.to_string()))? = settings;
        Ok(())
    }
}

/// Most recent log entries. Clones share the same entries.
#[derive(Clone, Default)]
pub struct Log {
    entries: Arc<Mutex<VecDeque<log::Entry>>>,
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        log::push_entry(&mut entries, entry);
        Ok(())
    }
}
