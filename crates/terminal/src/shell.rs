use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use log::{debug, info};

use liftlog_app::{self as app, log as app_log};
use liftlog_domain::{
    self as domain, ActionError, DeleteTarget, EditSession, ReadError, UpdateError, Workout,
};

use crate::command::{Command, CommandError, HELP};

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Update(#[from] UpdateError),
    #[error(transparent)]
    Settings(#[from] app::SettingsError),
    #[error(transparent)]
    Log(#[from] app_log::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("no workout is being edited")]
    NoSession,
    #[error("workout {0} is still being edited, save or cancel it first")]
    SessionOpen(domain::WorkoutID),
    #[error("nothing to confirm")]
    NothingToConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive front end for browsing and editing workouts.
///
/// At most one workout is edited at a time. Deletions wait for a confirmation if the settings
/// ask for it.
pub struct Shell<D, S, L> {
    workouts: D,
    settings: S,
    log: L,
    today: NaiveDate,
    session: Option<EditSession>,
    pending_delete: Option<DeleteTarget>,
}

impl<D, S, L> Shell<D, S, L>
where
    D: domain::WorkoutService,
    S: app::SettingsService,
    L: app_log::Service,
{
    pub fn new(workouts: D, settings: S, log: L, today: NaiveDate) -> Self {
        Self {
            workouts,
            settings,
            log,
            today,
            session: None,
            pending_delete: None,
        }
    }

    /// Reads commands line by line until the input ends or a quit command is given.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        self.prompt(output)?;
        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>().map_err(ShellError::from) {
                Err(ShellError::Command(CommandError::Empty)) => {}
                Err(err) => writeln!(output, "error: {err}")?,
                Ok(command) => match self.execute(command, output) {
                    Ok(Flow::Quit) => return Ok(()),
                    Ok(Flow::Continue) => {}
                    Err(ShellError::Io(err)) => return Err(err),
                    Err(err) => {
                        debug!("{}: {err}", line.trim());
                        writeln!(output, "error: {err}")?;
                    }
                },
            }
            self.prompt(output)?;
        }
        Ok(())
    }

    fn prompt(&self, output: &mut impl Write) -> io::Result<()> {
        match &self.session {
            Some(session) => write!(
                output,
                "liftlog[{}{}]> ",
                session.workout().id,
                if session.is_modified() { "*" } else { "" }
            )?,
            None => write!(output, "liftlog> ")?,
        }
        output.flush()
    }

    pub fn execute(
        &mut self,
        command: Command,
        output: &mut impl Write,
    ) -> Result<Flow, ShellError> {
        let pending_delete = self.pending_delete.take();

        match command {
            Command::List => self.list(output)?,
            Command::Show(id) => render_workout(&self.workouts.get_workout(id)?, false, output)?,
            Command::New => {
                self.ensure_no_session()?;
                let session = self.workouts.create_workout(self.today)?;
                writeln!(output, "Editing new workout {}", session.workout().id)?;
                render_workout(session.workout(), true, output)?;
                self.session = Some(session);
            }
            Command::Edit(id) => {
                self.ensure_no_session()?;
                let session = self.workouts.edit_workout(id)?;
                render_workout(session.workout(), true, output)?;
                self.session = Some(session);
            }
            Command::Delete {
                exercise_id,
                set_id,
            } => {
                let target = domain::resolve_delete_target(exercise_id, set_id);
                if self.session.is_none() {
                    return Err(ShellError::NoSession);
                }
                if self.settings.get_settings()?.confirm_delete {
                    match target {
                        DeleteTarget::Exercise { exercise_id } => {
                            writeln!(output, "Delete exercise {exercise_id}? (yes/no)")?;
                        }
                        DeleteTarget::Set {
                            exercise_id,
                            set_id,
                        } => {
                            writeln!(
                                output,
                                "Delete set {set_id} of exercise {exercise_id}? (yes/no)"
                            )?;
                        }
                    }
                    self.pending_delete = Some(target);
                } else {
                    self.delete(target, output)?;
                }
            }
            Command::Confirm(confirmed) => {
                let target = pending_delete.ok_or(ShellError::NothingToConfirm)?;
                if confirmed {
                    self.delete(target, output)?;
                } else {
                    writeln!(output, "Nothing deleted")?;
                }
            }
            Command::Save => {
                let session = self.session.as_ref().ok_or(ShellError::NoSession)?;
                let workout = session.clone().save(&self.workouts)?;
                self.session = None;
                info!("saved workout {}", workout.id);
                writeln!(output, "Saved {}", domain::format_workout_title(&workout))?;
            }
            Command::Cancel => {
                self.session.take().ok_or(ShellError::NoSession)?.cancel();
                writeln!(output, "Changes discarded")?;
            }
            Command::Details(show_details) => {
                let settings = self.settings.get_settings()?;
                self.settings.set_settings(app::Settings {
                    show_details,
                    ..settings
                })?;
            }
            Command::Log => self.print_log(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::AddExercise(_)
            | Command::RenameExercise(..)
            | Command::AddSet { .. }
            | Command::UpdateSet { .. }
            | Command::Superset(_)
            | Command::Unsuperset(_) => {
                let session = self.session_mut()?;
                if let Some(action) = command.action(|id| session.next_set_id(id))? {
                    render_workout(session.apply(action)?, true, output)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn ensure_no_session(&self) -> Result<(), ShellError> {
        match &self.session {
            Some(session) => Err(ShellError::SessionOpen(session.workout().id)),
            None => Ok(()),
        }
    }

    fn session_mut(&mut self) -> Result<&mut EditSession, ShellError> {
        self.session.as_mut().ok_or(ShellError::NoSession)
    }

    fn delete(&mut self, target: DeleteTarget, output: &mut impl Write) -> Result<(), ShellError> {
        let workout = self.session_mut()?.delete(target)?;
        render_workout(workout, true, output)?;
        Ok(())
    }

    fn list(&self, output: &mut impl Write) -> Result<(), ShellError> {
        let workouts = self.workouts.get_workouts()?;
        let show_details = self.settings.get_settings()?.show_details;

        if workouts.is_empty() {
            writeln!(output, "No workouts")?;
        }

        for workout in &workouts {
            let title = domain::format_workout_title(workout);
            if show_details {
                writeln!(output, "{:>3}  {title}", *workout.id)?;
                render_rows(workout, false, output)?;
            } else {
                let desc = domain::format_workout_short_desc(workout);
                if desc.is_empty() {
                    writeln!(output, "{:>3}  {title}", *workout.id)?;
                } else {
                    writeln!(output, "{:>3}  {title}: {desc}", *workout.id)?;
                }
            }
        }

        Ok(())
    }

    fn print_log(&self, output: &mut impl Write) -> Result<(), ShellError> {
        let entries = self.log.get_log_entries()?;

        if entries.is_empty() {
            writeln!(output, "No log messages")?;
        }

        for entry in entries.iter().rev() {
            writeln!(output, "{} {:<5} {}", entry.time, entry.level, entry.message)?;
        }

        Ok(())
    }
}

fn render_workout(workout: &Workout, with_sets: bool, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{}", domain::format_workout_title(workout))?;
    if workout.exercises.is_empty() {
        return writeln!(output, "       (no exercises)");
    }
    render_rows(workout, with_sets, output)
}

fn render_rows(workout: &Workout, with_sets: bool, output: &mut impl Write) -> io::Result<()> {
    for (exercise, row) in workout.exercises.iter().zip(domain::workout_rows(workout)) {
        let line = format!(
            "{:>5}  {:<24} {:<2} {}",
            *exercise.id, row.exercise, row.superset, row.sets
        );
        writeln!(output, "{}", line.trim_end())?;
        if with_sets {
            for set in &exercise.sets {
                writeln!(output, "{:>9}. {}", *set.id, domain::format_set(set))?;
            }
        }
    }
    Ok(())
}
