use std::str::FromStr;

use liftlog_domain::{
    self as domain, ActionError, ActionKind, ExerciseID, Reps, RepsError, SetID, Weight,
    WeightError, WorkoutID,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Show(WorkoutID),
    New,
    Edit(WorkoutID),
    AddExercise(String),
    RenameExercise(ExerciseID, String),
    AddSet {
        exercise_id: ExerciseID,
        weight: Weight,
        reps: Reps,
    },
    UpdateSet {
        exercise_id: ExerciseID,
        set_id: SetID,
        weight: Weight,
        reps: Reps,
    },
    Delete {
        exercise_id: ExerciseID,
        set_id: Option<SetID>,
    },
    Confirm(bool),
    Superset(ExerciseID),
    Unsuperset(ExerciseID),
    Save,
    Cancel,
    Details(bool),
    Log,
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("invalid {0}: {1}")]
    InvalidID(&'static str, String),
    #[error("expected on or off: {0}")]
    InvalidSwitch(String),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Action(#[from] ActionError),
}

pub const HELP: &str = "\
list                                  show all workouts
show <workout>                        show a workout
new                                   start a new workout
edit <workout>                        edit a workout
add-exercise <name>                   add an exercise
rename <exercise> <name>              rename an exercise
add-set <exercise> <weight> <reps>    add a set
update-set <exercise> <set> <weight> <reps>
                                      change a set
delete <exercise> [<set>]             delete an exercise or one of its sets
superset <exercise>                   flag an exercise as part of a superset
unsuperset <exercise>                 remove the superset flag
save                                  store the edited workout
cancel                                discard the edited workout
action <kind> <arguments>             dispatch an action by name
details on|off                        list workouts with or without details
log                                   show recent log messages
help                                  show this help
quit                                  exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let mut args = Arguments(rest.split_whitespace());

        let command = match verb {
            "" => return Err(CommandError::Empty),
            "list" | "ls" => Command::List,
            "show" => Command::Show(args.id("workout")?),
            "new" => Command::New,
            "edit" => Command::Edit(args.id("workout")?),
            "add-exercise" => Command::AddExercise(args.rest("exercise name")?),
            "rename" => Command::RenameExercise(args.id("exercise")?, args.rest("exercise name")?),
            "add-set" => args.add_set()?,
            "update-set" => args.update_set()?,
            "delete" | "rm" => Command::Delete {
                exercise_id: args.id("exercise")?,
                set_id: args.optional_set_id()?,
            },
            "yes" | "y" => Command::Confirm(true),
            "no" | "n" => Command::Confirm(false),
            "superset" => Command::Superset(args.id("exercise")?),
            "unsuperset" => Command::Unsuperset(args.id("exercise")?),
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "details" => Command::Details(args.switch()?),
            "log" => Command::Log,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "action" => match ActionKind::parse(args.next("action kind")?)? {
                ActionKind::AddExercise => Command::AddExercise(args.rest("exercise name")?),
                ActionKind::UpdateExerciseName => {
                    Command::RenameExercise(args.id("exercise")?, args.rest("exercise name")?)
                }
                ActionKind::DeleteExercise => Command::Delete {
                    exercise_id: args.id("exercise")?,
                    set_id: None,
                },
                ActionKind::AddExerciseSet => args.add_set()?,
                ActionKind::UpdateExerciseSet => args.update_set()?,
                ActionKind::DeleteExerciseSet => Command::Delete {
                    exercise_id: args.id("exercise")?,
                    set_id: Some(args.id("set")?),
                },
                ActionKind::AddSuperset => Command::Superset(args.id("exercise")?),
                ActionKind::DeleteSuperset => Command::Unsuperset(args.id("exercise")?),
            },
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        args.finish()?;

        Ok(command)
    }
}

struct Arguments<'a>(std::str::SplitWhitespace<'a>);

impl<'a> Arguments<'a> {
    fn next(&mut self, name: &'static str) -> Result<&'a str, CommandError> {
        self.0.next().ok_or(CommandError::MissingArgument(name))
    }

    fn id<T: From<u32>>(&mut self, name: &'static str) -> Result<T, CommandError> {
        let value = self.next(name)?;
        value
            .parse::<u32>()
            .map(T::from)
            .map_err(|_| CommandError::InvalidID(name, value.to_string()))
    }

    fn add_set(&mut self) -> Result<Command, CommandError> {
        Ok(Command::AddSet {
            exercise_id: self.id("exercise")?,
            weight: Weight::try_from(self.next("weight")?)?,
            reps: Reps::try_from(self.next("reps")?)?,
        })
    }

    fn update_set(&mut self) -> Result<Command, CommandError> {
        Ok(Command::UpdateSet {
            exercise_id: self.id("exercise")?,
            set_id: self.id("set")?,
            weight: Weight::try_from(self.next("weight")?)?,
            reps: Reps::try_from(self.next("reps")?)?,
        })
    }

    fn optional_set_id(&mut self) -> Result<Option<SetID>, CommandError> {
        match self.0.next() {
            None => Ok(None),
            Some(value) => value
                .parse::<i64>()
                .map(SetID::from_sentinel)
                .map_err(|_| CommandError::InvalidID("set", value.to_string())),
        }
    }

    fn rest(&mut self, name: &'static str) -> Result<String, CommandError> {
        let rest = self.0.by_ref().collect::<Vec<_>>().join(" ");
        if rest.is_empty() {
            return Err(CommandError::MissingArgument(name));
        }
        Ok(rest)
    }

    fn switch(&mut self) -> Result<bool, CommandError> {
        match self.next("on or off")? {
            "on" => Ok(true),
            "off" => Ok(false),
            value => Err(CommandError::InvalidSwitch(value.to_string())),
        }
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.0.next() {
            None => Ok(()),
            Some(value) => Err(CommandError::UnexpectedArgument(value.to_string())),
        }
    }
}

impl Command {
    /// The action this command applies to the workout being edited, if any.
    pub fn action(
        &self,
        set_id: impl FnOnce(ExerciseID) -> Result<SetID, ActionError>,
    ) -> Result<Option<domain::WorkoutAction>, ActionError> {
        Ok(Some(match self {
            Command::AddExercise(name) => domain::WorkoutAction::AddExercise { name: name.clone() },
            Command::RenameExercise(exercise_id, name) => {
                domain::WorkoutAction::UpdateExerciseName {
                    exercise_id: *exercise_id,
                    name: name.clone(),
                }
            }
            Command::AddSet {
                exercise_id,
                weight,
                reps,
            } => domain::WorkoutAction::AddExerciseSet {
                exercise_id: *exercise_id,
                set: domain::ExerciseSet {
                    id: set_id(*exercise_id)?,
                    weight: *weight,
                    reps: *reps,
                },
            },
            Command::UpdateSet {
                exercise_id,
                set_id,
                weight,
                reps,
            } => domain::WorkoutAction::UpdateExerciseSet {
                exercise_id: *exercise_id,
                set: domain::ExerciseSet {
                    id: *set_id,
                    weight: *weight,
                    reps: *reps,
                },
            },
            Command::Superset(exercise_id) => domain::WorkoutAction::AddSuperset {
                exercise_id: *exercise_id,
            },
            Command::Unsuperset(exercise_id) => domain::WorkoutAction::DeleteSuperset {
                exercise_id: *exercise_id,
            },
            _ => return Ok(None),
        }))
    }
}
