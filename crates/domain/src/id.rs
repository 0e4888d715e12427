use derive_more::{Deref, Display, Into};

#[derive(
    Deref, Debug, Display, Default, Into, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct WorkoutID(u32);

impl From<u32> for WorkoutID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(
    Deref, Debug, Display, Default, Into, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct ExerciseID(u32);

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(
    Deref, Debug, Display, Default, Into, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct SetID(u32);

impl SetID {
    /// Interprets a raw identifier where values below 1 mean that no set was given.
    #[must_use]
    pub fn from_sentinel(value: i64) -> Option<Self> {
        u32::try_from(value).ok().filter(|v| *v > 0).map(Self)
    }
}

impl From<u32> for SetID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no identifier left after {0}")]
pub struct IdsExhausted(pub u32);

/// Returns the identifier following the largest one in `ids`, or 1 if there is none.
///
/// Identifiers are scoped to their collection, so callers pass the identifiers of a single
/// collection only (the workouts of a store, the exercises of a workout or the sets of an
/// exercise).
pub fn next_id<T>(ids: impl IntoIterator<Item = T>) -> Result<T, IdsExhausted>
where
    T: Copy + Ord + Into<u32> + From<u32>,
{
    match ids.into_iter().max().map(Into::<u32>::into) {
        None => Ok(T::from(1)),
        Some(max) => max.checked_add(1).map(T::from).ok_or(IdsExhausted(max)),
    }
}
