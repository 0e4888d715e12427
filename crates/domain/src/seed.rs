use chrono::NaiveDate;

use crate::{Exercise, ExerciseSet, Reps, Weight, Workout};

struct SeedExercise {
    name: &'static str,
    sets: &'static [(f32, u32)],
}

struct SeedWorkout {
    date: (i32, u32, u32),
    name: &'static str,
    exercises: &'static [SeedExercise],
    supersets: &'static [u32],
}

const SAMPLE: &[SeedWorkout] = &[
    SeedWorkout {
        date: (2023, 2, 1),
        name: "Workout 1",
        exercises: &[
            SeedExercise {
                name: "Bench Press",
                sets: &[(200.0, 10), (205.0, 8)],
            },
            SeedExercise {
                name: "Squats",
                sets: &[(250.0, 10), (255.0, 8)],
            },
        ],
        supersets: &[1, 2],
    },
    SeedWorkout {
        date: (2023, 2, 2),
        name: "Workout 2",
        exercises: &[SeedExercise {
            name: "Deadlift",
            sets: &[(300.0, 10), (305.0, 8)],
        }],
        supersets: &[],
    },
    SeedWorkout {
        date: (2023, 2, 3),
        name: "Workout 3",
        exercises: &[SeedExercise {
            name: "Single Arm Dumbbell Row",
            sets: &[(30.0, 10), (30.0, 8)],
        }],
        supersets: &[],
    },
];

/// The workouts the store starts with. Identifiers are assigned in order, starting at 1 in every
/// collection.
#[must_use]
pub fn sample_workouts() -> Vec<Workout> {
    (1_u32..)
        .zip(SAMPLE)
        .map(|(id, w)| {
            let (year, month, day) = w.date;
            Workout {
                id: id.into(),
                date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
                name: w.name.to_string(),
                exercises: (1_u32..)
                    .zip(w.exercises)
                    .map(|(id, e)| Exercise {
                        id: id.into(),
                        name: e.name.to_string(),
                        sets: (1_u32..)
                            .zip(e.sets)
                            .map(|(id, (weight, reps))| ExerciseSet {
                                id: id.into(),
                                weight: Weight::new(*weight).unwrap_or_default(),
                                reps: Reps::from(*reps),
                            })
                            .collect(),
                    })
                    .collect(),
                supersets: w.supersets.iter().map(|id| (*id).into()).collect(),
            }
        })
        .collect()
}
