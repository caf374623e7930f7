//! Constants for the dice problem, defaults, and reference values.

/// Faces on each die.
pub const DIE_FACES: u32 = 6;

/// The face that takes a die out of play.
pub const TARGET_FACE: u32 = 6;

/// Default size of the dice pool.
pub const DEFAULT_NUMBER_OF_DICE: u32 = 50;

/// Default number of trials per simulation run.
pub const DEFAULT_TOTAL_NUMBER_OF_TRIES: u64 = 100_000;

/// Default number of fractional digits in the exact result.
pub const DEFAULT_DECIMALS: u32 = 50;

/// Default number of simulation runs to execute and time.
pub const DEFAULT_NUMBER_OF_RUNS: usize = 20;

/// Default allowed absolute deviation between the pooled estimate and the exact value.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Minimum progress change (10%) before a logging observer reports again.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.1;

/// Trials simulated by one rayon task, each with its own RNG.
pub const TRIALS_PER_CHUNK: u64 = 8_192;

/// Largest accepted trial count. Keeps the `u64` sum of rounds well clear of
/// overflow for any realistic pool size.
pub const MAX_TRIALS: u64 = u64::MAX / 1024;

/// Expected rounds for selected pool sizes, as published by Matthew M. Conroy
/// (rounded to 15 significant digits).
pub const REFERENCE_TABLE: [(u32, f64); 15] = [
    (1, 6.0),
    (2, 8.727_272_727_272_73),
    (3, 10.555_444_555_444_6),
    (4, 11.926_696_254_565_1),
    (5, 13.023_661_507_555_3),
    (6, 13.937_796_697_320_4),
    (7, 14.721_341_596_262_0),
    (8, 15.406_943_477_881_6),
    (9, 16.016_367_366_483_8),
    (10, 16.564_848_861_259_4),
    (15, 18.699_871_982_112_3),
    (20, 20.232_936_249_604_1),
    (30, 22.411_765_131_729_4),
    (40, 23.967_016_814_537_4),
    (50, 25.177_308_692_652_7),
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic or arithmetic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Simulated estimate did not match the exact value.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or argument.
    pub const ERROR_CONFIG: i32 = 4;
}
