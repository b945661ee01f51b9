//! Deterministic pseudo-random integer sequences from a linear congruential generator,
//! `x[n+1] = (a * x[n] + c) mod m`.
//!
//! The same recurrence is exposed two ways: [`Generator`] holds the state and is
//! stepped and reset explicitly, [`Sequence`] is a lazy producer whose state can be
//! overridden every time it is resumed.

use std::result;

pub use error::{Error, ErrorKind};
pub use generator::Generator;
pub use params::Params;
pub use sequence::Sequence;
pub use transcript::{
    render, run_all, transcripts, Interface, Mismatch, Outcome, Record, Report, Step, Transcript,
};

mod error;
mod generator;
mod params;
mod sequence;
mod transcript;

pub type Result<T> = result::Result<T, Error>;
