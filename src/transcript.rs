use std::{
    fmt,
    io::{self, Write},
};

use crate::{Error, ErrorKind, Generator, Params, Sequence};

/// Which front-end a transcript drives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interface {
    Generator,
    Sequence,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// Pull the next value and compare it to `expected`.
    Next { expected: u64 },
    /// Overwrite the generator's current value.
    Reset { seed: u64 },
    /// Override the sequence's state and compare the value it yields.
    Send { value: u64, expected: u64 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next { .. } => write!(f, "next()"),
            Step::Reset { seed } => write!(f, "reset({seed})"),
            Step::Send { value, .. } => write!(f, "send({value})"),
        }
    }
}

impl Step {
    pub fn expected(&self) -> Option<u64> {
        match self {
            Step::Next { expected } | Step::Send { expected, .. } => Some(*expected),
            Step::Reset { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    pub name: &'static str,
    pub params: Params,
    pub interface: Interface,
    pub steps: Vec<Step>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub step: usize,
    pub expected: u64,
    pub actual: u64,
}

/// What a single step produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Record {
    pub step: Step,
    pub actual: Option<u64>,
}

impl Record {
    pub fn is_match(&self) -> bool {
        self.step.expected() == self.actual
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub name: &'static str,
    pub params: Params,
    pub records: Vec<Record>,
    pub mismatches: Vec<Mismatch>,
    /// Set when the transcript could not be run to the end.
    pub error: Option<Error>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty() && self.error.is_none()
    }
}

enum Driver {
    Generator(Generator),
    Sequence(Sequence),
}

impl Driver {
    fn new(interface: Interface, params: Params) -> crate::Result<Self> {
        match interface {
            Interface::Generator => Ok(Driver::Generator(Generator::new(params)?)),
            Interface::Sequence => Ok(Driver::Sequence(Sequence::new(params)?)),
        }
    }

    fn apply(&mut self, step: Step) -> crate::Result<Option<u64>> {
        match (self, step) {
            (Driver::Generator(generator), Step::Next { .. }) => Ok(Some(generator.advance())),
            (Driver::Generator(generator), Step::Reset { seed }) => {
                generator.reset(seed);
                Ok(None)
            },
            (Driver::Sequence(seq), Step::Next { .. }) => Ok(Some(seq.resume(None))),
            (Driver::Sequence(seq), Step::Send { value, .. }) => Ok(Some(seq.send(value))),
            (Driver::Generator(_), step @ Step::Send { .. }) => Err(Error::new(
                ErrorKind::InvalidStep,
                format!("`{step}` is not supported by a generator"),
            )),
            (Driver::Sequence(_), step @ Step::Reset { .. }) => Err(Error::new(
                ErrorKind::InvalidStep,
                format!("`{step}` is not supported by a sequence"),
            )),
        }
    }
}

impl Transcript {
    /// Runs every step, recording mismatches as it goes. An error stops this transcript
    /// and is kept on the returned outcome.
    pub fn run(&self) -> Outcome {
        let mut outcome = Outcome {
            name: self.name,
            params: self.params,
            records: Vec::with_capacity(self.steps.len()),
            mismatches: Vec::new(),
            error: None,
        };

        if let Err(e) = self.run_steps(&mut outcome) {
            log::warn!("{}: aborted: {e}", self.name);
            outcome.error = Some(e);
        }

        log::info!(
            "{}: {} steps, {} failed",
            self.name,
            outcome.records.len(),
            outcome.mismatches.len()
        );

        outcome
    }

    fn run_steps(&self, outcome: &mut Outcome) -> crate::Result<()> {
        let mut driver = Driver::new(self.interface, self.params)?;

        for (i, step) in self.steps.iter().copied().enumerate() {
            let actual = driver.apply(step)?;

            if let (Some(expected), Some(actual)) = (step.expected(), actual) {
                if expected != actual {
                    log::warn!(
                        "{}: step {i} `{step}` expected {expected}, got {actual}",
                        self.name
                    );
                    outcome.mismatches.push(Mismatch {
                        step: i,
                        expected,
                        actual,
                    });
                }
            }

            outcome.records.push(Record { step, actual });
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn attempted(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.records.len()).sum()
    }

    /// Mismatched steps plus transcripts that stopped on an error.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| outcome.mismatches.len() + usize::from(outcome.error.is_some()))
            .sum()
    }

    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| outcome.records.len() - outcome.mismatches.len())
            .sum()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_success)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Runs every transcript. A failure in one transcript does not stop the others.
pub fn run_all(transcripts: &[Transcript]) -> Report {
    Report {
        outcomes: transcripts.iter().map(Transcript::run).collect(),
    }
}

/// Writes a step-by-step account of `report` followed by a summary.
pub fn render<W: Write>(report: &Report, w: &mut W) -> io::Result<()> {
    for outcome in &report.outcomes {
        writeln!(
            w,
            "{} (m={}, a={}, c={}, seed={})",
            outcome.name,
            outcome.params.get_modulus(),
            outcome.params.get_multiplier(),
            outcome.params.get_increment(),
            outcome.params.get_seed(),
        )?;

        for record in &outcome.records {
            writeln!(w, "Trying:\n    {}", record.step)?;

            match (record.step.expected(), record.actual) {
                (Some(expected), _) if record.is_match() => {
                    writeln!(w, "Expecting:\n    {expected}\nok")?;
                },
                (Some(expected), Some(actual)) => {
                    writeln!(w, "Expecting:\n    {expected}\nFailed, got:\n    {actual}")?;
                },
                _ => writeln!(w, "Expecting nothing\nok")?,
            }
        }

        if let Some(e) = &outcome.error {
            writeln!(w, "Error:\n    {e}")?;
        }
    }

    let succeeded = report.outcomes.iter().filter(|o| o.is_success()).count();
    writeln!(
        w,
        "{succeeded} items passed all tests, {} failed",
        report.outcomes.len() - succeeded
    )?;
    writeln!(
        w,
        "{} tests in {} items.\n{} passed and {} failed.",
        report.attempted(),
        report.outcomes.len(),
        report.passed(),
        report.failed(),
    )?;

    if report.is_success() {
        writeln!(w, "Test passed.")
    } else {
        writeln!(w, "***Test Failed*** {} failures.", report.failed())
    }
}

/// The embedded example transcripts for both front-ends.
pub fn transcripts() -> Vec<Transcript> {
    use Step::{Next, Reset};

    vec![
        Transcript {
            name: "generator",
            params: Params::default().modulus(32).multiplier(9).increment(13).seed(11),
            interface: Interface::Generator,
            steps: vec![
                Next { expected: 16 },
                Next { expected: 29 },
                Next { expected: 18 },
                Next { expected: 15 },
                Reset { seed: 29 },
                Next { expected: 18 },
                Next { expected: 15 },
                Next { expected: 20 },
                Next { expected: 1 },
            ],
        },
        Transcript {
            name: "sequence",
            params: Params::default().modulus(64).multiplier(5).increment(46).seed(36),
            interface: Interface::Sequence,
            steps: vec![
                Next { expected: 34 },
                Next { expected: 24 },
                Next { expected: 38 },
                Next { expected: 44 },
                Step::Send {
                    value: 24,
                    expected: 38,
                },
                Next { expected: 44 },
                Next { expected: 10 },
                Next { expected: 32 },
                Next { expected: 14 },
            ],
        },
    ]
}
