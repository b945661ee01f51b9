use crate::Params;

/// Lazy, restartable LCG sequence.
///
/// The sequence suspends after every value it yields. When resumed, the value that
/// seeds the following computation is either the value just yielded or one supplied
/// by the caller:
///
/// ```
/// use lcg::{Params, Sequence};
///
/// let params = Params::default().modulus(64).multiplier(5).increment(46).seed(36);
/// let mut seq = Sequence::new(params)?;
///
/// assert_eq!(vec![34, 24, 38, 44], seq.by_ref().take(4).collect::<Vec<_>>());
/// assert_eq!(38, seq.send(24));
/// assert_eq!(Some(44), seq.next());
/// # Ok::<(), lcg::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Sequence {
    params: Params,
    x: u64,
    yielded: Option<u64>,
}

impl Default for Sequence {
    fn default() -> Self {
        let params = Params::default();

        Self {
            x: params.get_seed(),
            yielded: None,
            params,
        }
    }
}

impl Sequence {
    pub fn new(params: Params) -> crate::Result<Self> {
        params.validate()?;
        log::debug!("sequence created with {params:?}");

        Ok(Self {
            x: params.get_seed(),
            yielded: None,
            params,
        })
    }

    /// Resumes the sequence and returns the next value.
    ///
    /// With `None` the computation continues from the last yielded value, or from the
    /// seed on the first call. With `Some(value)` the state is replaced by `value` and
    /// the sequence continues from there, returning `(a * value + c) mod m`.
    pub fn resume(&mut self, value: Option<u64>) -> u64 {
        match (value, self.yielded.take()) {
            (Some(value), _) => {
                log::debug!("sequence override: {} -> {value}", self.x);
                self.x = value;
            },
            (None, Some(yielded)) => self.x = yielded,
            (None, None) => (),
        }

        let next = self.params.step(self.x);
        log::trace!("sequence step: {} -> {next}", self.x);
        self.yielded = Some(next);

        next
    }

    /// Replaces the state with `value` and yields the value computed from it.
    pub fn send(&mut self, value: u64) -> u64 {
        self.resume(Some(value))
    }

    /// The value the next computation starts from.
    pub fn state(&self) -> u64 {
        self.yielded.unwrap_or(self.x)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.resume(None))
    }
}
