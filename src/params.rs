use crate::{Error, ErrorKind};

pub const DEFAULT_MODULUS: u64 = 1 << 48;
pub const DEFAULT_MULTIPLIER: u64 = 25214903917;
pub const DEFAULT_INCREMENT: u64 = 11;
pub const DEFAULT_SEED: u64 = 1212121;

/// Coefficients and starting value of a linear congruential generator.
///
/// Every option has a default, so only the coefficients a caller cares about need
/// to be set:
///
/// ```
/// use lcg::Params;
///
/// let params = Params::default().modulus(32).multiplier(9).increment(13).seed(11);
///
/// assert_eq!(16, params.step(11));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    modulus: u64,
    multiplier: u64,
    increment: u64,
    seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            multiplier: DEFAULT_MULTIPLIER,
            increment: DEFAULT_INCREMENT,
            seed: DEFAULT_SEED,
        }
    }
}

impl Params {
    pub fn modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    pub fn multiplier(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn increment(mut self, increment: u64) -> Self {
        self.increment = increment;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn get_modulus(&self) -> u64 {
        self.modulus
    }

    pub fn get_multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn get_increment(&self) -> u64 {
        self.increment
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.modulus == 0 {
            return Err(Error::new(
                ErrorKind::ZeroModulus,
                "modulus must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Computes `(a * x + c) mod m`.
    ///
    /// The product is taken in 128 bits: for any `u64` operands `a * x + c` is at most
    /// `2^128 - 2^64`, so the result is exact and always below the modulus.
    ///
    /// The modulus must be non-zero; [`Params::validate`] checks this and both
    /// generator front-ends call it on construction.
    pub fn step(&self, x: u64) -> u64 {
        // x[n+1] = (a * x[n] + c) % m
        let next = (self.multiplier as u128 * x as u128 + self.increment as u128)
            % self.modulus as u128;

        next as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Params::default();

        assert_eq!(1 << 48, params.get_modulus());
        assert_eq!(25214903917, params.get_multiplier());
        assert_eq!(11, params.get_increment());
        assert_eq!(1212121, params.get_seed());
    }

    #[test]
    fn test_step_small() {
        let params = Params::default().modulus(32).multiplier(9).increment(13);
        let cases = [(11, 16), (16, 29), (29, 18), (18, 15), (15, 20), (20, 1)];

        for (x, expect) in cases {
            assert_eq!(expect, params.step(x));
        }
    }

    #[test]
    fn test_step_no_overflow() {
        let params = Params::default();
        let x = DEFAULT_MODULUS - 1;
        let expect = ((DEFAULT_MULTIPLIER as u128 * x as u128 + DEFAULT_INCREMENT as u128)
            % DEFAULT_MODULUS as u128) as u64;

        assert_eq!(expect, params.step(x));

        let params = Params::default()
            .modulus(u64::MAX)
            .multiplier(u64::MAX)
            .increment(u64::MAX);

        assert!(params.step(u64::MAX) < u64::MAX);
    }

    #[test]
    fn test_validate_zero_modulus() {
        let err = Params::default()
            .modulus(0)
            .validate()
            .expect_err("zero modulus should be rejected");

        assert_eq!(ErrorKind::ZeroModulus, err.kind());
        assert!(Params::default().modulus(1).validate().is_ok());
    }
}
