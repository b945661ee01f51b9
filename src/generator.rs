use rand_core::{impls, RngCore};

use crate::Params;

/// LCG based pseudo-random number generator with mutable state.
///
/// Every call to [`Generator::advance`] replaces the current value with
/// `(a * x + c) mod m` and returns it. [`Generator::reset`] overwrites the current
/// value without touching the coefficients.
#[derive(Clone, Debug)]
pub struct Generator {
    params: Params,
    x: u64,
}

impl Default for Generator {
    fn default() -> Self {
        let params = Params::default();

        Self {
            x: params.get_seed(),
            params,
        }
    }
}

impl Generator {
    pub fn new(params: Params) -> crate::Result<Self> {
        params.validate()?;
        log::debug!("generator created with {params:?}");

        Ok(Self {
            x: params.get_seed(),
            params,
        })
    }

    pub fn advance(&mut self) -> u64 {
        let prev = self.x;
        self.x = self.params.step(prev);
        log::trace!("generator step: {prev} -> {}", self.x);

        self.x
    }

    /// Replaces the current value. The next [`Generator::advance`] starts from `seed`.
    pub fn reset(&mut self, seed: u64) {
        log::debug!("generator reset: {} -> {seed}", self.x);
        self.x = seed;
    }

    pub fn state(&self) -> u64 {
        self.x
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl Iterator for Generator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.advance() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error;

    use crate::ErrorKind;

    #[test]
    fn test_advance() -> Result<(), Box<dyn error::Error>> {
        let params = Params::default().modulus(32).multiplier(9).increment(13).seed(11);
        let mut generator = Generator::new(params)?;

        for expect in [16, 29, 18, 15] {
            assert_eq!(expect, generator.advance());
            assert_eq!(expect, generator.state());
        }

        Ok(())
    }

    #[test]
    fn test_reset() -> Result<(), Box<dyn error::Error>> {
        let params = Params::default().modulus(32).multiplier(9).increment(13).seed(11);
        let mut generator = Generator::new(params)?;
        generator.advance();

        generator.reset(29);

        assert_eq!(29, generator.state());
        assert_eq!(&params, generator.params());
        assert_eq!(vec![18, 15, 20, 1], generator.take(4).collect::<Vec<_>>());

        Ok(())
    }

    #[test]
    fn test_reset_verbatim() -> Result<(), Box<dyn error::Error>> {
        let params = Params::default().modulus(32).multiplier(9).increment(13);
        let mut generator = Generator::new(params)?;

        // values outside the range are stored as-is and folded by the next step
        generator.reset(43);

        assert_eq!(43, generator.state());
        assert_eq!(params.step(43), generator.advance());

        Ok(())
    }

    #[test]
    fn test_default_matches_default_params() -> Result<(), Box<dyn error::Error>> {
        let mut a = Generator::default();
        let mut b = Generator::new(Params::default())?;

        assert_eq!(1212121, a.state());
        for _ in 0..32 {
            assert_eq!(a.advance(), b.advance());
        }

        Ok(())
    }

    #[test]
    fn test_range() -> Result<(), Box<dyn error::Error>> {
        for modulus in [1, 2, 7, 64, 1 << 48] {
            let params = Params::default().modulus(modulus);
            let generator = Generator::new(params)?;

            assert!(generator.take(256).all(|value| value < modulus));
        }

        Ok(())
    }

    #[test]
    fn test_zero_modulus() {
        let err = Generator::new(Params::default().modulus(0)).expect_err("expected error");

        assert_eq!(ErrorKind::ZeroModulus, err.kind());
    }

    #[test]
    fn test_rng_core() -> Result<(), Box<dyn error::Error>> {
        let params = Params::default().modulus(64).multiplier(5).increment(46).seed(36);
        let mut generator = Generator::new(params)?;

        assert_eq!(34, generator.next_u64());
        assert_eq!(24, generator.next_u32());

        let mut bytes = [0u8; 12];
        generator.fill_bytes(&mut bytes);

        // 38 fills the first 8 bytes, the low half of 44 fills the rest
        assert_eq!([38, 0, 0, 0, 0, 0, 0, 0, 44, 0, 0, 0], bytes);

        Ok(())
    }
}
