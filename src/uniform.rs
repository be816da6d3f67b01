use rand::Rng;

/// A source of uniformly distributed fractions in `[0, 1)`.
pub trait UniformFraction {
    fn next_fraction(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformFraction for R {
    fn next_fraction(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
