pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    /// Evaluates the curve on `n` evenly spaced points covering `[lo, hi]`,
    /// both endpoints included. `n` must be at least 2.
    fn sample(&self, lo: f64, hi: f64, n: usize) -> Vec<(f64, f64)> {
        assert!(n >= 2, "a sample grid needs at least both endpoints");
        let step = (hi - lo) / ((n - 1) as f64);
        (0..n)
            .map(|i| {
                let x = lo + step * (i as f64);
                (x, self.value(x))
            })
            .collect()
    }
}
