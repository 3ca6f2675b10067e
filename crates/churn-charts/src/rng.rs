// File: crates/churn-charts/src/rng.rs
// Summary: Seeded RNG for the synthetic chart samples.
//
// Every random draw in the generator goes through `SampleRng` so a given
// seed always yields the same survival noise and timing sample.

use std::f64::consts::TAU;

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
pub struct SampleRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
    /// Second Box-Muller deviate, returned by the next `standard_normal`.
    spare: Option<f64>,
}

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        Self { name: "unnamed", inner: Pcg64Mcg::seed_from_u64(seed), spare: None }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Standard normal deviate (Box-Muller, both outputs used).
    pub fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        // u1 in (0, 1] keeps ln finite.
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        let (s, c) = (TAU * u2).sin_cos();
        self.spare = Some(r * s);
        r * c
    }

    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }

    /// `n` draws from N(mean, std_dev).
    pub fn normals(&mut self, mean: f64, std_dev: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal(mean, std_dev)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SampleRng::new(42);
        let mut b = SampleRng::new(42);
        assert_eq!(a.normals(0.0, 1.0, 16), b.normals(0.0, 1.0, 16));
    }

    #[test]
    fn streams_carry_their_name() {
        assert_eq!(SampleRng::new(1).name, "unnamed");
        assert_eq!(SampleRng::new(1).with_name("timing").name, "timing");
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut rng = SampleRng::new(7);
        assert!((0..1000).map(|_| rng.next_f64()).all(|u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn normal_moments_are_close() {
        let mut rng = SampleRng::new(42).with_name("moments");
        let xs = rng.normals(93.0, 3.0, 20_000);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
        assert!((mean - 93.0).abs() < 0.1, "mean {mean}");
        assert!((var.sqrt() - 3.0).abs() < 0.1, "std {}", var.sqrt());
    }
}
