// src/phase_cube/mod.rs

//! A self-dual complex phase lattice evolved over discrete time.
//!
//! Each site of an `N×N×N` grid over `[-1, 1]³` carries the phasor
//! `exp(i·(x + y + z)·φ)`, modulated over τ by `exp(i·φ·sin(2π·freq·t))` and
//! pinned by `exp(-i·φ)`. Every amplitude therefore has unit magnitude and only
//! phase evolves, which is what the coherence readouts visualize.

use crate::core::{GlitchError, TAU};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_PI_2;

/// Lattice parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseCubeConfig {
    /// Sites per axis.
    pub size: usize,
    /// Phase lock angle.
    pub phi: f64,
    /// Number of temporal steps.
    pub tau_steps: usize,
    /// Base oscillation frequency.
    pub freq: f64,
}

impl Default for PhaseCubeConfig {
    fn default() -> Self {
        Self {
            size: 6,
            phi: FRAC_PI_2,
            tau_steps: 200,
            freq: 1.0,
        }
    }
}

/// The evolved field, stored τ-major then x, y, z.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCube {
    config: PhaseCubeConfig,
    field: Vec<Complex<f64>>,
}

/// `n` evenly spaced samples over `[-1, 1]`; a single sample sits at `-1`.
fn linspace(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![-1.0];
    }
    (0..n).map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64).collect()
}

/// `n³`, or `None` on overflow.
fn site_count(n: usize) -> Option<usize> {
    n.checked_mul(n)?.checked_mul(n)
}

impl PhaseCube {
    /// Evolves the lattice described by `config`.
    pub fn generate(config: PhaseCubeConfig) -> Result<Self, GlitchError> {
        if config.size == 0 || config.tau_steps == 0 {
            return Err(GlitchError::InvalidConfig {
                message: format!(
                    "phase cube needs at least one site and one step (size {}, tau_steps {})",
                    config.size, config.tau_steps
                ),
            });
        }

        let n = config.size;
        let too_large = || GlitchError::InvalidConfig {
            message: format!("phase cube of size {n} over {} steps is too large", config.tau_steps),
        };
        let sites = site_count(n).ok_or_else(too_large)?;
        let cells = sites.checked_mul(config.tau_steps).ok_or_else(too_large)?;
        let axis = linspace(n);
        let mut base = Vec::with_capacity(sites);
        for &x in &axis {
            for &y in &axis {
                for &z in &axis {
                    base.push(Complex::new(0.0, (x + y + z) * config.phi).exp());
                }
            }
        }

        let pin = Complex::new(0.0, -config.phi).exp();
        let mut field = vec![Complex::zero(); cells];
        for (tau, slice) in field.chunks_mut(sites).enumerate() {
            let t = tau as f64 / config.tau_steps as f64;
            let drive = Complex::new(0.0, config.phi * (TAU * config.freq * t).sin()).exp() * pin;
            for (site, seed) in slice.iter_mut().zip(&base) {
                *site = seed * drive;
            }
        }

        Ok(Self { config, field })
    }

    pub fn config(&self) -> &PhaseCubeConfig {
        &self.config
    }

    /// `(tau_steps, size, size, size)`
    pub fn shape(&self) -> (usize, usize, usize, usize) {
        let n = self.config.size;
        (self.config.tau_steps, n, n, n)
    }

    /// Amplitude at step `tau` and site `(x, y, z)`, or `None` when out of range.
    pub fn at(&self, tau: usize, x: usize, y: usize, z: usize) -> Option<Complex<f64>> {
        let n = self.config.size;
        if tau >= self.config.tau_steps || x >= n || y >= n || z >= n {
            return None;
        }
        self.field.get(((tau * n + x) * n + y) * n + z).copied()
    }

    pub fn amplitude(&self, tau: usize, x: usize, y: usize, z: usize) -> Option<f64> {
        self.at(tau, x, y, z).map(|c| c.norm())
    }

    /// Phase in radians, in `(-π, π]`.
    pub fn phase(&self, tau: usize, x: usize, y: usize, z: usize) -> Option<f64> {
        self.at(tau, x, y, z).map(|c| c.arg())
    }

    /// Magnitude of the mean unit phasor over step `tau`, in `[0, 1]`.
    /// 1 means every site shares one phase.
    pub fn mean_coherence(&self, tau: usize) -> Option<f64> {
        if tau >= self.config.tau_steps {
            return None;
        }
        let sites = site_count(self.config.size)?;
        let slice = self.field.get(tau * sites..(tau + 1) * sites)?;
        let sum: Complex<f64> = slice
            .iter()
            .filter(|c| c.norm() > 0.0)
            .map(|c| *c / c.norm())
            .sum();
        Some(sum.norm() / sites as f64)
    }
}
