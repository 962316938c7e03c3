use std::fmt;

use nalgebra::Matrix2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// The five tree-level processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Process {
    Compton,
    Bremsstrahlung,
    PairProduction,
    TripletProduction,
    EeBremsstrahlung,
}

impl Process {
    pub const ALL: [Process; 5] = [
        Process::Compton,
        Process::Bremsstrahlung,
        Process::PairProduction,
        Process::TripletProduction,
        Process::EeBremsstrahlung,
    ];

    /// Power of the fine structure constant in the cross section.
    pub fn alpha_power(self) -> i32 {
        match self {
            Process::Compton => 2,
            _ => 3,
        }
    }

    /// Particle layout expected by [`CrossSectionEngine::evaluate`](crate::cross_section::CrossSectionEngine::evaluate).
    pub fn layout(self) -> &'static str {
        match self {
            Process::Compton => "photon, lepton, photon, lepton",
            Process::Bremsstrahlung => "lepton, lepton, photon",
            Process::PairProduction => "photon, lepton, lepton",
            Process::TripletProduction => "photon, lepton, lepton, lepton, lepton",
            Process::EeBremsstrahlung => "lepton, lepton, lepton, lepton, photon",
        }
    }

    /// Units of the returned differential cross section.
    pub fn units(self) -> &'static str {
        match self {
            Process::Compton => "ub/sr",
            _ => "ub/GeV^4/sr",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Process::Compton => "Compton",
            Process::Bremsstrahlung => "Bremsstrahlung",
            Process::PairProduction => "PairProduction",
            Process::TripletProduction => "TripletProduction",
            Process::EeBremsstrahlung => "eeBremsstrahlung",
        };
        write!(f, "{}", name)
    }
}

/// Diagnostic attached to a result whose spin-summed amplitude is not a
/// non-negative real number.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeWarning {
    pub process: Process,
    pub amp_squared: Complex64,
    /// Open photon-polarization block of the contraction (bremsstrahlung only).
    /// Diagonal entries should be real and non-negative, off-diagonal entries a
    /// conjugate pair.
    pub photon_block: Option<Matrix2<Complex64>>,
}

impl fmt::Display for AmplitudeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad {} amplitudes: ampSquared = {} should be real and non-negative",
            self.process, self.amp_squared
        )?;
        if let Some(block) = &self.photon_block {
            write!(
                f,
                "; photon block diagonal ({}, {}), off-diagonal ({}, {})",
                block[(0, 0)],
                block[(1, 1)],
                block[(0, 1)],
                block[(1, 0)]
            )?;
        }
        Ok(())
    }
}

/// A differential cross section together with the spin-summed amplitude it
/// came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    pub process: Process,
    /// `(hbar c)^2 alpha^n Re(amp_squared) * kinematic factor`
    pub value: f64,
    /// Density-matrix weighted `sum |M|^2` with the couplings stripped
    pub amp_squared: Complex64,
    pub warning: Option<AmplitudeWarning>,
}

impl CrossSection {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_sane(&self) -> bool {
        self.warning.is_none()
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:.6e} {}", self.process, self.value, self.process.units())
    }
}
