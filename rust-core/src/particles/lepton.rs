use serde::{Deserialize, Serialize};

use crate::dirac::dirac_spinor::{DiracSpinor, Helicity};
use crate::kinematics::four_vector::FourVector;
use crate::kinematics::lorentz_transform::LorentzTransform;
use crate::particles::spin_density::SpinDensityMatrix;

/// Charged lepton (or antilepton): four-momentum, mass and helicity density matrix.
///
/// The mass is the one used in propagators; the spinors take theirs from the
/// invariant of the momentum, so the two agree for on-shell input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lepton {
    momentum: FourVector,
    mass: f64,
    sdm: SpinDensityMatrix,
}

impl Lepton {
    /// Unpolarized lepton with the given momentum and mass.
    pub fn new(momentum: FourVector, mass: f64) -> Self {
        Self {
            momentum,
            mass,
            sdm: SpinDensityMatrix::unpolarized(),
        }
    }

    /// Lepton at rest.
    pub fn at_rest(mass: f64) -> Self {
        Self::new(FourVector::new(mass, 0.0, 0.0, 0.0), mass)
    }

    pub fn with_sdm(mut self, sdm: SpinDensityMatrix) -> Self {
        self.sdm = sdm;
        self
    }

    pub fn momentum(&self) -> &FourVector {
        &self.momentum
    }

    pub fn energy(&self) -> f64 {
        self.momentum.t()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn sdm(&self) -> &SpinDensityMatrix {
        &self.sdm
    }

    pub fn set_momentum(&mut self, momentum: FourVector) -> &mut Self {
        self.momentum = momentum;
        self
    }

    pub fn set_sdm(&mut self, sdm: SpinDensityMatrix) -> &mut Self {
        self.sdm = sdm;
        self
    }

    /// Particle spinors `[u(+1/2), u(-1/2)]`.
    pub fn spinors_u(&self) -> [DiracSpinor; 2] {
        Helicity::BOTH.map(|h| DiracSpinor::state_u(&self.momentum, h))
    }

    /// Antiparticle spinors `[v(+1/2), v(-1/2)]`.
    pub fn spinors_v(&self) -> [DiracSpinor; 2] {
        Helicity::BOTH.map(|h| DiracSpinor::state_v(&self.momentum, h))
    }

    pub fn transformed(&self, xform: &LorentzTransform) -> Lepton {
        Self {
            momentum: self.momentum.transformed(xform),
            ..*self
        }
    }
}
