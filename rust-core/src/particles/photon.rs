use log::error;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::dirac::dirac_spinor::Helicity;
use crate::kinematics::four_vector::FourVector;
use crate::kinematics::four_vector_complex::FourVectorComplex;
use crate::kinematics::lorentz_transform::LorentzTransform;
use crate::particles::spin_density::SpinDensityMatrix;

/// Real photon: four-momentum plus a polarization density matrix.
///
/// The polarization basis is linear and tied to the momentum direction in the
/// frame the momentum is expressed in: `eps(0) = theta-hat`, `eps(1) = phi-hat`,
/// both with zero time component. For a photon along +z these are x-hat and
/// y-hat. The density matrix is expressed in this basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Photon {
    momentum: FourVector,
    sdm: SpinDensityMatrix,
}

impl Photon {
    /// Unpolarized photon with the given momentum.
    pub fn new(momentum: FourVector) -> Self {
        Self {
            momentum,
            sdm: SpinDensityMatrix::unpolarized(),
        }
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

    /// Linear polarization vector `j` (0 = theta-hat, 1 = phi-hat).
    ///
    /// Any other index is reported on the error log and yields `eps(0)`.
    pub fn eps(&self, j: usize) -> FourVectorComplex {
        let direction = self.momentum.three_vector();
        let (sin_theta, cos_theta) = direction.theta().sin_cos();
        let (sin_phi, cos_phi) = direction.phi().sin_cos();
        let real = match j {
            0 => FourVector::new(0.0, cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta),
            1 => FourVector::new(0.0, -sin_phi, cos_phi, 0.0),
            _ => {
                error!("Photon::eps: polarization index {} out of range", j);
                FourVector::new(0.0, cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta)
            }
        };
        FourVectorComplex::from_real(&real)
    }

    /// Complex conjugate of `eps(j)`, used for final-state photons.
    pub fn eps_star(&self, j: usize) -> FourVectorComplex {
        self.eps(j).conj()
    }

    /// Both basis vectors, indexed like the amplitude tensor axis of this photon.
    pub fn polarization_basis(&self) -> [FourVectorComplex; 2] {
        [self.eps(0), self.eps(1)]
    }

    /// Circular polarization vector of definite helicity,
    /// `eps(+/-) = -/+ (eps(0) +/- i eps(1)) / sqrt(2)`.
    pub fn circular_eps(&self, helicity: Helicity) -> FourVectorComplex {
        let i = Complex64::new(0.0, 1.0);
        let sign = helicity.sign();
        let e0 = self.eps(0);
        let e1 = self.eps(1);
        (e0 + e1 * (i * sign)) * (-sign / std::f64::consts::SQRT_2)
    }

    /// The same photon seen in another frame; the polarization basis follows the
    /// transformed momentum.
    pub fn transformed(&self, xform: &LorentzTransform) -> Photon {
        Self {
            momentum: self.momentum.transformed(xform),
            sdm: self.sdm,
        }
    }
}
