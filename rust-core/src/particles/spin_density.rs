// 2x2 spin density matrices over the helicity / polarization basis of one particle
// Initial states are averaged with trace-one matrices, final states summed with the identity

use std::ops::{Add, Index, Mul};

use log::error;
use nalgebra::Matrix2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::POLARIZATION_TOLERANCE;

/// Hermitian 2x2 matrix weighting the spin states of an external particle.
///
/// For leptons the basis is helicity (+1/2, -1/2); for photons it is the linear
/// polarization basis `eps(0)`, `eps(1)` of [`Photon`](crate::particles::Photon).
///
/// The trace is the total probability the particle is produced or detected with:
/// * a pure state `c c^dagger` selects exactly that state,
/// * the identity sums over final-state polarizations,
/// * `I/2` averages over initial-state polarizations,
/// * any other Hermitian matrix acts as a polarization-dependent efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinDensityMatrix {
    matrix: Matrix2<Complex64>,
}

impl SpinDensityMatrix {
    pub fn new(matrix: Matrix2<Complex64>) -> Self {
        Self { matrix }
    }

    /// Sum over both states; the usual choice for an undetected final particle.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }

    /// Average over both states; the usual choice for an unpolarized beam or target.
    pub fn unpolarized() -> Self {
        Self::diagonal(0.5, 0.5)
    }

    /// Pure state `c c^dagger` for amplitudes `c = (c0, c1)` in the particle's basis.
    pub fn pure(c0: Complex64, c1: Complex64) -> Self {
        let c = nalgebra::Vector2::new(c0, c1);
        Self {
            matrix: c * c.adjoint(),
        }
    }

    /// Pure basis state `index` (0 or 1).
    ///
    /// Indices above 1 are reported on the error log and select state 0.
    pub fn basis_state(index: usize) -> Self {
        let (one, zero) = (Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0));
        match index {
            0 => Self::pure(one, zero),
            1 => Self::pure(zero, one),
            _ => {
                error!("SpinDensityMatrix::basis_state: index {} out of range", index);
                Self::pure(one, zero)
            }
        }
    }

    /// Diagonal efficiencies for the two basis states.
    pub fn diagonal(w0: f64, w1: f64) -> Self {
        Self {
            matrix: Matrix2::new(
                Complex64::new(w0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(w1, 0.0),
            ),
        }
    }

    /// Photon density matrix from Stokes parameters in the `eps(0)`, `eps(1)` basis.
    ///
    /// `rho = (I + s1 sigma_z + s2 sigma_x + s3 sigma_y) / 2`, so `s1 = +1` is linear
    /// polarization along `eps(0)`, `s2 = +1` linear at 45 degrees between the two,
    /// and `s3 = +1` positive helicity.
    ///
    /// # Arguments
    /// * `s1` - linear polarization along eps(0) (+1) or eps(1) (-1)
    /// * `s2` - linear polarization along eps(0) + eps(1) (+1) or eps(0) - eps(1) (-1)
    /// * `s3` - circular polarization, right (+1) or left (-1) handed
    pub fn from_stokes(s1: f64, s2: f64, s3: f64) -> Self {
        Self {
            matrix: Matrix2::new(
                Complex64::new(0.5 * (1.0 + s1), 0.0),
                Complex64::new(0.5 * s2, -0.5 * s3),
                Complex64::new(0.5 * s2, 0.5 * s3),
                Complex64::new(0.5 * (1.0 - s1), 0.0),
            ),
        }
    }

    pub fn matrix(&self) -> &Matrix2<Complex64> {
        &self.matrix
    }

    /// Total production or detection probability.
    pub fn trace(&self) -> f64 {
        self.matrix.trace().re
    }

    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (self.matrix - self.matrix.adjoint())
            .iter()
            .all(|z| z.norm() < tolerance)
    }

    /// Degree of polarization `sqrt(2 tr(rho^2) / tr(rho)^2 - 1)`, in [0, 1].
    pub fn polarization(&self) -> f64 {
        let trace = self.trace();
        if trace <= 0.0 {
            return 0.0;
        }
        let purity = (self.matrix * self.matrix).trace().re / (trace * trace);
        (2.0 * purity - 1.0).max(0.0).sqrt()
    }

    /// Checks Hermiticity with the crate polarization tolerance and logs violations.
    pub fn validate(&self) -> bool {
        let ok = self.is_hermitian(POLARIZATION_TOLERANCE);
        if !ok {
            error!("SpinDensityMatrix is not Hermitian: {:?}", self.matrix);
        }
        ok
    }
}

impl Default for SpinDensityMatrix {
    fn default() -> Self {
        Self::unpolarized()
    }
}

impl Index<(usize, usize)> for SpinDensityMatrix {
    type Output = Complex64;

    fn index(&self, index: (usize, usize)) -> &Complex64 {
        if index.0 > 1 || index.1 > 1 {
            error!("SpinDensityMatrix index {:?} out of range", index);
            return &self.matrix[(0, 0)];
        }
        &self.matrix[index]
    }
}

impl Add for SpinDensityMatrix {
    type Output = SpinDensityMatrix;
    fn add(self, rhs: SpinDensityMatrix) -> SpinDensityMatrix {
        Self {
            matrix: self.matrix + rhs.matrix,
        }
    }
}

impl Mul<f64> for SpinDensityMatrix {
    type Output = SpinDensityMatrix;
    fn mul(self, factor: f64) -> SpinDensityMatrix {
        Self {
            matrix: self.matrix.map(|z| z * factor),
        }
    }
}
