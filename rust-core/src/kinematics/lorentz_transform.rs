// Lorentz transform module: general 4x4 real operators on four-vectors
// Boosts and rotations convert into this type; composition and inversion live here

use std::ops::Mul;

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use crate::kinematics::boost::Boost;
use crate::kinematics::four_vector::FourVector;
use crate::kinematics::rotation::Rotation;

/// Minkowski metric diag(1, -1, -1, -1)
pub fn metric() -> Matrix4<f64> {
    Matrix4::from_diagonal(&nalgebra::Vector4::new(1.0, -1.0, -1.0, -1.0))
}

/// General Lorentz transformation
///
/// Represents a real 4x4 operator `M` acting on column four-vectors (t, x, y, z).
/// A proper element of the Lorentz group satisfies `Mᵀ g M = g` with the metric
/// `g = diag(1, -1, -1, -1)`; [`LorentzTransform::is_lorentz`] checks that condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorentzTransform {
    matrix: Matrix4<f64>,
}

impl LorentzTransform {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wrap a raw matrix
    ///
    /// The matrix is not checked; use [`LorentzTransform::is_lorentz`] when it comes
    /// from an untrusted source.
    ///
    /// # Arguments
    /// * `matrix` - 4x4 matrix acting on (t, x, y, z)
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Reset to the identity
    pub fn null(&mut self) -> &mut Self {
        self.matrix = Matrix4::identity();
        self
    }

    /// Transpose in place
    pub fn transpose(&mut self) -> &mut Self {
        self.matrix.transpose_mut();
        self
    }

    /// Replace this transform with its group inverse
    ///
    /// For any element of the Lorentz group the inverse is `g Mᵀ g`, so no general
    /// matrix inversion is needed.
    pub fn invert(&mut self) -> &mut Self {
        let g = metric();
        self.matrix = g * self.matrix.transpose() * g;
        self
    }

    /// Return the group inverse
    pub fn inverse(&self) -> LorentzTransform {
        let mut result = *self;
        result.invert();
        result
    }

    /// Compose this transformation with another transformation
    ///
    /// The resulting transformation applies `other` first, then this transformation,
    /// matching the matrix product `self * other`.
    ///
    /// # Arguments
    /// * `other` - The transformation applied first
    ///
    /// # Returns
    /// The composed transformation
    pub fn compose(&self, other: &LorentzTransform) -> LorentzTransform {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Apply the transformation to a four-vector
    ///
    /// # Arguments
    /// * `vec` - Four-vector to transform
    ///
    /// # Returns
    /// The transformed four-vector
    pub fn apply(&self, vec: &FourVector) -> FourVector {
        FourVector::from_vector(self.matrix * vec.as_vector())
    }

    /// Check the pseudo-orthogonality condition `Mᵀ g M = g`
    ///
    /// # Arguments
    /// * `tolerance` - Largest allowed deviation of any matrix element
    pub fn is_lorentz(&self, tolerance: f64) -> bool {
        let g = metric();
        let residual = self.matrix.transpose() * g * self.matrix - g;
        residual.amax() < tolerance
    }

    /// Check if this is an identity transformation
    pub fn is_identity(&self) -> bool {
        const EPSILON: f64 = 1e-10;
        (self.matrix - Matrix4::identity()).amax() < EPSILON
    }
}

impl Default for LorentzTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for LorentzTransform {
    type Output = LorentzTransform;
    fn mul(self, rhs: LorentzTransform) -> LorentzTransform {
        self.compose(&rhs)
    }
}

impl Mul<FourVector> for LorentzTransform {
    type Output = FourVector;
    fn mul(self, rhs: FourVector) -> FourVector {
        self.apply(&rhs)
    }
}

impl From<Boost> for LorentzTransform {
    fn from(boost: Boost) -> Self {
        boost.to_transform()
    }
}

impl From<Rotation> for LorentzTransform {
    fn from(rotation: Rotation) -> Self {
        rotation.to_transform()
    }
}
