use std::ops::Mul;

use nalgebra::{Matrix4, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::QedError;
use crate::kinematics::four_vector_complex::FourVectorComplex;
use crate::kinematics::lorentz_transform::LorentzTransform;
use crate::kinematics::three_vector::ThreeVector;
use crate::Result;

/// A spatial rotation acting on the x, y, z components of four-vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Orthogonal 3x3 matrix with determinant +1
    rotation: Rotation3<f64>,
}

impl Rotation {
    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
        }
    }

    /// Rotation by `|axis|` radians about the direction of `axis`.
    pub fn from_rotation_vector(axis: &ThreeVector) -> Self {
        Self {
            rotation: Rotation3::new(*axis.as_vector()),
        }
    }

    /// Rotation by `angle` radians (right-handed) about `axis`.
    pub fn from_axis_angle(axis: &ThreeVector, angle: f64) -> Result<Self> {
        if angle == 0.0 {
            return Ok(Self::identity());
        }
        let ahat = Unit::try_new(*axis.as_vector(), 0.0).ok_or(QedError::DegenerateAxis)?;
        Ok(Self {
            rotation: Rotation3::from_axis_angle(&ahat, angle),
        })
    }

    /// Euler angles in the z-x-z convention: `R = Rz(phi) Rx(theta) Rz(psi)`.
    pub fn from_euler(phi: f64, theta: f64, psi: f64) -> Self {
        let rz_phi = Rotation3::from_axis_angle(&Vector3::z_axis(), phi);
        let rx_theta = Rotation3::from_axis_angle(&Vector3::x_axis(), theta);
        let rz_psi = Rotation3::from_axis_angle(&Vector3::z_axis(), psi);
        Self {
            rotation: rz_phi * rx_theta * rz_psi,
        }
    }

    /// Rotation vector: unit axis scaled by the rotation angle.
    pub fn axis(&self) -> ThreeVector {
        ThreeVector::from_vector(self.rotation.scaled_axis())
    }

    /// Unit axis and angle in [0, pi]. The identity reports the z axis and angle 0.
    pub fn get_axis(&self) -> (ThreeVector, f64) {
        match self.rotation.axis_angle() {
            Some((ahat, angle)) => (ThreeVector::from_vector(ahat.into_inner()), angle),
            None => (ThreeVector::new(0.0, 0.0, 1.0), 0.0),
        }
    }

    /// Euler angles (phi, theta, psi) in the z-x-z convention.
    ///
    /// When theta is 0 or pi only the combination phi +/- psi is defined; psi is
    /// then reported as 0.
    pub fn get_euler(&self) -> (f64, f64, f64) {
        let m = self.rotation.matrix();
        let theta = m[(2, 2)].clamp(-1.0, 1.0).acos();
        let sin_theta = theta.sin();
        if sin_theta.abs() < 1e-12 {
            let phi = m[(1, 0)].atan2(m[(0, 0)]);
            return (phi, theta, 0.0);
        }
        let phi = m[(0, 2)].atan2(-m[(1, 2)]);
        let psi = m[(2, 0)].atan2(m[(2, 1)]);
        (phi, theta, psi)
    }

    pub fn matrix(&self) -> &nalgebra::Matrix3<f64> {
        self.rotation.matrix()
    }

    pub fn transpose(&mut self) -> &mut Self {
        self.rotation = self.rotation.transpose();
        self
    }

    /// Inverse rotation (same as the transpose).
    pub fn invert(&mut self) -> &mut Self {
        self.transpose()
    }

    pub fn inverse(&self) -> Rotation {
        Self {
            rotation: self.rotation.inverse(),
        }
    }

    /// Apply to a real three-vector.
    pub fn apply3(&self, vec: &ThreeVector) -> ThreeVector {
        ThreeVector::from_vector(self.rotation * vec.as_vector())
    }

    /// Apply to the spatial part of a complex four-vector.
    pub fn apply_complex(&self, vec: &FourVectorComplex) -> FourVectorComplex {
        vec.transformed(&self.to_transform())
    }

    pub fn to_transform(&self) -> LorentzTransform {
        let mut matrix = Matrix4::identity();
        matrix
            .fixed_view_mut::<3, 3>(1, 1)
            .copy_from(self.rotation.matrix());
        LorentzTransform::from_matrix(matrix)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Rotation {
    type Output = Rotation;
    fn mul(self, rhs: Rotation) -> Rotation {
        Self {
            rotation: self.rotation * rhs.rotation,
        }
    }
}

impl Mul<ThreeVector> for Rotation {
    type Output = ThreeVector;
    fn mul(self, rhs: ThreeVector) -> ThreeVector {
        self.apply3(&rhs)
    }
}
