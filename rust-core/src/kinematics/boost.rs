use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::QedError;
use crate::kinematics::four_vector::FourVector;
use crate::kinematics::lorentz_transform::LorentzTransform;
use crate::kinematics::three_vector::ThreeVector;
use crate::Result;

/// A pure Lorentz boost into a frame moving with velocity `beta` (in units of c).
///
/// Applying the boost to the four-momentum of a particle moving with velocity
/// `beta` brings it to rest. The boost matrix is symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    beta: Vector3<f64>,
    gamma: f64,
}

impl Boost {
    pub fn identity() -> Self {
        Self {
            beta: Vector3::zeros(),
            gamma: 1.0,
        }
    }

    pub fn from_beta(beta_x: f64, beta_y: f64, beta_z: f64) -> Result<Self> {
        Self::from_beta_vector(&ThreeVector::new(beta_x, beta_y, beta_z))
    }

    pub fn from_beta_vector(beta: &ThreeVector) -> Result<Self> {
        let beta_sqr = beta.length_sqr();
        if beta_sqr >= 1.0 {
            return Err(QedError::SuperluminalBoost(beta_sqr.sqrt()));
        }
        Ok(Self {
            beta: *beta.as_vector(),
            gamma: 1.0 / (1.0 - beta_sqr).sqrt(),
        })
    }

    /// Boost with speed `beta` along `axis`; a negative speed reverses the direction.
    pub fn along(axis: &ThreeVector, beta: f64) -> Result<Self> {
        if beta == 0.0 {
            return Ok(Self::identity());
        }
        if axis.length() == 0.0 {
            return Err(QedError::DegenerateAxis);
        }
        Self::from_beta_vector(&axis.normalize(beta))
    }

    /// Boost along `axis` with Lorentz factor `gamma >= 1`.
    pub fn from_gamma(axis: &ThreeVector, gamma: f64) -> Result<Self> {
        if gamma.is_nan() || gamma < 1.0 {
            return Err(QedError::InvalidGamma(gamma));
        }
        if gamma == 1.0 {
            return Ok(Self::identity());
        }
        if axis.length() == 0.0 {
            return Err(QedError::DegenerateAxis);
        }
        let beta = (1.0 - 1.0 / (gamma * gamma)).sqrt();
        Ok(Self {
            beta: *axis.normalize(beta).as_vector(),
            gamma,
        })
    }

    /// The boost taking the lab frame into the rest frame of `p`.
    ///
    /// `p` must be timelike with positive energy.
    pub fn from_momentum(p: &FourVector) -> Result<Self> {
        let mass_sqr = p.invariant_sqr();
        if p.t() <= 0.0 || mass_sqr <= 0.0 {
            return Err(QedError::NotTimelike);
        }
        let beta = p.three_vector() / p.t();
        Ok(Self {
            beta: *beta.as_vector(),
            gamma: p.t() / mass_sqr.sqrt(),
        })
    }

    pub fn beta(&self) -> ThreeVector {
        ThreeVector::from_vector(self.beta)
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Change the Lorentz factor keeping the boost direction.
    pub fn set_gamma(&mut self, gamma: f64) -> Result<&mut Self> {
        *self = Self::from_gamma(&self.beta(), gamma)?;
        Ok(self)
    }

    pub fn invert(&mut self) -> &mut Self {
        self.beta = -self.beta;
        self
    }

    pub fn inverse(&self) -> Boost {
        Self {
            beta: -self.beta,
            gamma: self.gamma,
        }
    }

    pub fn to_transform(&self) -> LorentzTransform {
        let gamma = self.gamma;
        let beta_sqr = self.beta.norm_squared();
        let mut matrix = Matrix4::identity();
        matrix[(0, 0)] = gamma;
        for i in 0..3 {
            matrix[(0, i + 1)] = -gamma * self.beta[i];
            matrix[(i + 1, 0)] = -gamma * self.beta[i];
        }
        if beta_sqr > 0.0 {
            // (gamma - 1) / beta^2 written as gamma^2 / (gamma + 1) to avoid cancellation
            let k = gamma * gamma / (gamma + 1.0);
            for i in 0..3 {
                for j in 0..3 {
                    matrix[(i + 1, j + 1)] += k * self.beta[i] * self.beta[j];
                }
            }
        }
        LorentzTransform::from_matrix(matrix)
    }
}

impl Default for Boost {
    fn default() -> Self {
        Self::identity()
    }
}
