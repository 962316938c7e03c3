// Real three-vectors: the spatial part of every four-vector
// Equality is tolerance based, scaled to the magnitude of the vector

use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use log::error;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::FOUR_VECTOR_RESOLUTION;

/// Real 3-vector with a magnitude-scaled equality tolerance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ThreeVector {
    components: Vector3<f64>,
}

impl ThreeVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            components: Vector3::new(x, y, z),
        }
    }

    pub fn zeros() -> Self {
        Self {
            components: Vector3::zeros(),
        }
    }

    pub fn from_array(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }

    pub fn from_vector(components: Vector3<f64>) -> Self {
        Self { components }
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.components
    }

    pub fn x(&self) -> f64 {
        self.components.x
    }

    pub fn y(&self) -> f64 {
        self.components.y
    }

    pub fn z(&self) -> f64 {
        self.components.z
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.components.x, self.components.y, self.components.z]
    }

    /// Absolute tolerance for comparisons against this vector.
    pub fn resolution(&self) -> f64 {
        let scale = self.length();
        if scale > 0.0 {
            FOUR_VECTOR_RESOLUTION * scale
        } else {
            FOUR_VECTOR_RESOLUTION
        }
    }

    pub fn dot(&self, other: &ThreeVector) -> f64 {
        self.components.dot(&other.components)
    }

    pub fn cross(&self, other: &ThreeVector) -> ThreeVector {
        Self::from_vector(self.components.cross(&other.components))
    }

    pub fn length(&self) -> f64 {
        self.components.norm()
    }

    pub fn length_sqr(&self) -> f64 {
        self.components.norm_squared()
    }

    /// Rescale to the given length. A null vector stays null.
    pub fn normalize(&self, length: f64) -> ThreeVector {
        let norm = self.length();
        if norm > 0.0 {
            Self::from_vector(self.components * (length / norm))
        } else {
            *self
        }
    }

    /// Unit vector along this one (null vector stays null)
    pub fn unit(&self) -> ThreeVector {
        self.normalize(1.0)
    }

    pub fn distance_to(&self, other: &ThreeVector) -> f64 {
        (self.components - other.components).norm()
    }

    /// Polar angle measured from +z, in [0, pi].
    pub fn theta(&self) -> f64 {
        let rho = self.components.x.hypot(self.components.y);
        rho.atan2(self.components.z)
    }

    /// Azimuthal angle measured from +x, in (-pi, pi].
    pub fn phi(&self) -> f64 {
        self.components.y.atan2(self.components.x)
    }
}

impl Index<usize> for ThreeVector {
    type Output = f64;

    /// Out-of-range indices report an error and fall back to the x component.
    fn index(&self, index: usize) -> &f64 {
        if index > 2 {
            error!("ThreeVector index {} out of range", index);
            return &self.components[0];
        }
        &self.components[index]
    }
}

impl PartialEq for ThreeVector {
    fn eq(&self, other: &Self) -> bool {
        self.distance_to(other) < self.resolution()
    }
}

impl Add for ThreeVector {
    type Output = ThreeVector;
    fn add(self, rhs: ThreeVector) -> ThreeVector {
        Self::from_vector(self.components + rhs.components)
    }
}

impl Sub for ThreeVector {
    type Output = ThreeVector;
    fn sub(self, rhs: ThreeVector) -> ThreeVector {
        Self::from_vector(self.components - rhs.components)
    }
}

impl Neg for ThreeVector {
    type Output = ThreeVector;
    fn neg(self) -> ThreeVector {
        Self::from_vector(-self.components)
    }
}

impl Mul<f64> for ThreeVector {
    type Output = ThreeVector;
    fn mul(self, factor: f64) -> ThreeVector {
        Self::from_vector(self.components * factor)
    }
}

impl Mul<ThreeVector> for f64 {
    type Output = ThreeVector;
    fn mul(self, vec: ThreeVector) -> ThreeVector {
        vec * self
    }
}

impl Div<f64> for ThreeVector {
    type Output = ThreeVector;
    fn div(self, factor: f64) -> ThreeVector {
        Self::from_vector(self.components / factor)
    }
}

impl AddAssign for ThreeVector {
    fn add_assign(&mut self, rhs: ThreeVector) {
        self.components += rhs.components;
    }
}

impl SubAssign for ThreeVector {
    fn sub_assign(&mut self, rhs: ThreeVector) {
        self.components -= rhs.components;
    }
}

impl MulAssign<f64> for ThreeVector {
    fn mul_assign(&mut self, factor: f64) {
        self.components *= factor;
    }
}

impl DivAssign<f64> for ThreeVector {
    fn div_assign(&mut self, factor: f64) {
        self.components /= factor;
    }
}
