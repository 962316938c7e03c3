// Real Minkowski four-vectors with the (+,-,-,-) metric
// Component 0 is the time (energy) component, 1..3 are x, y, z

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use log::error;
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};

use crate::config::FOUR_VECTOR_RESOLUTION;
use crate::error::QedError;
use crate::kinematics::boost::Boost;
use crate::kinematics::lorentz_transform::LorentzTransform;
use crate::kinematics::three_vector::ThreeVector;
use crate::Result;

/// Real four-vector (t, x, y, z).
///
/// Equality is defined up to [`FourVector::resolution`], which scales with the
/// Euclidean magnitude of the vector. Values are `Copy`; the in-place operations
/// (`transform`, `boost`, ...) return `&mut Self` so they can be chained.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FourVector {
    components: Vector4<f64>,
}

impl FourVector {
    pub fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            components: Vector4::new(t, x, y, z),
        }
    }

    pub fn zeros() -> Self {
        Self {
            components: Vector4::zeros(),
        }
    }

    pub fn from_array(array: [f64; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }

    /// Build from a time component and a spatial three-vector.
    pub fn from_time_space(t: f64, r: &ThreeVector) -> Self {
        Self::new(t, r.x(), r.y(), r.z())
    }

    pub fn from_vector(components: Vector4<f64>) -> Self {
        Self { components }
    }

    pub fn as_vector(&self) -> &Vector4<f64> {
        &self.components
    }

    pub fn t(&self) -> f64 {
        self.components[0]
    }

    pub fn x(&self) -> f64 {
        self.components[1]
    }

    pub fn y(&self) -> f64 {
        self.components[2]
    }

    pub fn z(&self) -> f64 {
        self.components[3]
    }

    pub fn coords(&self) -> [f64; 4] {
        [
            self.components[0],
            self.components[1],
            self.components[2],
            self.components[3],
        ]
    }

    /// Checked component access.
    pub fn get(&self, index: usize) -> Result<f64> {
        if index > 3 {
            return Err(QedError::IndexOutOfRange { index, len: 4 });
        }
        Ok(self.components[index])
    }

    /// Spatial part.
    pub fn three_vector(&self) -> ThreeVector {
        ThreeVector::new(self.x(), self.y(), self.z())
    }

    /// Magnitude of the spatial part.
    pub fn length(&self) -> f64 {
        self.three_vector().length()
    }

    pub fn length_sqr(&self) -> f64 {
        self.three_vector().length_sqr()
    }

    /// Absolute tolerance for comparisons against this vector.
    pub fn resolution(&self) -> f64 {
        let scale = self.components.norm();
        if scale > 0.0 {
            FOUR_VECTOR_RESOLUTION * scale
        } else {
            FOUR_VECTOR_RESOLUTION
        }
    }

    /// t^2 - x^2 - y^2 - z^2
    pub fn invariant_sqr(&self) -> f64 {
        self.t() * self.t() - self.length_sqr()
    }

    /// Proper mass of the vector.
    ///
    /// Vectors whose squared invariant lies in `(-resolution, 0]` are treated as null and
    /// return 0. Anything more negative is a precondition violation: it is reported on
    /// the error log and -1 is returned. Use [`FourVector::try_invariant`] to get the
    /// violation as an error instead.
    pub fn invariant(&self) -> f64 {
        match self.try_invariant() {
            Ok(mass) => mass,
            Err(e) => {
                error!("FourVector::invariant: {}", e);
                -1.0
            }
        }
    }

    pub fn try_invariant(&self) -> Result<f64> {
        let inv2 = self.invariant_sqr();
        let resolution = self.resolution();
        if inv2 > 0.0 {
            Ok(inv2.sqrt())
        } else if inv2 > -resolution {
            Ok(0.0)
        } else {
            Err(QedError::SpacelikeInvariant {
                invariant_sqr: inv2,
                resolution,
            })
        }
    }

    /// Minkowski scalar product with the (+,-,-,-) metric.
    pub fn scalar_prod(&self, other: &FourVector) -> f64 {
        self.components[0] * other.components[0]
            - self.components[1] * other.components[1]
            - self.components[2] * other.components[2]
            - self.components[3] * other.components[3]
    }

    /// Euclidean distance between the two coordinate quadruples.
    pub fn distance_to(&self, other: &FourVector) -> f64 {
        (self.components - other.components).norm()
    }

    pub fn zero(&mut self) -> &mut Self {
        self.components = Vector4::zeros();
        self
    }

    /// Apply a general Lorentz transform in place.
    pub fn transform(&mut self, xform: &LorentzTransform) -> &mut Self {
        self.components = xform.matrix() * self.components;
        self
    }

    pub fn boost(&mut self, boost: &Boost) -> &mut Self {
        self.transform(&boost.to_transform())
    }

    /// Boost into a frame moving with velocity (beta_x, beta_y, beta_z).
    pub fn boost_by(&mut self, beta_x: f64, beta_y: f64, beta_z: f64) -> Result<&mut Self> {
        let boost = Boost::from_beta(beta_x, beta_y, beta_z)?;
        Ok(self.boost(&boost))
    }

    /// Boost into a frame moving with speed `beta` along `axis`.
    pub fn boost_along(&mut self, axis: &ThreeVector, beta: f64) -> Result<&mut Self> {
        let boost = Boost::along(axis, beta)?;
        Ok(self.boost(&boost))
    }

    /// Transform from the lab frame into the rest frame of `p`.
    pub fn boost_to_rest(&mut self, p: &FourVector) -> Result<&mut Self> {
        let boost = Boost::from_momentum(p)?;
        Ok(self.boost(&boost))
    }

    /// Transform from the rest frame of `p` back into the lab frame.
    pub fn boost_from_rest(&mut self, p: &FourVector) -> Result<&mut Self> {
        let boost = Boost::from_momentum(p)?.inverse();
        Ok(self.boost(&boost))
    }

    /// Copy of this vector with a Lorentz transform applied.
    pub fn transformed(&self, xform: &LorentzTransform) -> FourVector {
        let mut result = *self;
        result.transform(xform);
        result
    }
}

impl Index<usize> for FourVector {
    type Output = f64;

    /// Out-of-range indices report an error and fall back to component 0.
    fn index(&self, index: usize) -> &f64 {
        if index > 3 {
            error!("FourVector index {} out of range", index);
            return &self.components[0];
        }
        &self.components[index]
    }
}

impl IndexMut<usize> for FourVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        if index > 3 {
            error!("FourVector index {} out of range", index);
            return &mut self.components[0];
        }
        &mut self.components[index]
    }
}

impl PartialEq for FourVector {
    fn eq(&self, other: &Self) -> bool {
        self.distance_to(other) < self.resolution()
    }
}

impl Add for FourVector {
    type Output = FourVector;
    fn add(self, rhs: FourVector) -> FourVector {
        Self::from_vector(self.components + rhs.components)
    }
}

impl Sub for FourVector {
    type Output = FourVector;
    fn sub(self, rhs: FourVector) -> FourVector {
        Self::from_vector(self.components - rhs.components)
    }
}

impl Neg for FourVector {
    type Output = FourVector;
    fn neg(self) -> FourVector {
        Self::from_vector(-self.components)
    }
}

impl Mul<f64> for FourVector {
    type Output = FourVector;
    fn mul(self, factor: f64) -> FourVector {
        Self::from_vector(self.components * factor)
    }
}

impl Mul<FourVector> for f64 {
    type Output = FourVector;
    fn mul(self, vec: FourVector) -> FourVector {
        vec * self
    }
}

impl Div<f64> for FourVector {
    type Output = FourVector;
    fn div(self, factor: f64) -> FourVector {
        Self::from_vector(self.components / factor)
    }
}

impl AddAssign for FourVector {
    fn add_assign(&mut self, rhs: FourVector) {
        self.components += rhs.components;
    }
}

impl SubAssign for FourVector {
    fn sub_assign(&mut self, rhs: FourVector) {
        self.components -= rhs.components;
    }
}

impl MulAssign<f64> for FourVector {
    fn mul_assign(&mut self, factor: f64) {
        self.components *= factor;
    }
}

impl DivAssign<f64> for FourVector {
    fn div_assign(&mut self, factor: f64) {
        self.components /= factor;
    }
}
