// Complex Minkowski four-vectors, used for photon polarization vectors

use std::ops::{Add, Index, Mul, Neg, Sub};

use log::error;
use nalgebra::Vector4;
use num_complex::Complex64;

use crate::kinematics::four_vector::FourVector;
use crate::kinematics::lorentz_transform::LorentzTransform;

/// Complex four-vector (t, x, y, z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourVectorComplex {
    components: Vector4<Complex64>,
}

impl FourVectorComplex {
    pub fn new(t: Complex64, x: Complex64, y: Complex64, z: Complex64) -> Self {
        Self {
            components: Vector4::new(t, x, y, z),
        }
    }

    pub fn zeros() -> Self {
        Self {
            components: Vector4::zeros(),
        }
    }

    pub fn from_real(vec: &FourVector) -> Self {
        Self {
            components: vec.as_vector().map(|c| Complex64::new(c, 0.0)),
        }
    }

    /// Combine a real and an imaginary part into `re + i im`.
    pub fn from_parts(re: &FourVector, im: &FourVector) -> Self {
        Self {
            components: re
                .as_vector()
                .zip_map(im.as_vector(), |a, b| Complex64::new(a, b)),
        }
    }

    pub fn as_vector(&self) -> &Vector4<Complex64> {
        &self.components
    }

    pub fn t(&self) -> Complex64 {
        self.components[0]
    }

    pub fn x(&self) -> Complex64 {
        self.components[1]
    }

    pub fn y(&self) -> Complex64 {
        self.components[2]
    }

    pub fn z(&self) -> Complex64 {
        self.components[3]
    }

    pub fn real(&self) -> FourVector {
        FourVector::from_vector(self.components.map(|c| c.re))
    }

    pub fn imag(&self) -> FourVector {
        FourVector::from_vector(self.components.map(|c| c.im))
    }

    pub fn conj(&self) -> FourVectorComplex {
        Self {
            components: self.components.map(|c| c.conj()),
        }
    }

    /// Bilinear Minkowski product (no complex conjugation).
    pub fn scalar_prod(&self, other: &FourVectorComplex) -> Complex64 {
        self.components[0] * other.components[0]
            - self.components[1] * other.components[1]
            - self.components[2] * other.components[2]
            - self.components[3] * other.components[3]
    }

    /// Bilinear product with a real four-vector.
    pub fn scalar_prod_real(&self, other: &FourVector) -> Complex64 {
        self.components[0] * other.t()
            - self.components[1] * other.x()
            - self.components[2] * other.y()
            - self.components[3] * other.z()
    }

    pub fn transformed(&self, xform: &LorentzTransform) -> FourVectorComplex {
        let m = xform.matrix().map(|c| Complex64::new(c, 0.0));
        Self {
            components: m * self.components,
        }
    }
}

impl Index<usize> for FourVectorComplex {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Complex64 {
        if index > 3 {
            error!("FourVectorComplex index {} out of range", index);
            return &self.components[0];
        }
        &self.components[index]
    }
}

impl Add for FourVectorComplex {
    type Output = FourVectorComplex;
    fn add(self, rhs: FourVectorComplex) -> FourVectorComplex {
        Self {
            components: self.components + rhs.components,
        }
    }
}

impl Sub for FourVectorComplex {
    type Output = FourVectorComplex;
    fn sub(self, rhs: FourVectorComplex) -> FourVectorComplex {
        Self {
            components: self.components - rhs.components,
        }
    }
}

impl Neg for FourVectorComplex {
    type Output = FourVectorComplex;
    fn neg(self) -> FourVectorComplex {
        Self {
            components: -self.components,
        }
    }
}

impl Mul<Complex64> for FourVectorComplex {
    type Output = FourVectorComplex;
    fn mul(self, factor: Complex64) -> FourVectorComplex {
        Self {
            components: self.components * factor,
        }
    }
}

impl Mul<f64> for FourVectorComplex {
    type Output = FourVectorComplex;
    fn mul(self, factor: f64) -> FourVectorComplex {
        Self {
            components: self.components.map(|c| c * factor),
        }
    }
}
