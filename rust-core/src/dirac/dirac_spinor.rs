// Four-component helicity spinors: free U (particle) and V (antiparticle) solutions

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

use log::error;
use nalgebra::{Vector2, Vector4};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::kinematics::four_vector::FourVector;

/// Helicity of a spin-1/2 particle, +1/2 or -1/2.
///
/// Helicity doubles as the 0/1 index of amplitude tensor axes, with `Plus` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Helicity {
    Plus,
    Minus,
}

impl Helicity {
    pub const BOTH: [Helicity; 2] = [Helicity::Plus, Helicity::Minus];

    /// +0.5 or -0.5
    pub fn value(self) -> f64 {
        match self {
            Helicity::Plus => 0.5,
            Helicity::Minus => -0.5,
        }
    }

    /// Twice the helicity: +1.0 or -1.0
    pub fn sign(self) -> f64 {
        2.0 * self.value()
    }

    pub fn index(self) -> usize {
        match self {
            Helicity::Plus => 0,
            Helicity::Minus => 1,
        }
    }

    pub fn flip(self) -> Helicity {
        match self {
            Helicity::Plus => Helicity::Minus,
            Helicity::Minus => Helicity::Plus,
        }
    }
}

impl fmt::Display for Helicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Helicity::Plus => write!(f, "+1/2"),
            Helicity::Minus => write!(f, "-1/2"),
        }
    }
}

/// Which free solution of the Dirac equation a spinor represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinorKind {
    /// Positive energy solution, `(p-slash - m) u = 0`
    U,
    /// Negative energy solution, `(p-slash + m) v = 0`
    V,
}

/// Complex four-component spinor tagged with the momentum, helicity and kind it
/// was built from.
///
/// A spinor produced by multiplying with a [`DiracMatrix`](crate::dirac::DiracMatrix)
/// keeps the tags of its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiracSpinor {
    components: Vector4<Complex64>,
    momentum: FourVector,
    helicity: Helicity,
    kind: SpinorKind,
}

/// Two-component helicity eigenstates of sigma . p-hat
fn two_spinor(momentum: &FourVector, helicity: Helicity) -> Vector2<Complex64> {
    // On the z axis the angles must not depend on the signs of zero
    // components; a particle at rest is quantized along +z.
    let direction = momentum.three_vector();
    let (theta, phi) = if direction.x() == 0.0 && direction.y() == 0.0 {
        (if direction.z() < 0.0 { PI } else { 0.0 }, 0.0)
    } else {
        (direction.theta(), direction.phi())
    };
    let (sin_half, cos_half) = (0.5 * theta).sin_cos();
    match helicity {
        Helicity::Plus => Vector2::new(
            Complex64::new(cos_half, 0.0),
            Complex64::from_polar(sin_half, phi),
        ),
        Helicity::Minus => Vector2::new(
            -Complex64::from_polar(sin_half, -phi),
            Complex64::new(cos_half, 0.0),
        ),
    }
}

/// sqrt(E + m) and sqrt(E - m), the latter computed as |p| / sqrt(E + m)
fn energy_roots(momentum: &FourVector) -> (f64, f64) {
    let mass = momentum.invariant().max(0.0);
    let upper = (momentum.t() + mass).sqrt();
    let lower = if upper > 0.0 {
        momentum.length() / upper
    } else {
        0.0
    };
    (upper, lower)
}

impl DiracSpinor {
    /// Particle spinor `u(p, h) = [sqrt(E+m) chi_h ; 2h sqrt(E-m) chi_h]`.
    ///
    /// The mass is taken from the invariant of `momentum`; a particle at rest uses
    /// the z axis as its helicity axis.
    pub fn state_u(momentum: &FourVector, helicity: Helicity) -> Self {
        let chi = two_spinor(momentum, helicity);
        let (upper, lower) = energy_roots(momentum);
        let small = lower * helicity.sign();
        Self {
            components: Vector4::new(
                chi[0] * upper,
                chi[1] * upper,
                chi[0] * small,
                chi[1] * small,
            ),
            momentum: *momentum,
            helicity,
            kind: SpinorKind::U,
        }
    }

    /// Antiparticle spinor `v(p, h) = [-2h sqrt(E-m) chi_-h ; sqrt(E+m) chi_-h]`.
    pub fn state_v(momentum: &FourVector, helicity: Helicity) -> Self {
        let chi = two_spinor(momentum, helicity.flip());
        let (upper, lower) = energy_roots(momentum);
        let small = -lower * helicity.sign();
        Self {
            components: Vector4::new(
                chi[0] * small,
                chi[1] * small,
                chi[0] * upper,
                chi[1] * upper,
            ),
            momentum: *momentum,
            helicity,
            kind: SpinorKind::V,
        }
    }

    pub fn components(&self) -> Vector4<Complex64> {
        self.components
    }

    /// Same tags, new components.
    pub fn with_components(&self, components: Vector4<Complex64>) -> Self {
        Self {
            components,
            ..*self
        }
    }

    pub fn momentum(&self) -> &FourVector {
        &self.momentum
    }

    pub fn helicity(&self) -> Helicity {
        self.helicity
    }

    pub fn kind(&self) -> SpinorKind {
        self.kind
    }

    /// Dirac adjoint bilinear `psi-bar other = psi^dagger g0 other`.
    ///
    /// With `other = Gamma * chi` this is the matrix element `psi-bar Gamma chi`.
    pub fn scalar_prod(&self, other: &DiracSpinor) -> Complex64 {
        let a = &self.components;
        let b = &other.components;
        a[0].conj() * b[0] + a[1].conj() * b[1] - a[2].conj() * b[2] - a[3].conj() * b[3]
    }
}

impl Index<usize> for DiracSpinor {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Complex64 {
        if index > 3 {
            error!("DiracSpinor index {} out of range", index);
            return &self.components[0];
        }
        &self.components[index]
    }
}

impl Add for DiracSpinor {
    type Output = DiracSpinor;
    fn add(self, rhs: DiracSpinor) -> DiracSpinor {
        self.with_components(self.components + rhs.components)
    }
}

impl Sub for DiracSpinor {
    type Output = DiracSpinor;
    fn sub(self, rhs: DiracSpinor) -> DiracSpinor {
        self.with_components(self.components - rhs.components)
    }
}

impl Mul<Complex64> for DiracSpinor {
    type Output = DiracSpinor;
    fn mul(self, factor: Complex64) -> DiracSpinor {
        self.with_components(self.components * factor)
    }
}
