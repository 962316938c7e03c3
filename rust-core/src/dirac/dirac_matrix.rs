// Complex 4x4 matrices of the Dirac algebra in the Dirac representation
// gamma^0 = diag(1, 1, -1, -1), gamma^i = [[0, sigma_i], [-sigma_i, 0]]

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use log::error;
use nalgebra::Matrix4;
use num_complex::Complex64;

use crate::dirac::dirac_spinor::DiracSpinor;
use crate::kinematics::four_vector::FourVector;
use crate::kinematics::four_vector_complex::FourVectorComplex;

/// The generators of the Dirac algebra plus gamma^5 = i g0 g1 g2 g3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiracGamma {
    Gamma0,
    Gamma1,
    Gamma2,
    Gamma3,
    Gamma5,
}

impl DiracGamma {
    /// Lorentz-index lookup; 5 maps to gamma^5.
    pub fn from_index(mu: usize) -> Option<Self> {
        match mu {
            0 => Some(Self::Gamma0),
            1 => Some(Self::Gamma1),
            2 => Some(Self::Gamma2),
            3 => Some(Self::Gamma3),
            5 => Some(Self::Gamma5),
            _ => None,
        }
    }
}

/// Element of the Dirac matrix algebra.
///
/// Products do not commute; `a * b` is the ordinary matrix product with `b`
/// acting first on a spinor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiracMatrix {
    m: Matrix4<Complex64>,
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

impl DiracMatrix {
    pub fn zero() -> Self {
        Self {
            m: Matrix4::zeros(),
        }
    }

    pub fn identity() -> Self {
        Self {
            m: Matrix4::identity(),
        }
    }

    pub fn from_matrix(m: Matrix4<Complex64>) -> Self {
        Self { m }
    }

    pub fn matrix(&self) -> &Matrix4<Complex64> {
        &self.m
    }

    /// gamma^mu for mu in 0..=3, gamma^5 for mu = 5.
    ///
    /// Any other index is reported on the error log and yields gamma^0.
    pub fn gamma(mu: usize) -> Self {
        match DiracGamma::from_index(mu) {
            Some(which) => Self::from(which),
            None => {
                error!("DiracMatrix::gamma: index {} out of range", mu);
                Self::from(DiracGamma::Gamma0)
            }
        }
    }

    /// The four generators gamma^0..gamma^3.
    pub fn gammas() -> [DiracMatrix; 4] {
        [
            Self::from(DiracGamma::Gamma0),
            Self::from(DiracGamma::Gamma1),
            Self::from(DiracGamma::Gamma2),
            Self::from(DiracGamma::Gamma3),
        ]
    }

    /// gamma^mu p_mu = g0 p0 - g1 p1 - g2 p2 - g3 p3
    pub fn slash(p: &FourVector) -> Self {
        let [g0, g1, g2, g3] = Self::gammas();
        g0 * p.t() - g1 * p.x() - g2 * p.y() - g3 * p.z()
    }

    /// Slash of a complex four-vector such as a photon polarization vector.
    pub fn slash_complex(eps: &FourVectorComplex) -> Self {
        let [g0, g1, g2, g3] = Self::gammas();
        g0 * eps.t() - g1 * eps.x() - g2 * eps.y() - g3 * eps.z()
    }

    /// Fermion propagator `(p-slash + m) / denominator`.
    ///
    /// The denominator is the diagram-specific invariant `p^2 - m^2` written in
    /// terms of the external momenta, so its sign follows the momentum routing.
    pub fn propagator(p: &FourVector, mass: f64, denominator: f64) -> Self {
        (Self::slash(p) + mass) / denominator
    }

    pub fn trace(&self) -> Complex64 {
        self.m.trace()
    }

    /// Hermitian conjugate
    pub fn dagger(&self) -> Self {
        Self {
            m: self.m.adjoint(),
        }
    }

    /// Dirac adjoint g0 M^dagger g0
    pub fn bar(&self) -> Self {
        let g0 = Self::from(DiracGamma::Gamma0);
        g0 * self.dagger() * g0
    }

    /// Anticommutator {self, other}
    pub fn anticommutator(&self, other: &DiracMatrix) -> Self {
        *self * *other + *other * *self
    }

    /// Largest element-wise modulus, used for approximate comparisons.
    pub fn amax(&self) -> f64 {
        self.m.iter().map(|z| z.norm()).fold(0.0, f64::max)
    }
}

impl From<DiracGamma> for DiracMatrix {
    fn from(which: DiracGamma) -> Self {
        let o = c(0.0, 0.0);
        let l = c(1.0, 0.0);
        let i = c(0.0, 1.0);
        #[rustfmt::skip]
        let m = match which {
            DiracGamma::Gamma0 => Matrix4::new(
                l, o, o, o,
                o, l, o, o,
                o, o, -l, o,
                o, o, o, -l,
            ),
            DiracGamma::Gamma1 => Matrix4::new(
                o, o, o, l,
                o, o, l, o,
                o, -l, o, o,
                -l, o, o, o,
            ),
            DiracGamma::Gamma2 => Matrix4::new(
                o, o, o, -i,
                o, o, i, o,
                o, i, o, o,
                -i, o, o, o,
            ),
            DiracGamma::Gamma3 => Matrix4::new(
                o, o, l, o,
                o, o, o, -l,
                -l, o, o, o,
                o, l, o, o,
            ),
            DiracGamma::Gamma5 => Matrix4::new(
                o, o, l, o,
                o, o, o, l,
                l, o, o, o,
                o, l, o, o,
            ),
        };
        Self { m }
    }
}

impl Index<(usize, usize)> for DiracMatrix {
    type Output = Complex64;

    fn index(&self, index: (usize, usize)) -> &Complex64 {
        if index.0 > 3 || index.1 > 3 {
            error!("DiracMatrix index {:?} out of range", index);
            return &self.m[(0, 0)];
        }
        &self.m[index]
    }
}

impl Add for DiracMatrix {
    type Output = DiracMatrix;
    fn add(self, rhs: DiracMatrix) -> DiracMatrix {
        Self { m: self.m + rhs.m }
    }
}

/// `M + m` adds m times the identity.
impl Add<f64> for DiracMatrix {
    type Output = DiracMatrix;
    fn add(self, mass: f64) -> DiracMatrix {
        let mut m = self.m;
        for k in 0..4 {
            m[(k, k)] += mass;
        }
        Self { m }
    }
}

impl Sub for DiracMatrix {
    type Output = DiracMatrix;
    fn sub(self, rhs: DiracMatrix) -> DiracMatrix {
        Self { m: self.m - rhs.m }
    }
}

impl Neg for DiracMatrix {
    type Output = DiracMatrix;
    fn neg(self) -> DiracMatrix {
        Self { m: -self.m }
    }
}

impl Mul for DiracMatrix {
    type Output = DiracMatrix;
    fn mul(self, rhs: DiracMatrix) -> DiracMatrix {
        Self { m: self.m * rhs.m }
    }
}

impl Mul<f64> for DiracMatrix {
    type Output = DiracMatrix;
    fn mul(self, factor: f64) -> DiracMatrix {
        Self {
            m: self.m.map(|z| z * factor),
        }
    }
}

impl Mul<Complex64> for DiracMatrix {
    type Output = DiracMatrix;
    fn mul(self, factor: Complex64) -> DiracMatrix {
        Self { m: self.m * factor }
    }
}

impl Mul<DiracMatrix> for f64 {
    type Output = DiracMatrix;
    fn mul(self, rhs: DiracMatrix) -> DiracMatrix {
        rhs * self
    }
}

impl Div<f64> for DiracMatrix {
    type Output = DiracMatrix;
    fn div(self, denominator: f64) -> DiracMatrix {
        Self {
            m: self.m.map(|z| z / denominator),
        }
    }
}

impl Mul<DiracSpinor> for DiracMatrix {
    type Output = DiracSpinor;
    fn mul(self, rhs: DiracSpinor) -> DiracSpinor {
        rhs.with_components(self.m * rhs.components())
    }
}

impl AddAssign for DiracMatrix {
    fn add_assign(&mut self, rhs: DiracMatrix) {
        self.m += rhs.m;
    }
}

impl SubAssign for DiracMatrix {
    fn sub_assign(&mut self, rhs: DiracMatrix) {
        self.m -= rhs.m;
    }
}

impl MulAssign for DiracMatrix {
    fn mul_assign(&mut self, rhs: DiracMatrix) {
        self.m *= rhs.m;
    }
}

impl MulAssign<f64> for DiracMatrix {
    fn mul_assign(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl DivAssign<f64> for DiracMatrix {
    fn div_assign(&mut self, denominator: f64) {
        *self = *self / denominator;
    }
}
