// Helicity amplitude tensors and their contraction with spin density matrices
// One axis of size 2 per external particle; axis 0 is the most significant bit of the flat index

use std::ops::{AddAssign, Index, IndexMut};

use nalgebra::Matrix2;
use num_complex::Complex64;

use crate::particles::spin_density::SpinDensityMatrix;

/// Where a particle's density matrix enters the contraction.
///
/// Particles whose spinor or polarization vector appears unconjugated in the
/// amplitude (initial leptons and photons, outgoing antileptons written with V
/// spinors) contract as `rho[i][i-bar]`; final leptons and photons, which enter
/// through `u-bar` or `eps*`, contract as `rho[i-bar][i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdmPlacement {
    Incoming,
    Outgoing,
}

impl SdmPlacement {
    fn weight(self, sdm: &SpinDensityMatrix, i: usize, ibar: usize) -> Complex64 {
        match self {
            SdmPlacement::Incoming => sdm[(i, ibar)],
            SdmPlacement::Outgoing => sdm[(ibar, i)],
        }
    }
}

/// One external leg as seen by the contraction.
pub type SpinLeg<'a> = (&'a SpinDensityMatrix, SdmPlacement);

/// Neumaier-compensated running sum of complex terms.
///
/// The real and imaginary parts are compensated independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    re: f64,
    re_compensation: f64,
    im: f64,
    im_compensation: f64,
}

fn neumaier_add(sum: &mut f64, compensation: &mut f64, term: f64) {
    let t = *sum + term;
    if sum.abs() >= term.abs() {
        *compensation += (*sum - t) + term;
    } else {
        *compensation += (term - t) + *sum;
    }
    *sum = t;
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: Complex64) {
        neumaier_add(&mut self.re, &mut self.re_compensation, term.re);
        neumaier_add(&mut self.im, &mut self.im_compensation, term.im);
    }

    pub fn total(&self) -> Complex64 {
        Complex64::new(self.re + self.re_compensation, self.im + self.im_compensation)
    }
}

impl AddAssign<Complex64> for CompensatedSum {
    fn add_assign(&mut self, term: Complex64) {
        self.add(term);
    }
}

/// Rank-`N` tensor of complex amplitudes, each index running over 0 and 1.
///
/// Index `[i_0, ..., i_{N-1}]` addresses the amplitude with particle `k` in
/// spin state `i_k`. Only the low bit of each index is used.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeTensor<const N: usize> {
    data: Vec<Complex64>,
}

impl<const N: usize> AmplitudeTensor<N> {
    pub const SIZE: usize = 1 << N;

    pub fn zeros() -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); Self::SIZE],
        }
    }

    fn flat(index: &[usize; N]) -> usize {
        index
            .iter()
            .fold(0, |acc, &i| (acc << 1) | (i & 1))
    }

    fn bit(flat: usize, axis: usize) -> usize {
        (flat >> (N - 1 - axis)) & 1
    }

    /// Amplitudes in flat order, axis 0 most significant.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Sum of `|A|^2` over all entries; equals the full contraction with identity
    /// density matrices.
    pub fn norm_sqr(&self) -> f64 {
        let mut sum = CompensatedSum::new();
        for a in &self.data {
            sum.add(Complex64::new(a.norm_sqr(), 0.0));
        }
        sum.total().re
    }

    fn weight(legs: &[SpinLeg<'_>; N], i: usize, ibar: usize, skip: Option<usize>) -> Complex64 {
        let mut w = Complex64::new(1.0, 0.0);
        for (axis, (sdm, placement)) in legs.iter().enumerate() {
            if Some(axis) == skip {
                continue;
            }
            w *= placement.weight(sdm, Self::bit(i, axis), Self::bit(ibar, axis));
        }
        w
    }

    /// `sum A[i] conj(A[i-bar]) prod_k w_k(i_k, i-bar_k)` over all index pairs.
    ///
    /// `legs[k]` carries the density matrix of the particle on axis `k`.
    pub fn contract(&self, legs: &[SpinLeg<'_>; N]) -> Complex64 {
        let mut sum = CompensatedSum::new();
        for (i, a) in self.data.iter().enumerate() {
            if a.norm_sqr() == 0.0 {
                continue;
            }
            for (ibar, b) in self.data.iter().enumerate() {
                sum.add(a * b.conj() * Self::weight(legs, i, ibar, None));
            }
        }
        sum.total()
    }

    /// Contraction over every axis except `axis`, whose index pair is kept open.
    ///
    /// Entry `[j][j-bar]` collects the terms with `i_axis = j`, `i-bar_axis = j-bar`,
    /// including the density matrix weight of the kept axis, so the entries sum to
    /// [`AmplitudeTensor::contract`]. Returns `None` when `axis >= N`.
    pub fn contract_keeping(&self, axis: usize, legs: &[SpinLeg<'_>; N]) -> Option<Matrix2<Complex64>> {
        if axis >= N {
            return None;
        }
        let mut blocks = [[CompensatedSum::new(); 2]; 2];
        for (i, a) in self.data.iter().enumerate() {
            for (ibar, b) in self.data.iter().enumerate() {
                let j = Self::bit(i, axis);
                let jbar = Self::bit(ibar, axis);
                let kept = legs[axis].1.weight(legs[axis].0, j, jbar);
                blocks[j][jbar].add(a * b.conj() * kept * Self::weight(legs, i, ibar, Some(axis)));
            }
        }
        Some(Matrix2::new(
            blocks[0][0].total(),
            blocks[0][1].total(),
            blocks[1][0].total(),
            blocks[1][1].total(),
        ))
    }
}

impl<const N: usize> Index<[usize; N]> for AmplitudeTensor<N> {
    type Output = Complex64;

    fn index(&self, index: [usize; N]) -> &Complex64 {
        &self.data[Self::flat(&index)]
    }
}

impl<const N: usize> IndexMut<[usize; N]> for AmplitudeTensor<N> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut Complex64 {
        &mut self.data[Self::flat(&index)]
    }
}
