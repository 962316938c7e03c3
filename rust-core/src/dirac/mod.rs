// Dirac module: gamma-matrix algebra and helicity spinors
// This module provides the spin-1/2 building blocks of every amplitude

// ======================== MODULE DECLARATIONS ========================
pub mod dirac_matrix;
pub mod dirac_spinor;

// Test modules
mod _tests_dirac_matrix;
mod _tests_dirac_spinor;

// ======================== MATRICES ========================
pub use dirac_matrix::{
    DiracGamma,  // enum - gamma^0..gamma^3 and gamma^5
    DiracMatrix, // struct - complex 4x4 element of the Dirac algebra
};
// DiracMatrix impl methods:
//   gamma(mu) -> DiracMatrix                        - generator gamma^mu (lenient on bad index)
//   gammas() -> [DiracMatrix; 4]                    - gamma^0..gamma^3
//   slash(&FourVector) -> DiracMatrix               - gamma^mu p_mu
//   slash_complex(&FourVectorComplex) -> DiracMatrix - gamma^mu eps_mu
//   propagator(p, mass, denominator) -> DiracMatrix - (p-slash + m) / denominator
//   trace(&self) -> Complex64                       - matrix trace
//   dagger(&self) / bar(&self) -> DiracMatrix       - Hermitian / Dirac adjoint

// ======================== SPINORS ========================
pub use dirac_spinor::{
    DiracSpinor, // struct - four-component spinor tagged with momentum and helicity
    Helicity,    // enum - +1/2 or -1/2, also the amplitude tensor index
    SpinorKind,  // enum - U (particle) or V (antiparticle) solution
};
// DiracSpinor impl methods:
//   state_u(p, helicity) -> DiracSpinor             - positive energy helicity spinor
//   state_v(p, helicity) -> DiracSpinor             - negative energy helicity spinor
//   scalar_prod(&self, other) -> Complex64          - adjoint bilinear psi-bar other
