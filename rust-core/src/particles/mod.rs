// Particles module: external photon and lepton states with their spin density matrices

// ======================== MODULE DECLARATIONS ========================
pub mod lepton;
pub mod particle;
pub mod photon;
pub mod spin_density;

// Test modules
mod _tests_particles;
mod _tests_spin_density;

// ======================== SPIN STATES ========================
pub use spin_density::SpinDensityMatrix; // struct - Hermitian 2x2 polarization weights
// SpinDensityMatrix impl methods:
//   identity() -> Self                              - sum over final-state polarizations
//   unpolarized() -> Self                           - average over initial-state polarizations
//   pure(c0, c1) -> Self                            - pure state c c^dagger
//   diagonal(w0, w1) -> Self                        - per-state efficiencies
//   from_stokes(s1, s2, s3) -> Self                 - photon Stokes parameters
//   trace(&self) -> f64                             - total probability
//   is_hermitian(&self, tol) -> bool                - Hermiticity check

// ======================== PARTICLES ========================
pub use photon::Photon; // struct - momentum, linear polarization basis and SDM
// Photon impl methods:
//   new(momentum) -> Self                           - unpolarized photon
//   with_sdm(self, sdm) -> Self                     - attach a density matrix
//   eps(&self, j) / eps_star(&self, j) -> FourVectorComplex - polarization vector and conjugate
//   circular_eps(&self, helicity) -> FourVectorComplex - helicity polarization vector

pub use lepton::Lepton; // struct - momentum, mass and helicity SDM
// Lepton impl methods:
//   new(momentum, mass) -> Self                     - unpolarized lepton
//   spinors_u(&self) / spinors_v(&self) -> [DiracSpinor; 2] - helicity spinors

pub use particle::Particle; // enum - Photon or Lepton
// Particle impl methods:
//   momentum(&self) -> &FourVector                  - four-momentum
//   mass(&self) -> Option<f64>                      - None for photons
//   sdm(&self) -> &SpinDensityMatrix                - density matrix
