// Cross-section module: leading-order QED amplitudes and their spin sums
// Each process builds a helicity/polarization amplitude tensor and contracts it with the
// spin density matrices of the external particles

// ======================== MODULE DECLARATIONS ========================
pub mod amplitude;
pub mod bremsstrahlung;
pub mod compton;
pub mod ee_bremsstrahlung;
pub mod engine;
pub mod pair_production;
pub mod reference;
pub mod result;
pub mod triplet_production;


// ======================== AMPLITUDE ALGEBRA ========================
pub use amplitude::{
    AmplitudeTensor, // struct - complex amplitude indexed by one bit per external particle
    CompensatedSum,  // struct - Neumaier-compensated complex accumulator
    SdmPlacement,    // enum - Incoming (rho[i, i']) or Outgoing (rho[i', i]) weighting
    SpinLeg,         // type - (&SpinDensityMatrix, SdmPlacement) per tensor axis
};
// AmplitudeTensor impl methods:
//   zeros() -> Self                                 - all amplitudes zero
//   norm_sqr(&self) -> f64                          - unweighted sum of |M|^2
//   contract(&self, legs) -> Complex64              - SDM-weighted sum over all indices
//   contract_keeping(&self, axis, legs) -> Option<Matrix2<Complex64>> - leaves one axis open

// ======================== ENGINE ========================
pub use engine::CrossSectionEngine; // struct - constants plus the sanity tolerance
// CrossSectionEngine impl methods:
//   new(constants) -> Self                          - engine with default tolerance
//   evaluate(&self, process, &[Particle]) -> Result<CrossSection> - layout-checked dispatch
//   compton(&self, g_in, e_in, g_out, e_out) -> CrossSection
//   bremsstrahlung(&self, e_in, e_out, g_out) -> CrossSection
//   pair_production(&self, g_in, e_out, p_out) -> CrossSection
//   triplet_production(&self, g_in, e_in, p_out, e_out2, e_out3) -> CrossSection
//   ee_bremsstrahlung(&self, e_in0, e_in1, e_out2, e_out3, g_out) -> CrossSection

pub use result::{
    AmplitudeWarning, // struct - diagnostic for a complex or negative spin sum
    CrossSection,     // struct - value, ampSquared and optional warning
    Process,          // enum - the five processes
};

// ======================== CLOSED FORMS ========================
pub use reference::{compton_energy, klein_nishina, mandelstam_s, mandelstam_t, mandelstam_u};
