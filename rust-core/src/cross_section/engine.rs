// Cross-section engine: couplings, unit conversion and the amplitude sanity check
// The process-specific amplitude code lives in one file per process

use log::{debug, warn};
use nalgebra::Matrix2;
use num_complex::Complex64;

use crate::config::{PhysicalConstants, AMPLITUDE_SANITY_TOLERANCE};
use crate::cross_section::result::{AmplitudeWarning, CrossSection, Process};
use crate::dirac::dirac_matrix::DiracMatrix;
use crate::error::QedError;
use crate::particles::particle::Particle;
use crate::particles::photon::Photon;
use crate::Result;

/// Evaluates tree-level QED differential cross sections.
///
/// The engine is an immutable bundle of configuration; every evaluation borrows
/// its inputs, copies what it needs and returns a fresh [`CrossSection`], so one
/// engine can be shared across threads.
///
/// Momentum conservation and mass-shell consistency of the inputs are the
/// caller's responsibility and are not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSectionEngine {
    constants: PhysicalConstants,
    sanity_tolerance: f64,
}

impl CrossSectionEngine {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self {
            constants,
            sanity_tolerance: AMPLITUDE_SANITY_TOLERANCE,
        }
    }

    /// Relative size of `|Im|` (and of a negative real part) tolerated in the
    /// spin-summed amplitude before a warning is attached.
    pub fn with_sanity_tolerance(mut self, tolerance: f64) -> Self {
        self.sanity_tolerance = tolerance;
        self
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn sanity_tolerance(&self) -> f64 {
        self.sanity_tolerance
    }

    /// Dispatch on a process with its particles in the order given by
    /// [`Process::layout`].
    pub fn evaluate(&self, process: Process, particles: &[Particle]) -> Result<CrossSection> {
        use Particle::{Lepton as L, Photon as G};
        let mismatch = || QedError::ParticleLayout {
            process: process.to_string(),
            layout: process.layout(),
            found: describe(particles),
        };
        match (process, particles) {
            (Process::Compton, [G(g_in), L(e_in), G(g_out), L(e_out)]) => {
                Ok(self.compton(g_in, e_in, g_out, e_out))
            }
            (Process::Bremsstrahlung, [L(e_in), L(e_out), G(g_out)]) => {
                Ok(self.bremsstrahlung(e_in, e_out, g_out))
            }
            (Process::PairProduction, [G(g_in), L(e_out), L(p_out)]) => {
                Ok(self.pair_production(g_in, e_out, p_out))
            }
            (Process::TripletProduction, [G(g_in), L(e_in), L(p_out), L(e_out2), L(e_out3)]) => {
                Ok(self.triplet_production(g_in, e_in, p_out, e_out2, e_out3))
            }
            (Process::EeBremsstrahlung, [L(e_in0), L(e_in1), L(e_out2), L(e_out3), G(g_out)]) => {
                Ok(self.ee_bremsstrahlung(e_in0, e_in1, e_out2, e_out3, g_out))
            }
            _ => Err(mismatch()),
        }
    }

    /// Apply couplings and units, and run the sanity check on `amp_squared`.
    pub(crate) fn finish(
        &self,
        process: Process,
        amp_squared: Complex64,
        kin_factor: f64,
        photon_block: Option<Matrix2<Complex64>>,
    ) -> CrossSection {
        let value = self.constants.hbarc_sqr
            * self.constants.alpha_qed.powi(process.alpha_power())
            * amp_squared.re
            * kin_factor;

        let bound = self.sanity_tolerance * amp_squared.norm();
        let warning = if amp_squared.re < -bound || amp_squared.im.abs() > bound {
            let warning = AmplitudeWarning {
                process,
                amp_squared,
                photon_block,
            };
            warn!("{}", warning);
            Some(warning)
        } else {
            None
        };

        debug!(
            "{}: ampSquared = {}, kinFactor = {:e}, value = {:e} {}",
            process,
            amp_squared,
            kin_factor,
            value,
            process.units()
        );

        CrossSection {
            process,
            value,
            amp_squared,
            warning,
        }
    }
}

impl Default for CrossSectionEngine {
    fn default() -> Self {
        Self::new(PhysicalConstants::default())
    }
}

/// Diagonal of the metric, contracting the Lorentz index of a virtual photon.
pub(crate) const METRIC_SIGNS: [f64; 4] = [1.0, -1.0, -1.0, -1.0];

/// Slashed polarization vectors of a photon, conjugated for a final-state photon.
pub(crate) fn slashed_polarizations(photon: &Photon, outgoing: bool) -> [DiracMatrix; 2] {
    [0, 1].map(|j| {
        let eps = if outgoing {
            photon.eps_star(j)
        } else {
            photon.eps(j)
        };
        DiracMatrix::slash_complex(&eps)
    })
}

fn describe(particles: &[Particle]) -> String {
    if particles.is_empty() {
        return "nothing".to_string();
    }
    particles
        .iter()
        .map(|p| if p.is_photon() { "photon" } else { "lepton" })
        .collect::<Vec<_>>()
        .join(", ")
}
