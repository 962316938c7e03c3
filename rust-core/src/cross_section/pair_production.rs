use std::f64::consts::PI;

use crate::cross_section::amplitude::{AmplitudeTensor, SdmPlacement};
use crate::cross_section::engine::{slashed_polarizations, CrossSectionEngine};
use crate::cross_section::result::{CrossSection, Process};
use crate::dirac::dirac_matrix::{DiracGamma, DiracMatrix};
use crate::particles::lepton::Lepton;
use crate::particles::photon::Photon;

impl CrossSectionEngine {
    /// Lepton pair production `gamma -> l- l+` in the static Coulomb field of an
    /// atom, with recoil momentum `q = k - p- - p+`.
    ///
    /// Returns d(sigma)/(dE dphi d^3q) in ub/GeV^4/sr, where E and phi are the
    /// energy and azimuth of the lepton about the pair momentum. The form factor
    /// of the atom is not included. Momenta are in the rest frame of the atom,
    /// the mass is that of `e_out`.
    ///
    /// # Arguments
    /// * `g_in` - incoming photon
    /// * `e_out` - produced lepton
    /// * `p_out` - produced antilepton
    pub fn pair_production(&self, g_in: &Photon, e_out: &Lepton, p_out: &Lepton) -> CrossSection {
        let k = *g_in.momentum();
        let pe = *e_out.momentum();
        let pp = *p_out.momentum();
        let mass = e_out.mass();
        let q = k - pe - pp;
        let q_sqr = q.invariant_sqr();

        let uf = e_out.spinors_u();
        let vf = p_out.spinors_v();

        let lepton_leg = DiracMatrix::propagator(&(pe - k), mass, -2.0 * k.scalar_prod(&pe));
        let antilepton_leg = DiracMatrix::propagator(&(k - pp), mass, -2.0 * k.scalar_prod(&pp));
        let gamma0 = DiracMatrix::from(DiracGamma::Gamma0);
        let eps_in = slashed_polarizations(g_in, false);

        // axes: antilepton helicity, lepton helicity, photon polarization
        let mut amp = AmplitudeTensor::<3>::zeros();
        for gi in 0..2 {
            let chain = eps_in[gi] * lepton_leg * gamma0 + gamma0 * antilepton_leg * eps_in[gi];
            for hp in 0..2 {
                let psi = chain * vf[hp];
                for he in 0..2 {
                    amp[[hp, he, gi]] = uf[he].scalar_prod(&psi);
                }
            }
        }

        let amp_squared = amp.contract(&[
            (p_out.sdm(), SdmPlacement::Incoming),
            (e_out.sdm(), SdmPlacement::Outgoing),
            (g_in.sdm(), SdmPlacement::Incoming),
        ]);

        let kin_factor = 1.0 / (2.0 * PI * k.t()).powi(2) / (q_sqr * q_sqr);

        self.finish(Process::PairProduction, amp_squared, kin_factor, None)
    }
}
