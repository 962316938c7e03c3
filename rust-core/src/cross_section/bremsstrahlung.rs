use std::f64::consts::PI;

use crate::cross_section::amplitude::{AmplitudeTensor, SdmPlacement};
use crate::cross_section::engine::{slashed_polarizations, CrossSectionEngine};
use crate::cross_section::result::{CrossSection, Process};
use crate::dirac::dirac_matrix::{DiracGamma, DiracMatrix};
use crate::particles::lepton::Lepton;
use crate::particles::photon::Photon;

impl CrossSectionEngine {
    /// Bremsstrahlung of a lepton in the static Coulomb field of an atom,
    /// `l -> l' gamma` with recoil momentum `q = p - p' - k` taken by the field.
    ///
    /// Returns d(sigma)/(dk dphi d^3q) in ub/GeV^4/sr, without the atomic form
    /// factor. The field couples through gamma^0, so the momenta must be given in
    /// the rest frame of the atom, and the recoil is assumed to carry no energy.
    /// The solid angle of the photon is taken about the direction of the final
    /// lepton plus photon.
    pub fn bremsstrahlung(&self, e_in: &Lepton, e_out: &Lepton, g_out: &Photon) -> CrossSection {
        let p = *e_in.momentum();
        let pf = *e_out.momentum();
        let k = *g_out.momentum();
        let mass = e_in.mass();
        let q = p - pf - k;
        let q_sqr = q.invariant_sqr();

        let ui = e_in.spinors_u();
        let uf = e_out.spinors_u();

        let initial_state = DiracMatrix::propagator(&(p - q), mass, q_sqr - 2.0 * q.scalar_prod(&p));
        let final_state = DiracMatrix::propagator(&(pf + q), mass, q_sqr + 2.0 * q.scalar_prod(&pf));
        let gamma0 = DiracMatrix::from(DiracGamma::Gamma0);
        let eps_out = slashed_polarizations(g_out, true);

        let mut amp = AmplitudeTensor::<3>::zeros();
        for gf in 0..2 {
            let chain = eps_out[gf] * initial_state * gamma0 + gamma0 * final_state * eps_out[gf];
            for hi in 0..2 {
                let psi = chain * ui[hi];
                for hf in 0..2 {
                    amp[[hi, hf, gf]] = uf[hf].scalar_prod(&psi);
                }
            }
        }

        let legs = [
            (e_in.sdm(), SdmPlacement::Incoming),
            (e_out.sdm(), SdmPlacement::Outgoing),
            (g_out.sdm(), SdmPlacement::Outgoing),
        ];
        let amp_squared = amp.contract(&legs);
        let photon_block = amp.contract_keeping(2, &legs);

        // 1/(2E) flux, final-state density, and the Coulomb propagator 1/q^4
        let kin_factor = 1.0 / (2.0 * PI * p.t()).powi(2) / (q_sqr * q_sqr);

        self.finish(Process::Bremsstrahlung, amp_squared, kin_factor, photon_block)
    }
}
