use crate::cross_section::amplitude::{AmplitudeTensor, SdmPlacement};
use crate::cross_section::engine::{slashed_polarizations, CrossSectionEngine};
use crate::cross_section::result::{CrossSection, Process};
use crate::dirac::dirac_matrix::DiracMatrix;
use crate::particles::lepton::Lepton;
use crate::particles::photon::Photon;

impl CrossSectionEngine {
    /// Compton scattering `gamma l -> gamma' l'` off a free lepton.
    ///
    /// Returns d(sigma)/d(Omega) of the scattered photon in ub/sr, with the solid
    /// angle measured in whatever frame the momenta are given in. Both leptons are
    /// assumed to have the mass of `e_in`.
    ///
    /// # Arguments
    /// * `g_in` - incoming photon, SDM averaged or selected over its polarizations
    /// * `e_in` - incoming lepton
    /// * `g_out` - scattered photon, SDM acting as detection efficiency
    /// * `e_out` - recoil lepton
    pub fn compton(&self, g_in: &Photon, e_in: &Lepton, g_out: &Photon, e_out: &Lepton) -> CrossSection {
        let k = *g_in.momentum();
        let p = *e_in.momentum();
        let kf = *g_out.momentum();
        let pf = *e_out.momentum();
        let mass = e_in.mass();

        let ui = e_in.spinors_u();
        let uf = e_out.spinors_u();

        // s- and u-channel lepton propagators
        let s_channel = DiracMatrix::propagator(&(p + k), mass, 2.0 * p.scalar_prod(&k));
        let u_channel = DiracMatrix::propagator(&(p - kf), mass, -2.0 * p.scalar_prod(&kf));

        let eps_in = slashed_polarizations(g_in, false);
        let eps_out = slashed_polarizations(g_out, true);

        let mut amp = AmplitudeTensor::<4>::zeros();
        for gi in 0..2 {
            for gf in 0..2 {
                let chain = eps_out[gf] * s_channel * eps_in[gi] + eps_in[gi] * u_channel * eps_out[gf];
                for hi in 0..2 {
                    let psi = chain * ui[hi];
                    for hf in 0..2 {
                        amp[[hi, hf, gi, gf]] = uf[hf].scalar_prod(&psi);
                    }
                }
            }
        }

        let amp_squared = amp.contract(&[
            (e_in.sdm(), SdmPlacement::Incoming),
            (e_out.sdm(), SdmPlacement::Outgoing),
            (g_in.sdm(), SdmPlacement::Incoming),
            (g_out.sdm(), SdmPlacement::Outgoing),
        ]);

        // 1/flux, final-state density and two powers of 4 pi absorbed into alpha^2
        let flux = 4.0 * k.t() * (p.length() + p.t());
        let rho = kf.t() * kf.t() / pf.scalar_prod(&kf) / 4.0;
        let kin_factor = 4.0 * rho / flux;

        self.finish(Process::Compton, amp_squared, kin_factor, None)
    }
}
