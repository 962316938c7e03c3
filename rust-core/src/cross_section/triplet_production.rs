use std::f64::consts::PI;

use num_complex::Complex64;

use crate::cross_section::amplitude::{AmplitudeTensor, SdmPlacement};
use crate::cross_section::engine::{slashed_polarizations, CrossSectionEngine, METRIC_SIGNS};
use crate::cross_section::result::{CrossSection, Process};
use crate::dirac::dirac_matrix::DiracMatrix;
use crate::particles::lepton::Lepton;
use crate::particles::photon::Photon;

impl CrossSectionEngine {
    /// Triplet production `gamma l0 -> l1+ l2 l3` on a free target lepton.
    ///
    /// Returns d(sigma)/(dE+ dphi+ d^3q) in ub/GeV^4/sr, where E+ and phi+ are the
    /// energy and azimuth of the antilepton about `p1 + p2`. The calculation is
    /// covariant and may be done in any frame; the atomic form factor is not
    /// included. All leptons take the mass of `e_in`.
    ///
    /// Eight diagrams contribute: the Compton-like pair with Dalitz splitting of
    /// the final photon (CD), the Bethe-Heitler-like pair (BH), and their clones
    /// with the two final leptons exchanged, which enter with opposite sign.
    ///
    /// # Arguments
    /// * `g_in` - incoming photon
    /// * `e_in` - target lepton (0)
    /// * `p_out` - produced antilepton (1)
    /// * `e_out2`, `e_out3` - the two final leptons (2, 3)
    pub fn triplet_production(
        &self,
        g_in: &Photon,
        e_in: &Lepton,
        p_out: &Lepton,
        e_out2: &Lepton,
        e_out3: &Lepton,
    ) -> CrossSection {
        let k = *g_in.momentum();
        let p0 = *e_in.momentum();
        let p1 = *p_out.momentum();
        let p2 = *e_out2.momentum();
        let p3 = *e_out3.momentum();
        let mass = e_in.mass();

        let u0 = e_in.spinors_u();
        let v1 = p_out.spinors_v();
        let u2 = e_out2.spinors_u();
        let u3 = e_out3.spinors_u();

        // lepton propagators, a/b for absorption before/after the virtual photon vertex
        let cd2_a = DiracMatrix::propagator(&(k + p0), mass, 2.0 * k.scalar_prod(&p0));
        let cd2_b = DiracMatrix::propagator(&(p2 - k), mass, -2.0 * k.scalar_prod(&p2));
        let bh2_a = DiracMatrix::propagator(&(k - p1), mass, -2.0 * k.scalar_prod(&p1));
        let bh2_b = DiracMatrix::propagator(&(p3 - k), mass, -2.0 * k.scalar_prod(&p3));
        let (cd3_a, cd3_b) = (cd2_a, bh2_b);
        let (bh3_a, bh3_b) = (bh2_a, cd2_b);

        // virtual photon propagators
        let photon_cd2 = 1.0 / (p1 + p3).invariant_sqr();
        let photon_bh2 = 1.0 / (p0 - p2).invariant_sqr();
        let photon_cd3 = 1.0 / (p1 + p2).invariant_sqr();
        let photon_bh3 = 1.0 / (p0 - p3).invariant_sqr();

        let gammas = DiracMatrix::gammas();
        let eps_in = slashed_polarizations(g_in, false);

        // axes: l0, l1+, l2, l3, photon
        let mut amp = AmplitudeTensor::<5>::zeros();
        for gi in 0..2 {
            let eps = eps_in[gi];
            for (mu, gamma) in gammas.iter().enumerate() {
                let g = *gamma;
                let cd2 = (g * cd2_a * eps + eps * cd2_b * g) * photon_cd2;
                let bh2 = (g * bh2_a * eps + eps * bh2_b * g) * photon_bh2;
                let cd3 = (g * cd3_a * eps + eps * cd3_b * g) * photon_cd3;
                let bh3 = (g * bh3_a * eps + eps * bh3_b * g) * photon_bh3;
                let sign = Complex64::new(METRIC_SIGNS[mu], 0.0);

                for h0 in 0..2 {
                    for h1 in 0..2 {
                        let g_v1 = g * v1[h1];
                        let g_u0 = g * u0[h0];
                        let cd2_u0 = cd2 * u0[h0];
                        let cd3_u0 = cd3 * u0[h0];
                        let bh2_v1 = bh2 * v1[h1];
                        let bh3_v1 = bh3 * v1[h1];
                        for h2 in 0..2 {
                            for h3 in 0..2 {
                                let term = u3[h3].scalar_prod(&g_v1) * u2[h2].scalar_prod(&cd2_u0)
                                    - u2[h2].scalar_prod(&g_v1) * u3[h3].scalar_prod(&cd3_u0)
                                    + u2[h2].scalar_prod(&g_u0) * u3[h3].scalar_prod(&bh2_v1)
                                    - u3[h3].scalar_prod(&g_u0) * u2[h2].scalar_prod(&bh3_v1);
                                amp[[h0, h1, h2, h3, gi]] += sign * term;
                            }
                        }
                    }
                }
            }
        }

        let amp_squared = amp.contract(&[
            (e_in.sdm(), SdmPlacement::Incoming),
            (p_out.sdm(), SdmPlacement::Incoming),
            (e_out2.sdm(), SdmPlacement::Outgoing),
            (e_out3.sdm(), SdmPlacement::Outgoing),
            (g_in.sdm(), SdmPlacement::Incoming),
        ]);

        // 1/flux, three-body final-state density, (2 pi)^(4-9) and (4 pi)^3 from the couplings
        let flux = 4.0 * k.t() * (p0.length() + p0.t());
        let rho = 1.0 / (8.0 * p3.t() * (p1 + p2).length());
        let pi_factor = (2.0 * PI).powi(4 - 9) * (4.0 * PI).powi(3);
        let kin_factor = rho * pi_factor / flux;

        self.finish(Process::TripletProduction, amp_squared, kin_factor, None)
    }
}
