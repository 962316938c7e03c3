use std::f64::consts::PI;

use num_complex::Complex64;

use crate::cross_section::amplitude::{AmplitudeTensor, SdmPlacement};
use crate::cross_section::engine::{slashed_polarizations, CrossSectionEngine, METRIC_SIGNS};
use crate::cross_section::result::{CrossSection, Process};
use crate::dirac::dirac_matrix::DiracMatrix;
use crate::particles::lepton::Lepton;
use crate::particles::photon::Photon;

impl CrossSectionEngine {
    /// Lepton-lepton bremsstrahlung `l0 l1 -> l2 l3 gamma` off a free target lepton.
    ///
    /// Returns d(sigma)/(dk dphi d^3q) in ub/GeV^4/sr, where k and phi are the
    /// energy and azimuth of the photon about `p2 + k`. All leptons take the mass
    /// of `e_in0`; the atomic form factor is not included.
    ///
    /// Diagrams A and B radiate from the line l0 -> l2 and l1 -> l3 respectively,
    /// before (1) or after (2) the virtual photon vertex; C and D are their clones
    /// with the two final leptons exchanged, entering with opposite sign.
    pub fn ee_bremsstrahlung(
        &self,
        e_in0: &Lepton,
        e_in1: &Lepton,
        e_out2: &Lepton,
        e_out3: &Lepton,
        g_out: &Photon,
    ) -> CrossSection {
        let p0 = *e_in0.momentum();
        let p1 = *e_in1.momentum();
        let p2 = *e_out2.momentum();
        let p3 = *e_out3.momentum();
        let k = *g_out.momentum();
        let mass = e_in0.mass();

        let u0 = e_in0.spinors_u();
        let u1 = e_in1.spinors_u();
        let u2 = e_out2.spinors_u();
        let u3 = e_out3.spinors_u();

        let a1 = DiracMatrix::propagator(&(p0 - k), mass, -2.0 * k.scalar_prod(&p0));
        let a2 = DiracMatrix::propagator(&(p2 + k), mass, 2.0 * k.scalar_prod(&p2));
        let b1 = DiracMatrix::propagator(&(p1 - k), mass, -2.0 * k.scalar_prod(&p1));
        let b2 = DiracMatrix::propagator(&(p3 + k), mass, 2.0 * k.scalar_prod(&p3));
        let (c1, c2) = (a1, b2);
        let (d1, d2) = (b1, a2);

        let photon_a = 1.0 / (p1 - p3).invariant_sqr();
        let photon_b = 1.0 / (p0 - p2).invariant_sqr();
        let photon_c = 1.0 / (p1 - p2).invariant_sqr();
        let photon_d = 1.0 / (p0 - p3).invariant_sqr();

        let gammas = DiracMatrix::gammas();
        let eps_out = slashed_polarizations(g_out, true);

        // axes: l0, l1, l2, l3, photon
        let mut amp = AmplitudeTensor::<5>::zeros();
        for gf in 0..2 {
            let eps = eps_out[gf];
            for (mu, gamma) in gammas.iter().enumerate() {
                let g = *gamma;
                let chain_a = (g * a1 * eps + eps * a2 * g) * photon_a;
                let chain_b = (g * b1 * eps + eps * b2 * g) * photon_b;
                let chain_c = (g * c1 * eps + eps * c2 * g) * photon_c;
                let chain_d = (g * d1 * eps + eps * d2 * g) * photon_d;
                let sign = Complex64::new(METRIC_SIGNS[mu], 0.0);

                for h0 in 0..2 {
                    for h1 in 0..2 {
                        let g_u0 = g * u0[h0];
                        let g_u1 = g * u1[h1];
                        let a_u0 = chain_a * u0[h0];
                        let b_u1 = chain_b * u1[h1];
                        let c_u0 = chain_c * u0[h0];
                        let d_u1 = chain_d * u1[h1];
                        for h2 in 0..2 {
                            for h3 in 0..2 {
                                let term = u3[h3].scalar_prod(&g_u1) * u2[h2].scalar_prod(&a_u0)
                                    + u2[h2].scalar_prod(&g_u0) * u3[h3].scalar_prod(&b_u1)
                                    - u2[h2].scalar_prod(&g_u1) * u3[h3].scalar_prod(&c_u0)
                                    - u3[h3].scalar_prod(&g_u0) * u2[h2].scalar_prod(&d_u1);
                                amp[[h0, h1, h2, h3, gf]] += sign * term;
                            }
                        }
                    }
                }
            }
        }

        let amp_squared = amp.contract(&[
            (e_in0.sdm(), SdmPlacement::Incoming),
            (e_in1.sdm(), SdmPlacement::Incoming),
            (e_out2.sdm(), SdmPlacement::Outgoing),
            (e_out3.sdm(), SdmPlacement::Outgoing),
            (g_out.sdm(), SdmPlacement::Outgoing),
        ]);

        // 1/(4 E0 E1) flux times the final-state density
        let kin_factor = 1.0 / (2.0 * PI * p0.t()).powi(2) / (4.0 * p1.t() * p3.t());

        self.finish(Process::EeBremsstrahlung, amp_squared, kin_factor, None)
    }
}
