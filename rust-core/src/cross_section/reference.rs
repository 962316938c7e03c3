// Closed-form results used to cross-check the spin-algebra amplitudes

use crate::config::PhysicalConstants;
use crate::kinematics::four_vector::FourVector;

/// Klein-Nishina cross section d(sigma)/d(Omega) in ub/sr for an unpolarized
/// photon of energy `k_in` scattering to `k_out` at angle `cos_theta` off a
/// lepton of mass `mass` at rest.
pub fn klein_nishina(
    k_in: f64,
    k_out: f64,
    cos_theta: f64,
    mass: f64,
    constants: &PhysicalConstants,
) -> f64 {
    let ratio = k_out / k_in;
    let sin_sqr = 1.0 - cos_theta * cos_theta;
    let r_e = constants.alpha_qed / mass;
    constants.hbarc_sqr * r_e * r_e / 2.0 * ratio * ratio * (ratio + 1.0 / ratio - sin_sqr)
}

/// Scattered photon energy for Compton scattering off a lepton at rest.
pub fn compton_energy(k_in: f64, cos_theta: f64, mass: f64) -> f64 {
    k_in / (1.0 + k_in / mass * (1.0 - cos_theta))
}

/// `s = (a + b)^2`
pub fn mandelstam_s(a: &FourVector, b: &FourVector) -> f64 {
    (*a + *b).invariant_sqr()
}

/// `t = (a - c)^2`
pub fn mandelstam_t(a: &FourVector, c: &FourVector) -> f64 {
    (*a - *c).invariant_sqr()
}

/// `u = (a - d)^2`
pub fn mandelstam_u(a: &FourVector, d: &FourVector) -> f64 {
    (*a - *d).invariant_sqr()
}
