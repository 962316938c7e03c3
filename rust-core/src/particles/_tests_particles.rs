#[cfg(test)]
mod tests {
    use super::super::lepton::Lepton;
    use super::super::particle::Particle;
    use super::super::photon::Photon;
    use super::super::spin_density::SpinDensityMatrix;
    use crate::dirac::Helicity;
    use crate::kinematics::{Boost, FourVector, FourVectorComplex, LorentzTransform};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn photon_along(theta: f64, phi: f64, energy: f64) -> Photon {
        Photon::new(FourVector::new(
            energy,
            energy * theta.sin() * phi.cos(),
            energy * theta.sin() * phi.sin(),
            energy * theta.cos(),
        ))
    }

    #[test]
    fn test_polarization_along_z() {
        let photon = photon_along(0.0, 0.0, 2.0);
        let e0 = photon.eps(0).real();
        let e1 = photon.eps(1).real();
        assert_eq!(e0, FourVector::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(e1, FourVector::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_polarization_is_transverse_and_orthonormal() {
        for &(theta, phi) in &[(0.3, 1.1), (1.7, -2.5), (3.0, 0.2), (std::f64::consts::PI, 0.0)] {
            let photon = photon_along(theta, phi, 1.5);
            let k = FourVectorComplex::from_real(photon.momentum());
            let basis = photon.polarization_basis();
            for (j, eps) in basis.iter().enumerate() {
                assert_abs_diff_eq!(eps.scalar_prod(&k).norm(), 0.0, epsilon = 1e-14);
                assert_abs_diff_eq!(eps.t().norm(), 0.0, epsilon = 1e-15);
                assert_abs_diff_eq!(eps.scalar_prod(&eps.conj()).re, -1.0, epsilon = 1e-14);
                assert_eq!(photon.eps_star(j), eps.conj());
            }
            assert_abs_diff_eq!(basis[0].scalar_prod(&basis[1]).norm(), 0.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_polarization_index_is_lenient() {
        let photon = photon_along(0.4, 0.4, 1.0);
        assert_eq!(photon.eps(3), photon.eps(0));
    }

    #[test]
    fn test_circular_polarization() {
        let photon = photon_along(0.8, -0.6, 1.0);
        let plus = photon.circular_eps(Helicity::Plus);
        let minus = photon.circular_eps(Helicity::Minus);
        assert_abs_diff_eq!(plus.scalar_prod(&plus.conj()).re, -1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(plus.scalar_prod(&minus.conj()).norm(), 0.0, epsilon = 1e-14);
        // eps(-) = -eps(+)*
        let diff = minus + plus.conj();
        for k in 0..4 {
            assert_abs_diff_eq!(diff[k].norm(), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_photon_defaults_and_setters() {
        let mut photon = photon_along(0.0, 0.0, 1.0);
        assert_eq!(photon.sdm(), &SpinDensityMatrix::unpolarized());
        photon.set_sdm(SpinDensityMatrix::identity());
        assert_abs_diff_eq!(photon.sdm().trace(), 2.0, epsilon = 1e-15);
        photon.set_momentum(FourVector::new(3.0, 0.0, 0.0, 3.0));
        assert_eq!(photon.energy(), 3.0);
    }

    #[test]
    fn test_photon_transformed_keeps_basis_transverse() {
        let photon = photon_along(0.5, 0.5, 1.0).with_sdm(SpinDensityMatrix::basis_state(1));
        let boost = LorentzTransform::from(Boost::from_beta(0.3, 0.0, 0.4).unwrap());
        let moved = photon.transformed(&boost);
        assert_abs_diff_eq!(moved.momentum().invariant_sqr(), 0.0, epsilon = 1e-14);
        assert_eq!(moved.sdm(), photon.sdm());
        let k = FourVectorComplex::from_real(moved.momentum());
        assert_abs_diff_eq!(moved.eps(0).scalar_prod(&k).norm(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_lepton_spinors() {
        let m: f64 = 0.000511;
        let lepton = Lepton::new(FourVector::new((0.01_f64 + m * m).sqrt(), 0.0, 0.0, 0.1), m);
        let [u_plus, u_minus] = lepton.spinors_u();
        assert_eq!(u_plus.helicity(), Helicity::Plus);
        assert_eq!(u_minus.helicity(), Helicity::Minus);
        assert_relative_eq!(u_plus.scalar_prod(&u_plus).re, 2.0 * m, max_relative = 1e-6);

        let [v_plus, _] = lepton.spinors_v();
        assert_relative_eq!(v_plus.scalar_prod(&v_plus).re, -2.0 * m, max_relative = 1e-6);

        let rest = Lepton::at_rest(m);
        assert_eq!(rest.energy(), m);
        assert_eq!(rest.mass(), m);
    }

    #[test]
    fn test_particle_dispatch() {
        let photon = photon_along(0.0, 0.0, 1.0);
        let lepton = Lepton::at_rest(0.000511).with_sdm(SpinDensityMatrix::identity());

        let particles = [Particle::from(photon), Particle::from(lepton)];
        assert!(particles[0].is_photon());
        assert_eq!(particles[0].mass(), None);
        assert_eq!(particles[1].mass(), Some(0.000511));
        assert_eq!(particles[1].sdm(), &SpinDensityMatrix::identity());
        assert_eq!(particles[0].momentum(), photon.momentum());

        let boost = LorentzTransform::from(Boost::from_beta(0.0, 0.0, 0.5).unwrap());
        let moved = particles[1].transformed(&boost);
        assert_relative_eq!(moved.momentum().invariant(), 0.000511, max_relative = 1e-9);
        assert!(moved.momentum().z() < 0.0);
    }
}
