#[cfg(test)]
mod tests {
    use super::super::dirac_matrix::{DiracGamma, DiracMatrix};
    use crate::kinematics::{FourVector, FourVectorComplex};
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    const METRIC: [f64; 4] = [1.0, -1.0, -1.0, -1.0];

    #[test]
    fn test_clifford_relation() {
        let gammas = DiracMatrix::gammas();
        for mu in 0..4 {
            for nu in 0..4 {
                let anti = gammas[mu].anticommutator(&gammas[nu]);
                let expected = if mu == nu {
                    DiracMatrix::identity() * (2.0 * METRIC[mu])
                } else {
                    DiracMatrix::zero()
                };
                assert_abs_diff_eq!((anti - expected).amax(), 0.0, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_gamma5() {
        let g5 = DiracMatrix::from(DiracGamma::Gamma5);
        let [g0, g1, g2, g3] = DiracMatrix::gammas();
        let product = g0 * g1 * g2 * g3 * Complex64::new(0.0, 1.0);
        assert_abs_diff_eq!((product - g5).amax(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!((g5 * g5 - DiracMatrix::identity()).amax(), 0.0, epsilon = 1e-15);
        for g in DiracMatrix::gammas() {
            assert_abs_diff_eq!(g5.anticommutator(&g).amax(), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_gamma_lookup() {
        assert_eq!(DiracMatrix::gamma(2), DiracMatrix::from(DiracGamma::Gamma2));
        assert_eq!(DiracMatrix::gamma(5), DiracMatrix::from(DiracGamma::Gamma5));
        // lenient fallback
        assert_eq!(DiracMatrix::gamma(4), DiracMatrix::from(DiracGamma::Gamma0));
        assert_eq!(DiracGamma::from_index(7), None);
    }

    #[test]
    fn test_traces() {
        let gammas = DiracMatrix::gammas();
        assert_abs_diff_eq!(DiracMatrix::identity().trace().re, 4.0, epsilon = 1e-15);
        for mu in 0..4 {
            assert_abs_diff_eq!(gammas[mu].trace().norm(), 0.0, epsilon = 1e-15);
            for nu in 0..4 {
                let expected = if mu == nu { 4.0 * METRIC[mu] } else { 0.0 };
                let tr = (gammas[mu] * gammas[nu]).trace();
                assert_abs_diff_eq!(tr.re, expected, epsilon = 1e-15);
                assert_abs_diff_eq!(tr.im, 0.0, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_slash_squares_to_invariant() {
        let p = FourVector::new(3.0, 0.5, -1.2, 2.0);
        let ps = DiracMatrix::slash(&p);
        let expected = DiracMatrix::identity() * p.invariant_sqr();
        assert_abs_diff_eq!((ps * ps - expected).amax(), 0.0, epsilon = 1e-13);

        let promoted = DiracMatrix::slash_complex(&FourVectorComplex::from_real(&p));
        assert_abs_diff_eq!((promoted - ps).amax(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_slash_trace_gives_scalar_product() {
        let a = FourVector::new(2.0, 0.1, 0.4, -0.3);
        let b = FourVector::new(1.0, -0.7, 0.2, 0.5);
        let tr = (DiracMatrix::slash(&a) * DiracMatrix::slash(&b)).trace();
        assert_abs_diff_eq!(tr.re, 4.0 * a.scalar_prod(&b), epsilon = 1e-13);
    }

    #[test]
    fn test_propagator_inverts_denominator() {
        let m = 0.000511;
        let p = FourVector::new(1.0, 0.3, 0.0, 0.6);
        let denominator = p.invariant_sqr() - m * m;
        let propagator = DiracMatrix::propagator(&p, m, denominator);
        // (p-slash - m)(p-slash + m) / (p^2 - m^2) = 1
        let product = (DiracMatrix::slash(&p) + (-m)) * propagator;
        assert_abs_diff_eq!(
            (product - DiracMatrix::identity()).amax(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_adjoints() {
        for g in DiracMatrix::gammas() {
            assert_abs_diff_eq!((g.bar() - g).amax(), 0.0, epsilon = 1e-15);
        }
        let g0 = DiracMatrix::from(DiracGamma::Gamma0);
        let g2 = DiracMatrix::from(DiracGamma::Gamma2);
        assert_eq!(g0.dagger(), g0);
        assert_eq!(g2.dagger(), -g2);
    }

    #[test]
    fn test_arithmetic() {
        let g1 = DiracMatrix::gamma(1);
        let mut acc = DiracMatrix::zero();
        acc += g1;
        acc += g1;
        acc -= g1;
        acc *= 4.0;
        acc /= 2.0;
        assert_abs_diff_eq!((acc - 2.0 * g1).amax(), 0.0, epsilon = 1e-15);

        let shifted = DiracMatrix::zero() + 3.0;
        assert_abs_diff_eq!(shifted.trace().re, 12.0, epsilon = 1e-15);
        assert_eq!(shifted[(1, 1)], Complex64::new(3.0, 0.0));
        assert_eq!(shifted[(0, 1)], Complex64::new(0.0, 0.0));

        let mut squared = g1;
        squared *= g1;
        assert_abs_diff_eq!(
            (squared + DiracMatrix::identity()).amax(),
            0.0,
            epsilon = 1e-15
        );
    }
}
