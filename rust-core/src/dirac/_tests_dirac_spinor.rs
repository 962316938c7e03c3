#[cfg(test)]
mod tests {
    use super::super::dirac_matrix::DiracMatrix;
    use super::super::dirac_spinor::{DiracSpinor, Helicity, SpinorKind};
    use crate::kinematics::{Boost, FourVector, ThreeVector};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Matrix2;
    use num_complex::Complex64;

    const MASS: f64 = 0.000511;

    fn on_shell(p: ThreeVector, m: f64) -> FourVector {
        FourVector::from_time_space((p.length_sqr() + m * m).sqrt(), &p)
    }

    fn sample_momenta() -> Vec<FourVector> {
        vec![
            FourVector::new(MASS, 0.0, 0.0, 0.0),
            on_shell(ThreeVector::new(0.0, 0.0, 0.003), MASS),
            on_shell(ThreeVector::new(0.2, -0.5, 0.1), MASS),
            on_shell(ThreeVector::new(0.0, 0.0, -0.8), MASS),
            on_shell(ThreeVector::new(0.01, 0.02, -0.03), 0.105),
        ]
    }

    #[test]
    fn test_helicity_basics() {
        assert_eq!(Helicity::Plus.value(), 0.5);
        assert_eq!(Helicity::Minus.sign(), -1.0);
        assert_eq!(Helicity::Minus.index(), 1);
        assert_eq!(Helicity::Plus.flip(), Helicity::Minus);
        assert_eq!(Helicity::BOTH[0], Helicity::Plus);
        assert_eq!(Helicity::Plus.to_string(), "+1/2");
    }

    #[test]
    fn test_normalization() {
        for p in sample_momenta() {
            let m = p.invariant();
            for h in Helicity::BOTH {
                let u = DiracSpinor::state_u(&p, h);
                let v = DiracSpinor::state_v(&p, h);
                assert_relative_eq!(u.scalar_prod(&u).re, 2.0 * m, max_relative = 1e-6);
                assert_relative_eq!(v.scalar_prod(&v).re, -2.0 * m, max_relative = 1e-6);
                assert_eq!(u.kind(), SpinorKind::U);
                assert_eq!(v.kind(), SpinorKind::V);
                assert_eq!(u.helicity(), h);
            }
        }
    }

    #[test]
    fn test_helicity_states_orthogonal() {
        for p in sample_momenta() {
            let scale = p.t();
            let up = DiracSpinor::state_u(&p, Helicity::Plus);
            let um = DiracSpinor::state_u(&p, Helicity::Minus);
            let vp = DiracSpinor::state_v(&p, Helicity::Plus);
            let vm = DiracSpinor::state_v(&p, Helicity::Minus);
            assert_abs_diff_eq!(up.scalar_prod(&um).norm(), 0.0, epsilon = 1e-12 * scale);
            assert_abs_diff_eq!(vp.scalar_prod(&vm).norm(), 0.0, epsilon = 1e-12 * scale);
            // u-bar v = 0 for spinors of the same momentum
            for h in Helicity::BOTH {
                let u = DiracSpinor::state_u(&p, h);
                for h2 in Helicity::BOTH {
                    let v = DiracSpinor::state_v(&p, h2);
                    assert_abs_diff_eq!(u.scalar_prod(&v).norm(), 0.0, epsilon = 1e-6 * scale);
                }
            }
        }
    }

    #[test]
    fn test_signed_zero_on_z_axis() {
        let e = (0.64 + MASS * MASS).sqrt();
        let axis_momenta = [
            (FourVector::new(e, 0.0, 0.0, -0.8), FourVector::new(e, -0.0, -0.0, -0.8)),
            (FourVector::new(e, 0.0, 0.0, -0.8), FourVector::new(e, 0.0, -0.0, -0.8)),
            (FourVector::new(e, 0.0, 0.0, 0.8), FourVector::new(e, -0.0, -0.0, 0.8)),
            (FourVector::new(MASS, 0.0, 0.0, 0.0), FourVector::new(MASS, -0.0, -0.0, -0.0)),
        ];
        for (p, q) in axis_momenta {
            for h in Helicity::BOTH {
                assert_eq!(
                    DiracSpinor::state_u(&p, h).components(),
                    DiracSpinor::state_u(&q, h).components()
                );
                assert_eq!(
                    DiracSpinor::state_v(&p, h).components(),
                    DiracSpinor::state_v(&q, h).components()
                );
            }
        }
    }

    #[test]
    fn test_dirac_equation() {
        for p in sample_momenta() {
            let m = p.invariant();
            let ps = DiracMatrix::slash(&p);
            for h in Helicity::BOTH {
                let u = DiracSpinor::state_u(&p, h);
                let v = DiracSpinor::state_v(&p, h);
                let du = (ps + (-m)) * u;
                let dv = (ps + m) * v;
                for k in 0..4 {
                    assert_abs_diff_eq!(du[k].norm(), 0.0, epsilon = 1e-9 * p.t());
                    assert_abs_diff_eq!(dv[k].norm(), 0.0, epsilon = 1e-9 * p.t());
                }
            }
        }
    }

    #[test]
    fn test_completeness() {
        // sum_h u u-bar = p-slash + m, sum_h v v-bar = p-slash - m
        let p = on_shell(ThreeVector::new(0.3, 0.1, -0.2), 0.2);
        let m = p.invariant();
        let mut sum_u = DiracMatrix::zero();
        let mut sum_v = DiracMatrix::zero();
        let g0 = DiracMatrix::gamma(0);
        for h in Helicity::BOTH {
            let u = DiracSpinor::state_u(&p, h).components();
            let v = DiracSpinor::state_v(&p, h).components();
            sum_u += DiracMatrix::from_matrix(u * u.adjoint()) * g0;
            sum_v += DiracMatrix::from_matrix(v * v.adjoint()) * g0;
        }
        let ps = DiracMatrix::slash(&p);
        assert_abs_diff_eq!((sum_u - (ps + m)).amax(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((sum_v - (ps + (-m))).amax(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_helicity_eigenstate() {
        // upper two components of u are eigenvectors of sigma . p-hat
        let p = on_shell(ThreeVector::new(0.4, 0.3, 0.5), MASS);
        let n = p.three_vector().unit();
        let i = Complex64::new(0.0, 1.0);
        let one = Complex64::new(1.0, 0.0);
        let sigma_n = Matrix2::new(
            one * n.z(),
            one * n.x() - i * n.y(),
            one * n.x() + i * n.y(),
            -one * n.z(),
        );
        for h in Helicity::BOTH {
            let u = DiracSpinor::state_u(&p, h).components();
            let upper = nalgebra::Vector2::new(u[0], u[1]);
            let residual = sigma_n * upper - upper * Complex64::new(h.sign(), 0.0);
            assert_abs_diff_eq!(residual.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bilinear_current_is_covariant() {
        // u-bar gamma^mu u = 2 p^mu for equal helicities
        let p = on_shell(ThreeVector::new(-0.1, 0.2, 0.25), MASS);
        let gammas = DiracMatrix::gammas();
        for h in Helicity::BOTH {
            let u = DiracSpinor::state_u(&p, h);
            let current: Vec<f64> = gammas
                .iter()
                .map(|g| u.scalar_prod(&(*g * u)).re)
                .collect();
            assert_relative_eq!(current[0], 2.0 * p.t(), max_relative = 1e-10);
            assert_relative_eq!(current[1], 2.0 * p.x(), max_relative = 1e-10);
            assert_relative_eq!(current[2], 2.0 * p.y(), max_relative = 1e-10);
            assert_relative_eq!(current[3], 2.0 * p.z(), max_relative = 1e-10);
        }
    }

    #[test]
    fn test_scalar_density_is_boost_invariant() {
        let p = on_shell(ThreeVector::new(0.0, 0.0, 0.002), MASS);
        let boost = Boost::from_beta(0.2, 0.1, -0.3).unwrap();
        let mut q = p;
        q.boost(&boost);
        let u = DiracSpinor::state_u(&p, Helicity::Plus);
        let w = DiracSpinor::state_u(&q, Helicity::Plus);
        assert_relative_eq!(
            u.scalar_prod(&u).re,
            w.scalar_prod(&w).re,
            max_relative = 1e-6
        );
        assert_eq!(w.momentum(), &q);
    }
}
