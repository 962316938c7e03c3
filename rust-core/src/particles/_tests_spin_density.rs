#[cfg(test)]
mod tests {
    use super::super::spin_density::SpinDensityMatrix;
    use approx::assert_abs_diff_eq;
    use nalgebra::Matrix2;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_standard_matrices() {
        assert_abs_diff_eq!(SpinDensityMatrix::identity().trace(), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(SpinDensityMatrix::unpolarized().trace(), 1.0, epsilon = 1e-15);
        assert_eq!(SpinDensityMatrix::default(), SpinDensityMatrix::unpolarized());
        assert_eq!(
            SpinDensityMatrix::unpolarized() * 2.0,
            SpinDensityMatrix::identity()
        );
    }

    #[test]
    fn test_pure_states_add_to_identity() {
        let sum = SpinDensityMatrix::basis_state(0) + SpinDensityMatrix::basis_state(1);
        assert_eq!(sum, SpinDensityMatrix::identity());

        let s = 0.5_f64.sqrt();
        let plus = SpinDensityMatrix::pure(c(s, 0.0), c(0.0, s));
        let minus = SpinDensityMatrix::pure(c(s, 0.0), c(0.0, -s));
        let total = (plus + minus).matrix() - Matrix2::identity();
        assert!(total.iter().all(|z| z.norm() < 1e-15));
    }

    #[test]
    fn test_pure_state_is_projector() {
        let sdm = SpinDensityMatrix::pure(c(0.6, 0.0), c(0.0, 0.8));
        assert!(sdm.is_hermitian(1e-15));
        assert_abs_diff_eq!(sdm.trace(), 1.0, epsilon = 1e-15);
        let square = sdm.matrix() * sdm.matrix();
        assert!((square - sdm.matrix()).iter().all(|z| z.norm() < 1e-15));
        assert_abs_diff_eq!(sdm.polarization(), 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(sdm[(0, 1)].im, -0.48, epsilon = 1e-15);
    }

    #[test]
    fn test_stokes_parameters() {
        let unpolarized = SpinDensityMatrix::from_stokes(0.0, 0.0, 0.0);
        assert_eq!(unpolarized, SpinDensityMatrix::unpolarized());
        assert_abs_diff_eq!(unpolarized.polarization(), 0.0, epsilon = 1e-15);

        assert_eq!(
            SpinDensityMatrix::from_stokes(1.0, 0.0, 0.0),
            SpinDensityMatrix::basis_state(0)
        );
        assert_eq!(
            SpinDensityMatrix::from_stokes(-1.0, 0.0, 0.0),
            SpinDensityMatrix::basis_state(1)
        );

        let s = 0.5_f64.sqrt();
        let circular = SpinDensityMatrix::from_stokes(0.0, 0.0, 1.0);
        let expected = SpinDensityMatrix::pure(c(s, 0.0), c(0.0, s));
        assert!((circular.matrix() - expected.matrix())
            .iter()
            .all(|z| z.norm() < 1e-15));

        let partial = SpinDensityMatrix::from_stokes(0.3, 0.4, 0.0);
        assert_abs_diff_eq!(partial.polarization(), 0.5, epsilon = 1e-12);
        assert!(partial.is_hermitian(1e-15));
    }

    #[test]
    fn test_efficiencies_and_validation() {
        let sdm = SpinDensityMatrix::diagonal(0.9, 0.2);
        assert_abs_diff_eq!(sdm.trace(), 1.1, epsilon = 1e-15);
        assert!(sdm.validate());

        let skewed = SpinDensityMatrix::new(Matrix2::new(c(1.0, 0.0), c(0.5, 0.0), c(0.0, 0.0), c(1.0, 0.0)));
        assert!(!skewed.is_hermitian(1e-10));
        assert!(!skewed.validate());
    }

    #[test]
    fn test_lenient_indexing() {
        let sdm = SpinDensityMatrix::diagonal(0.7, 0.3);
        assert_eq!(sdm[(1, 1)], c(0.3, 0.0));
        assert_eq!(sdm[(2, 0)], c(0.7, 0.0));
        assert_eq!(SpinDensityMatrix::basis_state(5), SpinDensityMatrix::basis_state(0));
    }

    #[test]
    fn test_serde_round_trip() {
        let sdm = SpinDensityMatrix::from_stokes(0.1, -0.2, 0.6);
        let json = serde_json::to_string(&sdm).unwrap();
        let back: SpinDensityMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sdm);
    }
}
