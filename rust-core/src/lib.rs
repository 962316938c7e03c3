
//! Tree-level QED cross section library
//!
//! This library provides a relativistic spin-algebra engine (four-vectors, Lorentz
//! transforms, Dirac matrices and helicity spinors) and the leading-order differential
//! cross sections built on it: Compton scattering, bremsstrahlung, pair production,
//! triplet production and lepton-lepton bremsstrahlung.

pub mod config;
pub mod cross_section;
pub mod dirac;
pub mod error;
pub mod kinematics;
pub mod particles;

pub use error::QedError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, QedError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
