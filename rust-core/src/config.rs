// Constants
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

// Tolerances
pub const FOUR_VECTOR_RESOLUTION: f64 = 1e-10; // Relative resolution for vector equality and null invariants
pub const AMPLITUDE_SANITY_TOLERANCE: f64 = 1e-8; // Allowed |Im|/|ampSquared| after the spin sums
pub const POLARIZATION_TOLERANCE: f64 = 1e-10; // Hermiticity / transversality checks

// Physical constants
pub const ALPHA_QED: f64 = 7.297_352_5693e-3; // Fine structure constant
pub const HBARC_SQR_MICROBARN_GEV2: f64 = 389.379_372_1; // (hbar c)^2 in microbarn GeV^2
pub const ELECTRON_MASS_GEV: f64 = 0.000_510_998_950;

/// Coupling and unit-conversion configuration consumed by the cross-section engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// QED coupling constant at zero momentum transfer
    pub alpha_qed: f64,
    /// (hbar c)^2 in the output area unit times GeV^2
    pub hbarc_sqr: f64,
}

impl PhysicalConstants {
    pub fn new(alpha_qed: f64, hbarc_sqr: f64) -> Self {
        Self {
            alpha_qed,
            hbarc_sqr,
        }
    }

    /// Load constants from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let constants: Self = serde_json::from_str(&json)?;
        Ok(constants)
    }

    /// Save constants to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::new(ALPHA_QED, HBARC_SQR_MICROBARN_GEV2)
    }
}
