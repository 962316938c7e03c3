use serde::{Deserialize, Serialize};

use crate::kinematics::four_vector::FourVector;
use crate::kinematics::lorentz_transform::LorentzTransform;
use crate::particles::lepton::Lepton;
use crate::particles::photon::Photon;
use crate::particles::spin_density::SpinDensityMatrix;

/// Any external particle of a QED process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Particle {
    Photon(Photon),
    Lepton(Lepton),
}

impl Particle {
    pub fn momentum(&self) -> &FourVector {
        match self {
            Particle::Photon(photon) => photon.momentum(),
            Particle::Lepton(lepton) => lepton.momentum(),
        }
    }

    /// Rest mass, `None` for a photon.
    pub fn mass(&self) -> Option<f64> {
        match self {
            Particle::Photon(_) => None,
            Particle::Lepton(lepton) => Some(lepton.mass()),
        }
    }

    pub fn sdm(&self) -> &SpinDensityMatrix {
        match self {
            Particle::Photon(photon) => photon.sdm(),
            Particle::Lepton(lepton) => lepton.sdm(),
        }
    }

    pub fn is_photon(&self) -> bool {
        matches!(self, Particle::Photon(_))
    }

    pub fn transformed(&self, xform: &LorentzTransform) -> Particle {
        match self {
            Particle::Photon(photon) => Particle::Photon(photon.transformed(xform)),
            Particle::Lepton(lepton) => Particle::Lepton(lepton.transformed(xform)),
        }
    }
}

impl From<Photon> for Particle {
    fn from(photon: Photon) -> Self {
        Particle::Photon(photon)
    }
}

impl From<Lepton> for Particle {
    fn from(lepton: Lepton) -> Self {
        Particle::Lepton(lepton)
    }
}
