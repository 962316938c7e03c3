// Kinematics module: three-vectors, Minkowski four-vectors and Lorentz transformations
// This module provides the relativistic vector algebra underneath the spin algebra

// ======================== MODULE DECLARATIONS ========================
pub mod boost;
pub mod four_vector;
pub mod four_vector_complex;
pub mod lorentz_transform;
pub mod rotation;
pub mod three_vector;


// ======================== VECTORS ========================
pub use three_vector::ThreeVector; // struct - real 3-vector with magnitude-scaled tolerance
// ThreeVector impl methods:
//   new(x, y, z) -> Self                            - creates vector from components
//   dot(&self, other) -> f64                        - Euclidean dot product
//   cross(&self, other) -> ThreeVector              - cross product
//   length(&self) -> f64                            - magnitude
//   normalize(&self, length) -> ThreeVector         - rescale to given length
//   theta(&self) / phi(&self) -> f64                - polar / azimuthal angle
//   resolution(&self) -> f64                        - equality tolerance

pub use four_vector::FourVector; // struct - real four-vector (t, x, y, z), metric (+,-,-,-)
// FourVector impl methods:
//   new(t, x, y, z) -> Self                         - creates vector from components
//   from_time_space(t, &ThreeVector) -> Self        - creates vector from time and space parts
//   scalar_prod(&self, other) -> f64               - Minkowski dot product
//   invariant_sqr(&self) -> f64                     - t^2 - |r|^2
//   invariant(&self) -> f64                         - proper mass (lenient: -1 on spacelike input)
//   try_invariant(&self) -> Result<f64>             - proper mass (strict)
//   transform(&mut self, &LorentzTransform) -> &mut Self - applies transform in place
//   boost(&mut self, &Boost) -> &mut Self           - applies boost in place
//   boost_to_rest(&mut self, p) -> Result<&mut Self> - moves into the rest frame of p
//   boost_from_rest(&mut self, p) -> Result<&mut Self> - moves out of the rest frame of p

pub use four_vector_complex::FourVectorComplex; // struct - complex four-vector (polarization vectors)
// FourVectorComplex impl methods:
//   from_real(&FourVector) -> Self                  - promotes a real vector
//   conj(&self) -> FourVectorComplex                - complex conjugate
//   scalar_prod(&self, other) -> Complex64          - bilinear Minkowski product

// ======================== TRANSFORMATIONS ========================
pub use lorentz_transform::{
    metric,           // fn() -> Matrix4<f64> - Minkowski metric diag(1,-1,-1,-1)
    LorentzTransform, // struct - general 4x4 Lorentz operator
};
// LorentzTransform impl methods:
//   identity() -> Self                              - identity transform
//   compose(&self, other) -> LorentzTransform       - matrix product (other applied first)
//   invert(&mut self) -> &mut Self                  - group inverse g M^T g
//   apply(&self, &FourVector) -> FourVector         - transform a vector
//   is_lorentz(&self, tol) -> bool                  - checks M^T g M = g

pub use boost::Boost; // struct - pure boost parameterized by velocity
// Boost impl methods:
//   from_beta(bx, by, bz) -> Result<Self>           - boost from velocity components
//   along(axis, beta) -> Result<Self>               - boost along an axis
//   from_momentum(p) -> Result<Self>                - boost into the rest frame of p
//   beta(&self) -> ThreeVector / gamma(&self) -> f64 - velocity and Lorentz factor
//   inverse(&self) -> Boost                         - opposite velocity

pub use rotation::Rotation; // struct - spatial rotation
// Rotation impl methods:
//   from_axis_angle(axis, angle) -> Result<Self>    - axis-angle form
//   from_euler(phi, theta, psi) -> Self             - z-x-z Euler angles
//   get_axis(&self) -> (ThreeVector, f64)           - unit axis and angle
//   get_euler(&self) -> (f64, f64, f64)             - z-x-z Euler angles
//   to_transform(&self) -> LorentzTransform         - embeds into a Lorentz transform
