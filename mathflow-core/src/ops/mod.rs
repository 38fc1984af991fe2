//! Polynomial approximations of transcendental functions.
//!
//! Every function is generic over [`Lane`](crate::lane::Lane), so the same
//! code path serves `f32`, `f64`, and [`Batch`](crate::batch::Batch) of
//! either, and over a `const ORDER` selecting the polynomial degree.
//! Invalid orders fail at compile time.

pub mod hyperbolic;
pub mod inverse_hyperbolic;
pub mod inverse_trig;
pub mod log;
pub mod polylog;
pub mod pow;
pub mod sigmoid;
pub mod tanh;
pub mod trig;
pub mod wright_omega;
