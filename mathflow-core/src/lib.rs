//! # MathFlow Core
//!
//! Fast polynomial approximations of transcendental functions with known,
//! bounded error, uniform over scalars and SIMD batches.
//!
//! ## Design Philosophy
//!
//! **The order IS a type parameter.**
//!
//! Every approximation takes its polynomial order as a `const` generic, so
//! an unsupported order is a compile error, and the order appears at the
//! call site where the accuracy/cost trade-off is made:
//!
//! ```
//! use mathflow_core::{sin, tanh, Batch};
//!
//! let y = sin::<9, f32>(1.0_f32);
//! assert!((y - 0.8414710_f32).abs() < 1e-5);
//!
//! let v = Batch::<f32>::from_array([0.5, -0.5, 2.0, -2.0]);
//! let t = tanh::<7, _>(v).to_array();
//! assert!((t[0] + t[1]).abs() < 1e-6);
//! ```
//!
//! Batch lanes follow the same code path as scalars, so per-lane results
//! track the scalar results of the same element type.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod backends;
/// SIMD batch type and backend dispatch.
pub mod batch;
/// The scalar-or-batch abstraction every approximation is generic over.
pub mod lane;
/// The approximation functions.
pub mod ops;

pub use batch::Batch;
pub use lane::{BitLane, Lane};

pub use ops::hyperbolic::{cosh, sinh, sinh_cosh};
pub use ops::inverse_hyperbolic::{acosh, asinh, atanh};
pub use ops::inverse_trig::{acos, asin, atan};
pub use ops::log::{log, log10, log2, log_base};
pub use ops::polylog::li2;
pub use ops::pow::{exp, exp10, exp2, pow, Base10, Base2, BaseE, PowBase};
pub use ops::sigmoid::{sigmoid, sigmoid_exp};
pub use ops::tanh::tanh;
pub use ops::trig::{
    cos, cos_mpi_pi, cos_turns, cos_turns_mhalf_half, sin, sin_mpi_pi, sin_turns,
    sin_turns_mhalf_half, tan, tan_mhalfpi_halfpi,
};
pub use ops::wright_omega::wright_omega;
