//! Lazily-initialized constants used across the library and its tests.

use once_cell::sync::Lazy;
use rug::{Complex, Float};
use super::primitive::{complex, float};

/// The imaginary unit.
pub static I: Lazy<Complex> = Lazy::new(|| complex((0, 1)));

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| float(1).exp());

pub static PI: Lazy<Float> = Lazy::new(|| float(-1).acos());
