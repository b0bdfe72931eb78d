use nalgebra as na;

/// Decimal places each curve coordinate is rounded to.
pub const PRECISION: i32 = 10;

// Beyond this magnitude scaling by 10^digits loses the integer part
const ROUND_LIMIT: f64 = 1e16;

/// One of the two interior control points of a cubic ease. The curve itself always runs
/// from (0, 0) to (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint(pub na::Point2<f64>);

impl ControlPoint {
	pub fn new(x: f64, y: f64) -> Self {
		Self(na::Point2::new(x, y))
	}

	pub fn x(&self) -> f64 {
		self.0.x
	}

	pub fn y(&self) -> f64 {
		self.0.y
	}

	/// Evaluate the curve through `self` and `other` at `t`, on both axes.
	pub fn ease(&self, other: &ControlPoint, t: f64) -> na::Point2<f64> {
		na::Point2::new(cubic_ease(t, self.x(), other.x()), cubic_ease(t, self.y(), other.y()))
	}
}

impl From<(f64, f64)> for ControlPoint {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

/// How the curve parameter `t` is stepped from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
	/// `t = i / steps`
	Exact,
	/// `t` grows by repeated addition of `1 / steps`, drift included, so each `t` matches
	/// older tooling bit for bit. Unlike that tooling, which stopped once drift pushed `t`
	/// past 1 (steps 9, 11, 18, ...), the final sample is always produced.
	Accumulated,
}

impl Default for Sampling {
	fn default() -> Self {
		Sampling::Exact
	}
}

/// Cubic Bézier with endpoints fixed at 0 and 1, rounded to [`PRECISION`] places.
pub fn cubic_ease(t: f64, n1: f64, n2: f64) -> f64 {
	round_to(unrounded(t, n1, n2), PRECISION)
}

fn unrounded(t: f64, n1: f64, n2: f64) -> f64 {
	let u = 1.0 - t;
	u * u * u * 0.0 + 3.0 * (u * u) * t * n1 + 3.0 * u * (t * t) * n2 + t * t * t * 1.0
}

/// Round half to even at `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
	if !value.is_finite() || value.abs() >= ROUND_LIMIT {
		return value;
	}
	let scale = 10f64.powi(digits);
	(value * scale).round_ties_even() / scale
}

/// The `steps + 1` curve parameters between 0 and 1.
pub fn parameters(steps: usize, sampling: Sampling) -> impl Iterator<Item = f64> {
	let increment = 1.0 / steps as f64;
	let mut acc = 0.0;
	(0..=steps).map(move |i| match sampling {
		Sampling::Exact => i as f64 / steps as f64,
		Sampling::Accumulated => {
			let t = acc;
			acc += increment;
			t
		}
	})
}
