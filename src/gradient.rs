use crate::bezier::{self, ControlPoint, Sampling};
use crate::color::Color;

/// Sampling resolution used by [`GradientSpec::stops`] unless overridden.
pub const DEFAULT_STEPS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
	pub offset: f64,
	pub color: Color,
}

impl GradientStop {
	pub fn new(offset: f64, color: Color) -> Self {
		Self { offset, color }
	}
}

/// Two colours joined by a cubic ease.
///
/// The x axis of the curve drives stop offsets and the y axis drives how far each stop
/// has blended from `top` to `bottom`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
	pub top: Color,
	pub bottom: Color,
	pub control_point1: ControlPoint,
	pub control_point2: ControlPoint,
	pub steps: usize,
	pub sampling: Sampling,
}

impl Default for GradientSpec {
	fn default() -> Self {
		Self::new(Color::default(), Color::default())
	}
}

impl GradientSpec {
	/// Ease-in-out between `top` and `bottom`.
	pub fn new(top: Color, bottom: Color) -> Self {
		Self {
			top,
			bottom,
			control_point1: ControlPoint::new(0.42, 0.0),
			control_point2: ControlPoint::new(0.58, 1.0),
			steps: DEFAULT_STEPS,
			sampling: Sampling::default(),
		}
	}

	pub fn with_control_points<P: Into<ControlPoint>>(mut self, p1: P, p2: P) -> Self {
		self.control_point1 = p1.into();
		self.control_point2 = p2.into();
		self
	}

	pub fn with_steps(mut self, steps: usize) -> Self {
		self.steps = steps;
		self
	}

	pub fn with_sampling(mut self, sampling: Sampling) -> Self {
		self.sampling = sampling;
		self
	}

	pub fn stops(&self) -> Vec<GradientStop> {
		sample(self, self.steps)
	}
}

/// Sample `steps + 1` stops along the curve, in order of the curve parameter.
///
/// Offsets come straight from the curve's x axis, so they are only monotonic when the
/// control points keep x monotonic. `steps` takes precedence over `spec.steps`.
pub fn sample(spec: &GradientSpec, steps: usize) -> Vec<GradientStop> {
	let steps = if steps == 0 {
		log::warn!("Gradient sampled with zero steps, using 1");
		1
	} else {
		steps
	};
	log::debug!(
		"Sampling gradient: {} steps, control points {:?} {:?}",
		steps,
		spec.control_point1.0,
		spec.control_point2.0
	);

	bezier::parameters(steps, spec.sampling)
		.map(|t| {
			let p = spec.control_point1.ease(&spec.control_point2, t);
			GradientStop::new(p.x, spec.top.mix(&spec.bottom, p.y))
		})
		.collect()
}
