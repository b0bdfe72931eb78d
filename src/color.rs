#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
	pub a: u8,
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::rgba(r, g, b, 255)
	}

	pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { a, r, g, b }
	}

	/// Alpha first, matching the channel order most UI toolkits serialize colours in.
	pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
		Self { a, r, g, b }
	}

	pub fn transparent() -> Self {
		Self::argb(0, 0, 0, 0)
	}

	pub fn black() -> Self {
		Self::rgb(0, 0, 0)
	}

	pub fn white() -> Self {
		Self::rgb(255, 255, 255)
	}

	pub fn red() -> Self {
		Self::rgb(255, 0, 0)
	}

	pub fn green() -> Self {
		Self::rgb(0, 255, 0)
	}

	pub fn blue() -> Self {
		Self::rgb(0, 0, 255)
	}

	pub fn as_argb(&self) -> (u8, u8, u8, u8) {
		(self.a, self.r, self.g, self.b)
	}

	/// Quadratic-mean blend towards `other`.
	///
	/// Each channel becomes `sqrt(a² * (1 - f) + b² * f)`, truncated. Squaring before
	/// mixing keeps the midpoint of a red/blue fade brighter than a linear blend would.
	/// Factors outside `0.0..=1.0` can push a channel out of range, in which case it is
	/// clamped to `0..=255`.
	pub fn mix(&self, other: &Color, f: f64) -> Color {
		Color::argb(
			mix_channel(self.a, other.a, f),
			mix_channel(self.r, other.r, f),
			mix_channel(self.g, other.g, f),
			mix_channel(self.b, other.b, f),
		)
	}

	/// Plain linear blend towards `other`.
	#[cfg(test)]
	pub(crate) fn lerp(&self, other: &Color, f: f64) -> Color {
		let lerp = |a: u8, b: u8| {
			let v = a as f64 + (b as f64 - a as f64) * f;
			v.max(0.0).min(255.0) as u8
		};
		Color::argb(
			lerp(self.a, other.a),
			lerp(self.r, other.r),
			lerp(self.g, other.g),
			lerp(self.b, other.b),
		)
	}
}

fn mix_channel(a: u8, b: u8, f: f64) -> u8 {
	let a = a as f64;
	let b = b as f64;
	let v = (a * a * (1.0 - f) + b * b * f).sqrt();
	if v.is_nan() {
		// Negative radicand, only reachable with f outside 0..=1
		return 0;
	}
	v.max(0.0).min(255.0) as u8
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mix_endpoints_are_exact() {
		let samples = [
			Color::red(),
			Color::blue(),
			Color::argb(17, 3, 254, 128),
			Color::transparent(),
			Color::white(),
		];
		for a in samples.iter() {
			for b in samples.iter() {
				assert_eq!(a.mix(b, 0.0), *a);
				assert_eq!(a.mix(b, 1.0), *b);
			}
		}
	}

	#[test]
	fn mix_is_quadratic_not_linear() {
		let mixed = Color::red().mix(&Color::blue(), 0.5);
		// sqrt(255² / 2) = 180.31...
		assert_eq!(mixed, Color::argb(255, 180, 0, 180));
		assert_eq!(Color::red().lerp(&Color::blue(), 0.5), Color::argb(255, 127, 0, 127));
	}

	#[test]
	fn mix_truncates_channels() {
		// sqrt(100² * 0.75 + 200² * 0.25) = sqrt(17500) = 132.28...
		let mixed = Color::argb(100, 100, 100, 100).mix(&Color::argb(200, 200, 200, 200), 0.25);
		assert_eq!(mixed.as_argb(), (132, 132, 132, 132));
	}

	#[test]
	fn mix_clamps_out_of_range_factors() {
		let white = Color::white();
		let black = Color::black();
		// sqrt(255² * 1.5) overflows a channel
		assert_eq!(black.mix(&white, 1.5), Color::argb(255, 255, 255, 255));
		// Radicand goes negative
		assert_eq!(black.mix(&white, -0.5), Color::argb(255, 0, 0, 0));
	}
}
