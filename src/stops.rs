use crate::gradient::{GradientSpec, GradientStop};
use std::slice;

/// Stop storage for whatever paints the gradient. Replacing the gradient always clears
/// the previous stops first.
#[derive(Debug, Default, Clone)]
pub struct StopList {
	stops: Vec<GradientStop>,
}

impl StopList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_gradient(&mut self, gradient: Option<&GradientSpec>) {
		self.stops.clear();
		if let Some(gradient) = gradient {
			self.stops.extend(gradient.stops());
		}
	}

	pub fn stops(&self) -> &[GradientStop] {
		&self.stops
	}

	pub fn len(&self) -> usize {
		self.stops.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stops.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, GradientStop> {
		self.stops.iter()
	}

	/// Copy of the stops ordered by offset, for renderers that reject offsets going
	/// backwards. Ties keep their sampling order.
	pub fn sorted_by_offset(&self) -> Vec<GradientStop> {
		let mut sorted = self.stops.clone();
		sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));
		sorted
	}
}

impl<'a> IntoIterator for &'a StopList {
	type Item = &'a GradientStop;
	type IntoIter = slice::Iter<'a, GradientStop>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::Color;

	#[test]
	fn set_and_clear() {
		let spec = GradientSpec::new(Color::white(), Color::transparent());
		let mut list = StopList::new();
		assert!(list.is_empty());

		list.set_gradient(Some(&spec));
		assert_eq!(list.len(), 16);
		assert_eq!(list.stops(), spec.stops().as_slice());

		list.set_gradient(None);
		assert!(list.is_empty());
	}

	#[test]
	fn replacing_does_not_append() {
		let mut list = StopList::new();
		list.set_gradient(Some(&GradientSpec::new(Color::red(), Color::blue())));
		list.set_gradient(Some(&GradientSpec::new(Color::black(), Color::green()).with_steps(4)));
		assert_eq!(list.len(), 5);
		assert_eq!(list.stops()[0].color, Color::black());
		assert_eq!(list.stops()[4].color, Color::green());
	}

	#[test]
	fn sorted_by_offset_is_monotonic() {
		let spec = GradientSpec::new(Color::red(), Color::blue()).with_control_points((1.5, 0.0), (-0.5, 1.0));
		let mut list = StopList::new();
		list.set_gradient(Some(&spec));

		let sorted = list.sorted_by_offset();
		assert_eq!(sorted.len(), list.len());
		assert!(sorted.windows(2).all(|w| w[0].offset <= w[1].offset));
		// Stored order is untouched
		assert_eq!(list.stops(), spec.stops().as_slice());
		assert_eq!(list.into_iter().count(), 16);
	}
}
