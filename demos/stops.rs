use flexi_logger::{colored_default_format, Logger};
use scrim::{Color, GradientSpec, Sampling, StopList};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
	Logger::with_env_or_str("debug")
		.format(colored_default_format)
		.set_palette("196;208;12;14;8".into())
		.start()?;

	let spec = GradientSpec::new(Color::argb(255, 255, 0, 0), Color::argb(255, 0, 0, 255));
	let mut brush = StopList::new();
	brush.set_gradient(Some(&spec));
	for stop in &brush {
		let (a, r, g, b) = stop.color.as_argb();
		println!("{:.10}  #{:02x}{:02x}{:02x}{:02x}", stop.offset, a, r, g, b);
	}

	// Legacy parameter stepping, for comparison
	let legacy = spec.clone().with_sampling(Sampling::Accumulated).stops();
	let drift = brush
		.iter()
		.zip(legacy.iter())
		.map(|(a, b)| (a.offset - b.offset).abs())
		.fold(0.0, f64::max);
	println!("max offset drift with accumulated stepping: {:e}", drift);

	Ok(())
}
