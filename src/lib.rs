mod bezier;
mod color;
mod gradient;
mod stops;

pub use bezier::{cubic_ease, parameters, round_to, ControlPoint, Sampling, PRECISION};
pub use color::Color;
pub use gradient::{sample, GradientSpec, GradientStop, DEFAULT_STEPS};
pub use stops::StopList;
