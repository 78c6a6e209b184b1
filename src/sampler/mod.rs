//! Parameter sweeps over the pricing kernel.
//!
//! A sweep holds a base [`OptionParameters`](crate::OptionParameters) fixed,
//! perturbs one or two inputs along [`SweepAxis`] grids and evaluates the
//! kernel once per sample. Output order always follows the axes, so series can
//! be plotted without sorting.

pub mod axis;
pub mod color;
pub mod config;
pub mod presets;
pub mod sweep;

pub use axis::*;
pub use color::*;
pub use config::*;
pub use presets::*;
pub use sweep::*;
