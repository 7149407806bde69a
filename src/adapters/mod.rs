// Adapters layer: turns domain results into bytes for the outside world.

pub mod output;

pub use output::{render_compatibility, render_reading, render_signs, OutputFormat};
