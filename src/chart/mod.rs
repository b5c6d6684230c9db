//! SVG rendering: element primitives and the bar chart built from them.

mod bar;
pub mod svg;

pub use bar::{bar_chart, render_histogram};
