#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    format_percent, init_tracing, render_evaluation_to_png, render_evaluation_to_text,
    HeatmapConfig,
};
