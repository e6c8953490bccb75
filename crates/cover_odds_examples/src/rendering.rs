use std::fmt::Write as _;
use std::path::Path;

use cover_odds::prelude::*;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Formats a probability as a percentage with one decimal place.
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Renders the grid as text: `*` marks the top tier, `+` the second tier, `--` opened cells.
pub fn render_evaluation_to_text(evaluation: &Evaluation, opened: &OpenedCells) -> String {
    let grid = &evaluation.probabilities;
    let size = grid.size();
    let mut out = String::new();

    let _ = write!(out, "    ");
    for x in 0..size.width {
        let _ = write!(out, "{x:>8}");
    }
    out.push('\n');

    for y in 0..size.height {
        let _ = write!(out, "{y:>3} ");
        for x in 0..size.width {
            let cell = Cell::new(x, y);
            if opened.contains(cell) {
                let _ = write!(out, "{:>8}", "--");
                continue;
            }
            let marker = match evaluation.ranking.tier_of(cell) {
                Some(Tier::Top) => '*',
                Some(Tier::Second) => '+',
                None => ' ',
            };
            let _ = write!(out, "{:>7}{}", format_percent(grid.get(cell)), marker);
        }
        out.push('\n');
    }
    out
}

/// Rendering settings for [`render_evaluation_to_png`].
#[derive(Clone, Debug)]
pub struct HeatmapConfig {
    /// Side length of one board cell in pixels.
    pub cell_px: u32,
    /// Border thickness used for tier highlighting.
    pub border_px: u32,
    pub cold: [u8; 3],
    pub hot: [u8; 3],
    pub opened: [u8; 3],
    pub top_border: [u8; 3],
    pub second_border: [u8; 3],
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cell_px: 64,
            border_px: 4,
            cold: [24, 32, 64],
            hot: [230, 60, 40],
            opened: [120, 120, 120],
            top_border: [90, 160, 255],
            second_border: [255, 150, 200],
        }
    }
}

impl HeatmapConfig {
    pub fn with_cell_px(mut self, cell_px: u32) -> Self {
        self.cell_px = cell_px.max(1);
        self
    }
}

fn lerp_color(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |u: u8, v: u8| (u as f64 + (v as f64 - u as f64) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Writes a heatmap PNG: cell color scales with probability, tiers get a colored border.
pub fn render_evaluation_to_png(
    evaluation: &Evaluation,
    opened: &OpenedCells,
    config: &HeatmapConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let grid = &evaluation.probabilities;
    let size = grid.size();
    let px = config.cell_px.max(1);
    let border = config.border_px.min(px / 2);
    let mut img = RgbImage::new(size.width * px, size.height * px);

    for (cell, p) in grid.iter() {
        let fill = if opened.contains(cell) {
            config.opened
        } else {
            lerp_color(config.cold, config.hot, p)
        };
        let edge = match evaluation.ranking.tier_of(cell) {
            Some(Tier::Top) => Some(config.top_border),
            Some(Tier::Second) => Some(config.second_border),
            None => None,
        };

        for dy in 0..px {
            for dx in 0..px {
                let on_border = dx < border || dy < border || dx >= px - border || dy >= px - border;
                let color = match edge {
                    Some(edge) if on_border => edge,
                    _ => fill,
                };
                img.put_pixel(cell.x * px + dx, cell.y * px + dy, Rgb(color));
            }
        }
    }

    let path = path.as_ref();
    img.save(path)?;
    info!("Wrote heatmap to {}.", path.display());
    Ok(())
}
