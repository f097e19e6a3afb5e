//! Render the three styles side by side to SVG files
//!
//! ```text
//! cargo run -p notbox-plot --example render_svg --features svg -- out_dir
//! ```

use notbox_plot::svg::SvgCanvas;
use notbox_plot::{IntervalKind, NotBoxPlot, PlotConfig, SampleMatrix, Style};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let sizes = [5usize, 12, 30, 8];
    let samples = SampleMatrix::from_columns(
        sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                (0..n)
                    .map(|_| 10.0 + i as f64 + (rng.gen::<f64>() - 0.5) * 6.0)
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<_>>(),
    );

    for style in [Style::Patch, Style::Line, Style::SdLine] {
        let config = PlotConfig::builder()
            .style(style)
            .interval(IntervalKind::TInterval)
            .mark_median(true)
            .build()?;

        let mut canvas = SvgCanvas::new(640, 480).with_caption(format!("style: {style}"));
        let output = NotBoxPlot::new(config).plot_with_rng(
            &mut canvas,
            samples.clone(),
            vec![1.0, 2.0, 3.0, 4.0],
            &mut rng,
        )?;

        for stats in &output.stats {
            println!(
                "{style:>7} x={} n={:>2} mean={:.3} ci=±{:.3} sd={:.3}",
                stats.x, stats.count, stats.mean, stats.interval, stats.sd
            );
        }

        let path = out_dir.join(format!("notbox_{}.svg", style.token()));
        canvas.save(&path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
