// File: crates/demo/src/main.rs
// Summary: Demo hands sample (or CSV) bar data to the chart view and writes the drawing to PNG or SVG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barchart_core::{sample_data, ApproxTextMetrics, BarChartView, BarData, ChartStyle, Insets, SvgCanvas};
use barchart_skia::{render_to_png, RenderOptions, SkiaTextMetrics};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
}

/// Render a bar chart of labeled values.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file with `label,value` columns; the built-in sample months are used when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file; the extension follows --format when not given.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    #[arg(long, default_value_t = 720)]
    width: i32,

    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Padding around the chart on every side, in pixels.
    #[arg(long, default_value_t = 16)]
    padding: u32,

    /// Pixels per dp; scales fonts and label spacing.
    #[arg(long, env = "BARCHART_DENSITY")]
    density: Option<f32>,

    /// TOML file overriding drawing parameters (see `ChartStyle`).
    #[arg(long)]
    style: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let style = load_style(args.style.as_deref(), args.density)?;

    let data = match &args.input {
        Some(path) => load_bar_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => sample_data(),
    };
    if data.is_empty() {
        warn!("no bars loaded; rendering an empty axes frame");
    }
    info!(bars = data.len(), "loaded bar data");

    let output = args.output.clone().unwrap_or_else(|| default_output(args.format));
    match args.format {
        Format::Png => {
            let mut view = BarChartView::with_style(SkiaTextMetrics::new(), style);
            view.set_padding(Insets::uniform(args.padding));
            view.set_y_axis_data(data);
            let opts = RenderOptions { width: args.width, height: args.height, ..RenderOptions::default() };
            render_to_png(&mut view, &opts, &output)?;
        }
        Format::Svg => {
            let mut view = BarChartView::with_style(ApproxTextMetrics::default(), style);
            view.set_padding(Insets::uniform(args.padding));
            view.set_size(args.width, args.height);
            view.set_y_axis_data(data);
            let mut svg = SvgCanvas::new(args.width, args.height, RenderOptions::default().background);
            view.on_draw(&mut svg);
            write_file(&output, svg.finish().as_bytes())?;
        }
    }
    info!(path = %output.display(), "wrote chart");
    Ok(())
}

fn load_style(path: Option<&Path>, density: Option<f32>) -> Result<ChartStyle> {
    let mut style = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            toml::from_str::<ChartStyle>(&raw).with_context(|| format!("parsing {}", p.display()))?
        }
        None => ChartStyle::default(),
    };
    if let Some(d) = density {
        style.density = d;
    }
    style.validate()?;
    Ok(style)
}

/// Load `label,value` rows. Rows with a non-finite value are rejected.
fn load_bar_csv(path: &Path) -> Result<Vec<BarData>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.deserialize::<BarData>().enumerate() {
        let bar = rec.with_context(|| format!("row {}", row + 1))?;
        bar.validate().with_context(|| format!("row {}", row + 1))?;
        out.push(bar);
    }
    Ok(out)
}

fn default_output(format: Format) -> PathBuf {
    let ext = match format {
        Format::Png => "png",
        Format::Svg => "svg",
    };
    PathBuf::from("target/out").join(format!("bar_chart.{ext}"))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_become_bars() {
        let dir = PathBuf::from("target/test_out");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bars.csv");
        std::fs::write(&path, "label,value\nJan, 11.1\nFeb,8\n").unwrap();

        let bars = load_bar_csv(&path).unwrap();
        assert_eq!(bars, vec![BarData::new("Jan", 11.1), BarData::new("Feb", 8.0)]);
    }

    #[test]
    fn csv_rejects_bad_value() {
        let dir = PathBuf::from("target/test_out");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.csv");
        std::fs::write(&path, "label,value\nJan,abc\n").unwrap();
        assert!(load_bar_csv(&path).is_err());
    }

    #[test]
    fn density_flag_overrides_style() {
        let style = load_style(None, Some(2.0)).unwrap();
        assert_eq!(style.density, 2.0);
        assert!(load_style(None, Some(0.0)).is_err());
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::parse_from(["barchart-demo", "--format", "svg"]);
        assert_eq!(args.format, Format::Svg);
        assert_eq!((args.width, args.height, args.padding), (720, 480, 16));
        assert_eq!(default_output(args.format), PathBuf::from("target/out/bar_chart.svg"));
    }
}
