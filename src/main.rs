use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mandelbrot_fields::{
    BatchExportController, FieldKind, FieldParams, FractionalIteration, Interpolation,
    JuliaValueColourMapKind, export_animation, presenter_for_path,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Parser)]
#[command(version, about = "Render Mandelbrot escape-time and Julia-value fields")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one field to an image file (.png or .ppm)
    Render {
        #[command(flatten)]
        field: FieldArgs,
        #[arg(long, default_value = "escape-time")]
        kind: FieldKind,
        #[arg(short, long, default_value = "output/field.png")]
        out: PathBuf,
    },
    /// Write fractional-iteration frames of the Julia-value field
    Animate {
        #[command(flatten)]
        field: FieldArgs,
        /// Animation ticks; ticks arriving mid-render coalesce into the newest
        #[arg(long, default_value_t = 30)]
        frames: u32,
        /// How long each tick waits for a finished frame
        #[arg(long, default_value_t = 16)]
        tick_ms: u64,
        #[arg(long, default_value = "output/frames")]
        out_dir: PathBuf,
        /// Frame file format, png or ppm
        #[arg(long, default_value = "png")]
        format: String,
    },
}

#[derive(Debug, Args)]
struct FieldArgs {
    /// TOML file with field parameters; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    #[arg(long)]
    offset: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    real_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    real_max: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    imag_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    imag_max: Option<f64>,
    #[arg(long)]
    threshold: Option<f64>,
    #[arg(long)]
    max_iter: Option<u32>,
    #[arg(long)]
    iterations: Option<u32>,
    /// polynomial, linear-xy, linear-angle-and-abs or linear-short-angle-and-abs
    #[arg(long)]
    interpolation: Option<Interpolation>,
    #[arg(long)]
    factor: Option<f64>,
    /// hsl-polar or polar-projection
    #[arg(long)]
    colour_map: Option<JuliaValueColourMapKind>,
}

impl FieldArgs {
    fn params(&self) -> Result<FieldParams, ConfigError> {
        let mut params = match &self.config {
            Some(path) => load_config(path)?,
            None => FieldParams::default(),
        };

        if let Some(width) = self.width {
            params.image_size.width = width;
        }
        if let Some(height) = self.height {
            params.image_size.height = height;
        }
        if let Some(offset) = self.offset {
            params.colour_offset = offset;
        }
        if let Some(real_min) = self.real_min {
            params.region.real_min = real_min;
        }
        if let Some(real_max) = self.real_max {
            params.region.real_max = real_max;
        }
        if let Some(imag_min) = self.imag_min {
            params.region.imag_min = imag_min;
        }
        if let Some(imag_max) = self.imag_max {
            params.region.imag_max = imag_max;
        }
        if let Some(threshold) = self.threshold {
            params.max_threshold = threshold;
        }
        if let Some(max_iter) = self.max_iter {
            params.max_iterations = max_iter;
        }
        if let Some(iterations) = self.iterations {
            params.iterations = iterations;
        }
        if let Some(colour_map) = self.colour_map {
            params.julia_colour_map = colour_map;
        }

        if self.interpolation.is_some() || self.factor.is_some() {
            let current = params.fractional_iteration;
            params.fractional_iteration = Some(FractionalIteration::new(
                self.factor
                    .or(current.map(|fractional| fractional.factor))
                    .unwrap_or_default(),
                self.interpolation
                    .or(current.map(|fractional| fractional.method))
                    .unwrap_or_default(),
            ));
        }

        Ok(params)
    }
}

fn load_config(path: &Path) -> Result<FieldParams, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Render { field, kind, out } => {
            let params = field.params()?;

            if let Some(parent) = out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let mut controller = BatchExportController::new(presenter_for_path(&out)?);
            controller.generate(kind, &params)?;
            controller.write(&out)?;
        }
        Command::Animate {
            field,
            frames,
            tick_ms,
            out_dir,
            format,
        } => {
            let params = field.params()?;
            let method = params
                .fractional_iteration
                .map(|fractional| fractional.method)
                .unwrap_or_default();
            let presenter = presenter_for_path(Path::new(&format!("frame.{format}")))?;

            export_animation(
                params,
                method,
                frames,
                Duration::from_millis(tick_ms),
                &out_dir,
                &presenter,
            )?;
        }
    }

    Ok(())
}
