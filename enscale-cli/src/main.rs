use std::path::PathBuf;

use clap::{Parser, Subcommand};
use enscale_common::types::ScaleType;
use enscale_guides::AxisConfig;

mod commands;
mod error;

use error::CliError;

/// Multi-unit energy axis layouts and conversions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the axis layout for a chart state as JSON
    Layout {
        /// Chart state JSON file, defaults are used for missing fields
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Height of the plotting area in pixels
        #[arg(long)]
        plot_height: Option<f64>,

        /// Pixels between stacked overlay axes
        #[arg(long)]
        axis_spacing: Option<f64>,

        /// Override the range lower bound, in the primary unit
        #[arg(long, requires = "max", allow_negative_numbers = true)]
        min: Option<f64>,

        /// Override the range upper bound, in the primary unit
        #[arg(long, requires = "min", allow_negative_numbers = true)]
        max: Option<f64>,

        /// Print the JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Convert a value from one unit to another
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, default_value = "")]
        from_prefix: String,

        #[arg(long, default_value = "")]
        to_prefix: String,
    },

    /// Print tick values for a range, one per line
    Ticks {
        #[arg(allow_negative_numbers = true)]
        lo: f64,

        #[arg(allow_negative_numbers = true)]
        hi: f64,

        #[arg(long, default_value_t = ScaleType::Log10)]
        scale: ScaleType,

        /// Linear tick count, 0 for the default
        #[arg(long)]
        count: Option<usize>,

        /// Keep only interior ticks, as an overlay axis with its own cadence
        #[arg(long)]
        independent: bool,
    },

    /// List supported units and prefixes
    Units,
}

fn main() -> Result<(), CliError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            state,
            plot_height,
            axis_spacing,
            min,
            max,
            compact,
        } => {
            let mut chart = commands::load_state(state.as_deref())?;
            if let (Some(min), Some(max)) = (min, max) {
                chart.set_range_min_max(min, max)?;
            }

            let mut config = AxisConfig::default();
            if let Some(plot_height) = plot_height {
                config.plot_height = plot_height;
            }
            if let Some(axis_spacing) = axis_spacing {
                config.axis_spacing = axis_spacing;
            }

            println!("{}", commands::layout_json(&chart, &config, compact)?);
        }
        Commands::Convert {
            value,
            from,
            to,
            from_prefix,
            to_prefix,
        } => {
            let converted = commands::convert(value, &from, &from_prefix, &to, &to_prefix)?;
            println!("{converted:e}");
        }
        Commands::Ticks {
            lo,
            hi,
            scale,
            count,
            independent,
        } => {
            for tick in commands::tick_values(lo, hi, scale, count, independent) {
                println!("{tick:e}");
            }
        }
        Commands::Units => {
            for line in commands::unit_lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}
