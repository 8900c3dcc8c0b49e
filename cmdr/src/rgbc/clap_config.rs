// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rgb_cube::{CellLabel, DEFAULT_CELL_WIDTH, DEFAULT_GRADIENT_STEPS, DEFAULT_GRID_SEP,
               PaletteLayout, RenderOptions, TracingConfig, level_filter_from_env,
               parse_level_filter};

/// Cube names (axis orders) used when `--orders` is not given.
pub const DEFAULT_ORDERS: [&str; 3] = ["bgr", "rgb", "grb"];

#[derive(Debug, Parser)]
#[command(bin_name = "rgbc")]
#[command(about = "🎨 Explore the 6x6x6 RGB color cube of the terminal's 256 color palette")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  rgbc [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log to a file (one JSON object per line) for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "LEVEL",
        help = "One of: off, error, warn, info, debug, trace. Defaults to the LOG_LEVEL env var, else info"
    )]
    pub log_level: Option<String>,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        help = "Log file to write to, it is rolled over daily"
    )]
    pub log_file: Option<String>,
}

impl GlobalOption {
    /// [`None`] unless logging is enabled. Every log line carries the command name.
    #[must_use]
    pub fn tracing_config(&self, command_name: &str) -> Option<TracingConfig> {
        if !self.enable_logging {
            return None;
        }
        let level_filter = match &self.log_level {
            Some(level) => parse_level_filter(Some(level)),
            None => level_filter_from_env(),
        };
        Some(
            TracingConfig::new_file(self.log_file.clone())
                .with_level_filter(level_filter)
                .with_context("app", "rgbc")
                .with_context("command", command_name),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🌈 Print swatches of the 256 color palette\n💡 Eg: `rgbc palette --layout columns --layout serpentine`"
    )]
    Palette {
        #[arg(
            long = "layout",
            value_enum,
            default_values_t = [LayoutArg::Sequential],
            help = "Repeat to show several layouts side by side"
        )]
        layouts: Vec<LayoutArg>,

        #[arg(long, default_value_t = 1)]
        padding_top: usize,

        #[arg(long, default_value_t = 1)]
        padding_bottom: usize,
    },

    #[clap(
        about = "🧊 Render color cubes, one per axis order, packed to the terminal width\n💡 Eg: `rgbc cubes --orders rgb,gbr --label ansi`"
    )]
    Cubes {
        #[arg(long, value_delimiter = ',', default_values = DEFAULT_ORDERS)]
        orders: Vec<String>,

        #[arg(long, help = "Display width in columns, defaults to the terminal width")]
        width: Option<usize>,

        #[arg(long, default_value = DEFAULT_GRID_SEP, help = "Separator between cubes")]
        grid_sep: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    #[clap(
        about = "🗺️ Unfold a cube net around a seed face, and show the gradient between its corners\n💡 Eg: `rgbc net --seed-cube rgb --flip --all-rotations`"
    )]
    Net {
        #[arg(long, value_delimiter = ',', default_values = DEFAULT_ORDERS)]
        orders: Vec<String>,

        #[arg(long, default_value = "rgb", help = "Cube (axis order) the seed face comes from")]
        seed_cube: String,

        #[arg(long, default_value_t = 0, help = "Index of the seed face in its cube")]
        face: usize,

        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u8).range(0..4),
            help = "Quarter turns (clockwise) applied to the seed face"
        )]
        rotation: u8,

        #[arg(long, help = "Flip the seed face (reverse its rows) before rotating it")]
        flip: bool,

        #[arg(long, help = "Assemble a net for each of the 4 rotations")]
        all_rotations: bool,

        #[arg(long, default_value_t = DEFAULT_GRADIENT_STEPS)]
        steps: usize,

        #[command(flatten)]
        render: RenderArgs,
    },
}

impl CLICommand {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CLICommand::Palette { .. } => "palette",
            CLICommand::Cubes { .. } => "cubes",
            CLICommand::Net { .. } => "net",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    #[clap(help = "One line per cube color: index, RGB, swatch")]
    Listing,
    #[clap(help = "Cube indices in order, 12 per row")]
    Sequential,
    #[clap(help = "Rows of 12, every 3rd row")]
    Interleaved,
    #[clap(help = "Rows of 6, column major")]
    Columns,
    #[clap(help = "Rows of 6, column major, every other block reversed")]
    Serpentine,
    #[clap(help = "The 24 greys")]
    Greyscale,
    #[clap(help = "The 16 basic colors")]
    Basics,
}

impl LayoutArg {
    /// [`None`] for [`LayoutArg::Listing`], which is not a swatch grid.
    #[must_use]
    pub fn palette_layout(self) -> Option<PaletteLayout> {
        match self {
            LayoutArg::Listing => None,
            LayoutArg::Sequential => Some(PaletteLayout::Sequential),
            LayoutArg::Interleaved => Some(PaletteLayout::Interleaved),
            LayoutArg::Columns => Some(PaletteLayout::Columns),
            LayoutArg::Serpentine => Some(PaletteLayout::Serpentine),
            LayoutArg::Greyscale => Some(PaletteLayout::Greyscale),
            LayoutArg::Basics => Some(PaletteLayout::Basics),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LabelArg {
    #[clap(help = "Display RGB of the cell, eg: (95, 135, 0)")]
    Rgb,
    #[clap(help = "ANSI index of the cell, eg: 64")]
    Ansi,
    #[clap(help = "No label")]
    Blank,
}

impl From<LabelArg> for CellLabel {
    fn from(it: LabelArg) -> Self {
        match it {
            LabelArg::Rgb => CellLabel::Rgb,
            LabelArg::Ansi => CellLabel::AnsiIndex,
            LabelArg::Blank => CellLabel::Blank,
        }
    }
}

#[derive(Clone, Copy, Debug, Args)]
pub struct RenderArgs {
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH, help = "Columns per cell")]
    pub cell_width: usize,

    #[arg(long, default_value_t = 0, help = "Blank rows above each row of cells")]
    pub padding_top: usize,

    #[arg(long, default_value_t = 0, help = "Blank rows below each row of cells")]
    pub padding_bottom: usize,

    #[arg(long, value_enum, default_value_t = LabelArg::Rgb)]
    pub label: LabelArg,
}

impl From<RenderArgs> for RenderOptions {
    fn from(it: RenderArgs) -> Self {
        RenderOptions {
            padding_top: it.padding_top,
            padding_bottom: it.padding_bottom,
            cell_width: it.cell_width,
            label: it.label.into(),
        }
    }
}
