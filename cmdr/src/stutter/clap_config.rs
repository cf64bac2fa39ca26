// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum, builder::RangedU64ValueParser};
use stutter_ansi_color::global_color_support;
use stutter_core::{DEFAULT_SCAN_AREA_SIZE, DEFAULT_SEED, DEFAULT_WINDOW_SIZE, GroupingPolicy,
                   HighlightConfig, PaletteMode, RenderStyle};
use stutter_log::{TracingConfig, WriterConfig, tracing_config_options::DEFAULT_LOG_FILE_NAME};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "stutter")]
#[command(about = "🦜 Highlight repeated words, stutters and echoes in a text file")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  stutter --file \x1b[32mFILENAME\x1b[0m [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(long, short = 'f', value_name = "FILENAME", help = "Name of a file to read")]
    pub file: PathBuf,

    #[arg(
        long,
        short = 'w',
        value_name = "WINDOWSIZE",
        default_value_t = DEFAULT_WINDOW_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Scanning window size, the number of characters compared at a time"
    )]
    pub window: usize,

    #[arg(
        long,
        short = 's',
        value_name = "SCANAREA",
        default_value_t = DEFAULT_SCAN_AREA_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Scanning area, how many characters ahead to look for a repeat"
    )]
    pub scan: usize,

    #[arg(
        long,
        short = 'p',
        help = "Use vivid pure colors instead of fully random ones"
    )]
    pub pure_colors: bool,

    #[arg(
        long,
        short = 'd',
        help = "Dumb terminal mode, highlight every repeat in bold red"
    )]
    pub dumb: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "Color depth of the output, `auto` detects what the terminal supports"
    )]
    pub color: ColorChoice,

    #[arg(
        long,
        value_enum,
        default_value_t = GroupingChoice::Inherit,
        help = "How colors are shared between repeats that overlap"
    )]
    pub grouping: GroupingChoice,

    #[arg(
        long,
        default_value_t = DEFAULT_SEED,
        help = "Seed for the color sequence, the same seed always produces the same colors"
    )]
    pub seed: u64,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        help = "Log app output to this file instead of `log.txt`. Implies --enable-logging."
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Truecolor,
    Ansi256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupingChoice {
    /// A repeat anchored on an already highlighted character reuses its color.
    Inherit,
    /// Repeats that share an occurrence always share one color.
    Transitive,
}

impl From<GroupingChoice> for GroupingPolicy {
    fn from(choice: GroupingChoice) -> Self {
        match choice {
            GroupingChoice::Inherit => GroupingPolicy::Inherit,
            GroupingChoice::Transitive => GroupingPolicy::Transitive,
        }
    }
}

impl From<&CLIArg> for HighlightConfig {
    fn from(cli_arg: &CLIArg) -> Self {
        HighlightConfig {
            window_size: cli_arg.window,
            scan_area_size: cli_arg.scan,
            palette_mode: if cli_arg.pure_colors {
                PaletteMode::Pure
            } else {
                PaletteMode::Free
            },
            grouping_policy: cli_arg.grouping.into(),
            seed: cli_arg.seed,
        }
    }
}

impl CLIArg {
    /// `--dumb` wins over `--color`. With `--color auto` the terminal's color support is
    /// detected, and a terminal without color support gets [`RenderStyle::Dumb`].
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        if self.dumb {
            return RenderStyle::Dumb;
        }
        match self.color {
            ColorChoice::Auto => RenderStyle::from_color_support(global_color_support::detect()),
            ColorChoice::Truecolor => RenderStyle::Truecolor,
            ColorChoice::Ansi256 => RenderStyle::Ansi256,
        }
    }
}

impl GlobalOption {
    /// [`None`] when logging is disabled, which is the default.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        if !self.enable_logging && self.log_file.is_none() {
            return None;
        }

        let log_file = self.log_file.as_ref().map_or_else(
            || DEFAULT_LOG_FILE_NAME.to_string(),
            |it| it.display().to_string(),
        );

        Some(TracingConfig {
            writer_config: WriterConfig::File(log_file),
            level_filter: tracing_core::LevelFilter::DEBUG,
        })
    }
}
