use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{ReproductiveStatus, Sex, Variant};
use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    #[value(alias = "0", alias = "m")]
    Male,
    #[value(alias = "1", alias = "f")]
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReproArg {
    /// Non-reproductive condition
    #[value(alias = "0")]
    NonReproductive,
    /// Reproductive condition
    #[value(alias = "1")]
    Reproductive,
}

impl From<ReproArg> for ReproductiveStatus {
    fn from(arg: ReproArg) -> Self {
        match arg {
            ReproArg::NonReproductive => ReproductiveStatus::NonReproductive,
            ReproArg::Reproductive => ReproductiveStatus::Reproductive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    WithDiameter,
    WithoutDiameter,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::WithDiameter => Variant::WithDiameter,
            VariantArg::WithoutDiameter => Variant::WithoutDiameter,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "smhm-id")]
#[command(
    about = "Identify salt marsh vs western harvest mice from morphometric measurements",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a specimen and estimate the probability of the call
    Classify {
        /// Tail diameter; supplying it selects the with-diameter model
        #[arg(
            long = "tail-diameter",
            visible_alias = "tdiam",
            allow_negative_numbers = true
        )]
        tail_diameter: Option<String>,

        /// Tail length
        #[arg(
            long = "tail-length",
            visible_alias = "tlength",
            default_value = "",
            allow_negative_numbers = true
        )]
        tail_length: String,

        /// Body length
        #[arg(
            long = "body-length",
            visible_alias = "blength",
            default_value = "",
            allow_negative_numbers = true
        )]
        body_length: String,

        /// Sex of the specimen
        #[arg(long, value_enum, default_value = "male")]
        sex: SexArg,

        /// Reproductive status
        #[arg(long = "repro", value_enum, default_value = "non-reproductive")]
        repro: ReproArg,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery of .smhm-id.toml)
        #[arg(short, long, env = "SMHM_ID_CONFIG")]
        config: Option<PathBuf>,

        /// Color mode for terminal output
        #[arg(long, value_enum)]
        color: Option<ColorMode>,

        /// Plain output: no colors
        #[arg(long)]
        plain: bool,
    },

    /// Print the model coefficients
    Coefficients {
        /// Only show one model
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
