//! `classify`: the command-line stand-in for the data-entry form.
//!
//! Raw text is parsed into optional numbers here; everything after that is
//! the library pipeline.

use crate::config::{load_config, load_config_from, SmhmConfig};
use crate::core::{Measurements, ReproductiveStatus, Sex};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::output::{create_writer, OutputFormat};
use crate::pipeline::{run_variant, Outcome};
use crate::validation::parse_measurement;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Raw form values as typed.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub tail_diameter: Option<String>,
    pub tail_length: String,
    pub body_length: String,
    pub sex: Sex,
    pub reproductive_status: ReproductiveStatus,
}

impl RawInput {
    /// Parse into measurements. Supplying a diameter (even blank) selects the
    /// with-diameter model, so a blank diameter is reported rather than ignored.
    pub fn to_measurements(&self) -> Measurements {
        Measurements {
            tail_diameter: self
                .tail_diameter
                .as_deref()
                .map(|raw| parse_measurement(raw).unwrap_or(f64::NAN)),
            tail_length: parse_measurement(&self.tail_length),
            body_length: parse_measurement(&self.body_length),
            sex: self.sex,
            reproductive_status: self.reproductive_status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    pub input: RawInput,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub color: Option<ColorMode>,
    pub plain: bool,
}

/// Output settings after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOutput {
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

pub fn resolve_output(cmd: &ClassifyConfig, file: &SmhmConfig) -> ResolvedOutput {
    let format = cmd
        .format
        .or(file.output_format())
        .unwrap_or(OutputFormat::Terminal);

    let formatting = if cmd.plain || cmd.output.is_some() {
        FormattingConfig::plain()
    } else if let Some(color) = cmd.color {
        FormattingConfig::new(color)
    } else {
        FormattingConfig::from_env(file.color_mode().unwrap_or(ColorMode::Auto))
    };

    ResolvedOutput { format, formatting }
}

/// Classify one specimen and write the result. Returns `false` when the input
/// was rejected.
pub fn handle_classify(cmd: ClassifyConfig) -> Result<bool> {
    let file_config = match cmd.config.as_deref() {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let resolved = resolve_output(&cmd, &file_config);

    let measurements = cmd.input.to_measurements();
    let result = run_variant(
        measurements.variant(),
        &measurements,
        &file_config.certainty_band(),
    );
    let outcome = Outcome::from(&result);
    info!(valid = outcome.valid, species = ?outcome.species, "Classification finished");

    let sink: Box<dyn Write> = match cmd.output.as_ref() {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = create_writer(resolved.format, sink, resolved.formatting);
    writer.write_outcome(&outcome)?;
    writer.flush()?;

    Ok(outcome.valid)
}
