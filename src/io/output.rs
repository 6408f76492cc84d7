use crate::core::Certainty;
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::model::DiscriminantScores;
use crate::pipeline::Outcome;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_outcome(&mut self, outcome: &Outcome) -> anyhow::Result<()>;

    /// Push buffered output to the sink, surfacing any write failure.
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_outcome(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(outcome)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_outcome(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        writeln!(self.writer, "# Harvest Mouse Identification")?;
        writeln!(self.writer)?;

        if !outcome.valid {
            writeln!(
                self.writer,
                "**Invalid input:** {}",
                outcome.message.as_deref().unwrap_or_default()
            )?;
            return Ok(());
        }

        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        if let Some(variant) = outcome.variant {
            self.write_row("Model", variant.label())?;
        }
        if let Some(species) = outcome.species {
            let label = match species.scientific_name() {
                Some(name) => format!("{} (*{}*)", species.label(), name),
                None => species.label().to_string(),
            };
            self.write_row("Species", &label)?;
        }
        if let Some(scores) = outcome.scores {
            self.write_scores(&scores)?;
        }
        if let Some(display) = outcome.probability_display.as_deref() {
            self.write_row("Probability", display)?;
        }
        if let Some(certainty) = outcome.certainty {
            self.write_row("Certainty", &certainty.to_string())?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_row(&mut self, field: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {} | {} |", field, value)?;
        Ok(())
    }

    fn write_scores(&mut self, scores: &DiscriminantScores) -> anyhow::Result<()> {
        self.write_row("SMHM score", &format!("{:.4}", scores.salt_marsh))?;
        self.write_row("WHM score", &format!("{:.4}", scores.western))
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting.formatter(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_outcome(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        let message = outcome.message.as_deref().unwrap_or_default();

        if !outcome.valid {
            writeln!(self.writer, "{}", self.formatter.alert(message))?;
            return Ok(());
        }

        writeln!(self.writer, "{}", self.formatter.header("Result:"))?;

        if let Some(species) = outcome.species {
            let label = self.formatter.styled(species.label(), species.style());
            match species.scientific_name() {
                Some(name) => {
                    let name = self.formatter.styled(&self.formatter.italic(name), species.style());
                    writeln!(self.writer, "{}, {}", label, name)?;
                }
                None => writeln!(self.writer, "{}", label)?,
            }
        }

        match outcome.certainty {
            Some(Certainty::Low) => writeln!(self.writer, "{}", self.formatter.alert(message))?,
            _ => writeln!(self.writer, "{}", message)?,
        }

        if let (Some(variant), Some(scores)) = (outcome.variant, outcome.scores) {
            let detail = format!(
                "Model {}: SMHM score {:.4}, WHM score {:.4}",
                variant.label(),
                scores.salt_marsh,
                scores.western
            );
            writeln!(self.writer, "{}", self.formatter.dim(&detail))?;
        }
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
