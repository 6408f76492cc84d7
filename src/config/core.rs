use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use crate::model::CertaintyBand;

/// Root configuration structure for smhm-id
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SmhmConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Probability range reported as low certainty
    #[serde(default)]
    pub certainty: Option<CertaintyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CertaintyConfig {
    #[serde(default = "default_low")]
    pub low: f64,
    #[serde(default = "default_high")]
    pub high: f64,
}

fn default_low() -> f64 {
    CertaintyBand::default().low
}

fn default_high() -> f64 {
    CertaintyBand::default().high
}

impl Default for CertaintyConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
        }
    }
}

impl SmhmConfig {
    pub fn certainty_band(&self) -> CertaintyBand {
        let c = self.certainty.unwrap_or_default();
        CertaintyBand {
            low: c.low,
            high: c.high,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn color_mode(&self) -> Option<ColorMode> {
        self.output.as_ref().and_then(|o| o.color)
    }

    /// Fully populated defaults, as written by `smhm-id init`.
    pub fn documented_defaults() -> Self {
        Self {
            output: Some(OutputConfig {
                format: Some(OutputFormat::Terminal),
                color: Some(ColorMode::Auto),
            }),
            certainty: Some(CertaintyConfig::default()),
        }
    }
}
