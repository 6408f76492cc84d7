use anyhow::Result;
use smhm_id::cli::{parse_args, Commands};
use smhm_id::commands::{self, ClassifyConfig, RawInput};
use smhm_id::observability::init_tracing;

fn main() -> Result<()> {
    let cli = parse_args();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Classify {
            tail_diameter,
            tail_length,
            body_length,
            sex,
            repro,
            format,
            output,
            config,
            color,
            plain,
        } => {
            let valid = commands::handle_classify(ClassifyConfig {
                input: RawInput {
                    tail_diameter,
                    tail_length,
                    body_length,
                    sex: sex.into(),
                    reproductive_status: repro.into(),
                },
                format,
                output,
                config,
                color,
                plain,
            })?;
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Coefficients { variant, json } => {
            commands::show_coefficients(variant.map(Into::into), json)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
