mod cli;
mod config;
mod data;
mod error;
mod format;
mod header;
mod logging;
mod output;
mod templating;

use cli::Cli;
use colored::*;
use config::Config;
use error::GoatError;
use output::Emitted;
use std::io::Read;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::debug!(error = ?err, "generation failed");
        eprintln!("{}", err.to_string().red());
        std::process::exit(GoatError::EXIT_CODE);
    }
}

async fn run(cli: Cli) -> Result<(), GoatError> {
    let cfg = Config::load(cli.config.as_deref()).map_err(|e| GoatError::Config(format!("{e:#}")))?;

    // Parse template data.
    let data = match &cli.data_file {
        Some(path) => data::read_data_file(path)?,
        None => data::parse_data(cli.data.as_deref())?,
    };

    // Read template.
    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path).map_err(GoatError::Input)?,
        None => {
            eprintln!("{}", "Reading from stdin...".dimmed());
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(GoatError::Input)?;
            text
        }
    };

    let mut src = templating::render(&input, &data)?;
    tracing::info!(bytes = src.len(), "template rendered");

    if !cli.no_header {
        let header = header::render_header(cfg.header_template(), cli.input.as_deref())?;
        src = header::prepend(&header, src);
    }

    let mut bytes = src.into_bytes();
    if !cli.no_format {
        let formatter = cfg.formatter(cli.formatter.as_deref());
        bytes = formatter.run(&bytes).await.map_err(|source| GoatError::Format {
            formatter: formatter.name().to_string(),
            source,
        })?;
        tracing::info!(formatter = %formatter.command, bytes = bytes.len(), "source formatted");
    }

    match output::emit(cli.output.as_deref(), &bytes, cli.force).map_err(GoatError::Output)? {
        Emitted::Stdout => {}
        Emitted::Written(path) => eprintln!("{} {}", "Wrote to:".green(), path.display()),
        Emitted::Unchanged(path) => eprintln!("{} {}", "Unchanged:".yellow(), path.display()),
    }
    Ok(())
}
