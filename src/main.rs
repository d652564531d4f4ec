// SPDX-License-Identifier: MPL-2.0
use geotag_lens::config::{self, Config};
use geotag_lens::{ExtractorConfig, GpsCoordinates, GpsExtractor};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
geotag_lens - print the GPS position stored in JPEG photos

USAGE:
  geotag_lens [OPTIONS] FILE...

OPTIONS:
  --config PATH     Read settings from PATH instead of the user config dir
  --format FORMAT   pretty (default), label or url
  -h, --help        Print this help
";

const NO_GEOTAG: &str =
    "no geotag found; enter the location manually or use the device location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Pretty,
    Label,
    Url,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "label" => Ok(OutputFormat::Label),
            "url" => Ok(OutputFormat::Url),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

impl OutputFormat {
    fn render(self, coords: &GpsCoordinates, precision: usize) -> String {
        match self {
            OutputFormat::Pretty => coords.format_with_precision(precision),
            OutputFormat::Label => coords.short_label(),
            OutputFormat::Url => coords.map_url(),
        }
    }
}

#[derive(Debug)]
enum CliError {
    Args(pico_args::Error),
    MissingFile,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Args(err) => write!(f, "{err}"),
            CliError::MissingFile => write!(f, "missing FILE operand"),
        }
    }
}

impl From<pico_args::Error> for CliError {
    fn from(err: pico_args::Error) -> Self {
        CliError::Args(err)
    }
}

#[derive(Debug)]
struct Flags {
    config_path: Option<PathBuf>,
    format: OutputFormat,
    files: Vec<PathBuf>,
}

/// Returns `None` when help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, CliError> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_path = args.opt_value_from_str("--config")?;
    let format = args.opt_value_from_str("--format")?.unwrap_or_default();
    let files: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();
    if files.is_empty() {
        return Err(CliError::MissingFile);
    }

    Ok(Some(Flags {
        config_path,
        format,
        files,
    }))
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "could not load settings, using defaults");
        Config::default()
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geotag_lens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let config = load_config(flags.config_path.as_ref());
    let extractor = GpsExtractor::new(ExtractorConfig::from(&config));
    let mut failed = false;

    for path in &flags.files {
        match extractor.read_file_async(path).await {
            Ok(Some(coords)) => {
                println!(
                    "{}: {}",
                    path.display(),
                    flags.format.render(&coords, config.precision())
                );
            }
            Ok(None) => println!("{}: {NO_GEOTAG}", path.display()),
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "failed to read photo");
                eprintln!("{}: {err}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
