//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Prefilled business description for the AI dialog
    pub description: Option<String>,
    /// Prefilled JSON context file for the AI dialog
    pub context_path: Option<PathBuf>,
    /// Overrides `STRATE_MODEL`
    pub model: Option<String>,
    /// Start on an empty board without the AI dialog
    pub manual: bool,
    /// Print the notes buffer to stdout on exit
    pub print_on_exit: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Strate TUI - Plan a landing page as an ordered list of sections");
    eprintln!();
    eprintln!("Usage: strate-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --describe <TEXT>  Prefill the business description");
    eprintln!("  -c, --context <FILE>   Prefill the JSON context file");
    eprintln!("  -m, --model <NAME>     Model used for proposals (default: gemini-2.5-flash)");
    eprintln!("  --manual               Start on an empty board, skip the AI dialog");
    eprintln!("  -p, --print            Print the notes to stdout on exit");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GEMINI_API_KEY (or API_KEY), STRATE_MODEL, STRATE_API_URL,");
    eprintln!("  STRATE_LOG_FILE, RUST_LOG");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  strate-tui                                    # AI dialog first");
    eprintln!("  strate-tui -d \"Agence immobilière à Lyon\"     # Prefilled description");
    eprintln!("  strate-tui --manual -p > brief.txt            # Build by hand, keep the notes");
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(CliConfig),
    Help,
    Version,
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}

/// Parse an argument list (without the program name)
pub fn parse_from<I>(args: I) -> io::Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut config = CliConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-V" | "--version" => return Ok(Invocation::Version),
            "--manual" => config.manual = true,
            "-p" | "--print" => config.print_on_exit = true,
            "-d" | "--describe" => {
                config.description = Some(args.next().ok_or_else(|| missing_value(&arg))?);
            }
            "-c" | "--context" => {
                config.context_path =
                    Some(PathBuf::from(args.next().ok_or_else(|| missing_value(&arg))?));
            }
            "-m" | "--model" => {
                config.model = Some(args.next().ok_or_else(|| missing_value(&arg))?);
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", arg),
                ));
            }
        }
    }

    Ok(Invocation::Run(config))
}

/// Parse CLI arguments and return configuration.
/// Help and version exit the process.
pub fn parse_args() -> io::Result<CliConfig> {
    match parse_from(std::env::args().skip(1)) {
        Ok(Invocation::Run(config)) => Ok(config),
        Ok(Invocation::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(Invocation::Version) => {
            println!("strate-tui {}", VERSION);
            std::process::exit(0);
        }
        Err(e) => {
            print_usage();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> io::Result<Invocation> {
        parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Invocation::Run(CliConfig::default()));
    }

    #[test]
    fn test_all_options() {
        let invocation = parse(&[
            "-d",
            "Plombier à Nantes",
            "--context",
            "site.json",
            "-m",
            "gemini-2.5-pro",
            "--manual",
            "-p",
        ])
        .unwrap();
        assert_eq!(
            invocation,
            Invocation::Run(CliConfig {
                description: Some("Plombier à Nantes".to_string()),
                context_path: Some(PathBuf::from("site.json")),
                model: Some("gemini-2.5-pro".to_string()),
                manual: true,
                print_on_exit: true,
            })
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--describe"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("--describe"));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--iterations"]).unwrap_err();
        assert!(err.to_string().contains("Unknown argument"));
    }
}
