//! Command-line flags for the `maskfall` binary.

use std::path::PathBuf;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Campaign JSON; the stock campaign is used when absent.
    pub config: Option<PathBuf>,
    pub seconds: f32,
    pub seed: u64,
    pub verbose: bool,
    /// Print the run summary as JSON instead of text.
    pub json: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            seconds: 120.0,
            seed: 42,
            verbose: false,
            json: false,
            help: false,
        }
    }
}

pub fn usage() -> &'static str {
    "maskfall: headless MASKFALL arena run\n\
     \n\
     Options:\n\
     \n\
       --config <path>   Campaign JSON file (default: built-in campaign)\n\
       --seconds <f>     Simulated seconds to run (default: 120)\n\
       --seed <n>        RNG seed (default: 42)\n\
       --verbose         Debug logging (RUST_LOG still takes precedence)\n\
       --json            Print the summary as JSON\n\
       --help            Show this message\n"
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                cli.config = Some(PathBuf::from(value_of(args, i, "--config")?));
                i += 1;
            }
            "--seconds" => {
                let raw = value_of(args, i, "--seconds")?;
                let seconds: f32 = raw
                    .parse()
                    .map_err(|_| format!("invalid --seconds value: {raw}"))?;
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(format!("--seconds must be a non-negative number: {raw}"));
                }
                cli.seconds = seconds;
                i += 1;
            }
            "--seed" => {
                let raw = value_of(args, i, "--seed")?;
                cli.seed = raw
                    .parse()
                    .map_err(|_| format!("invalid --seed value: {raw}"))?;
                i += 1;
            }
            "--verbose" | "-v" => cli.verbose = true,
            "--json" => cli.json = true,
            "--help" | "-h" | "help" => cli.help = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(cli)
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}
