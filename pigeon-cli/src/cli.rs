//! Command line arguments.

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "pigeon", version, about = "Validate and submit declarative forms")]
pub struct Cli {
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of the terminal.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a form and print every failure.
    Validate(FormArgs),
    /// Validate a form and submit it.
    Submit(SubmitArgs),
    /// Show how a rule spec is parsed.
    Rules {
        /// Rule spec, e.g. "required;max-len:40".
        spec: String,
    },
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// JSON document describing the forms.
    #[arg(long)]
    pub form: PathBuf,

    /// JSON file with submission settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Selector of the form to use ("#id", ".class" or a tag name).
    #[arg(long)]
    pub selector: Option<String>,

    /// Override a field value, as name=value. Repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Base URL relative actions are resolved against.
    #[arg(long)]
    pub base_url: String,

    /// HTTP method.
    #[arg(long)]
    pub method: Option<String>,

    /// Endpoint.
    #[arg(long)]
    pub action: Option<String>,

    /// Marker applied to failing fields.
    #[arg(long)]
    pub error_class: Option<String>,

    /// Request the legacy synchronous mode.
    #[arg(long)]
    pub sync: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("email=a=b@c.d").unwrap(),
            ("email".to_string(), "a=b@c.d".to_string())
        );
        assert!(parse_assignment("email").is_err());
    }

    #[test]
    fn test_submit_args() {
        let cli = Cli::try_parse_from([
            "pigeon",
            "--log-level",
            "debug",
            "submit",
            "--form",
            "forms.json",
            "--base-url",
            "http://localhost:8080",
            "--set",
            "name=Ada",
            "--sync",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LevelFilter::Debug);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert!(args.sync);
        assert_eq!(args.form.assignments, vec![("name".to_string(), "Ada".to_string())]);
        assert_eq!(args.method, None);
    }
}
