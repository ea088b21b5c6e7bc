use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "memeboard",
    about = "Memeboard — append-only meme board with deduplicated upvotes",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Execute a JSON script of board operations against a fresh board
    Run(RunArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to the script, or `-` for stdin
    pub script: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["memeboard", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.bind.is_none());
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "memeboard", "serve", "--bind", "0.0.0.0:8080", "--config", "board.toml",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".into()));
            assert_eq!(args.config, Some("board.toml".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_run() {
        let cli = Cli::try_parse_from(["memeboard", "run", "ops.json"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.script, "ops.json");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose_and_json_format() {
        let cli = Cli::try_parse_from(["memeboard", "-v", "--format", "json", "run", "-"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn run_requires_script() {
        assert!(Cli::try_parse_from(["memeboard", "run"]).is_err());
    }
}
