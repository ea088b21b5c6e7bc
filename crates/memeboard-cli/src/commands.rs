use std::io::Read;

use anyhow::Context;
use colored::Colorize;
use memeboard_sdk::Memeboard;
use memeboard_server::{MemeboardServer, ServerConfig};
use serde_json::json;

use crate::cli::*;
use crate::script::{self, StepOutcome};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Run(args) => cmd_run(args, cli.format),
    }
}

/// Resolve the server configuration: file first, then flag overrides.
fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    println!("Memeboard server on {}", config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(MemeboardServer::new(config).serve())?;
    Ok(())
}

fn cmd_run(args: RunArgs, format: OutputFormat) -> anyhow::Result<()> {
    let text = if args.script == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.script)
            .with_context(|| format!("reading script {}", args.script))?
    };

    let steps = script::parse_script(&text)?;
    let board = Memeboard::new();
    for outcome in script::execute(&board, &steps) {
        match format {
            OutputFormat::Text => print_text(&outcome),
            OutputFormat::Json => println!("{}", outcome_json(&outcome)),
        }
    }
    Ok(())
}

fn print_text(outcome: &StepOutcome) {
    let label = format!("#{} {}", outcome.index + 1, outcome.op);
    match &outcome.result {
        Ok(output) => println!("{} {} {}", "✓".green().bold(), label.bold(), output),
        Err(e) => println!("{} {} {}", "✗".red().bold(), label.bold(), e.to_string().red()),
    }
}

fn outcome_json(outcome: &StepOutcome) -> serde_json::Value {
    match &outcome.result {
        Ok(output) => json!({
            "step": outcome.index + 1,
            "op": outcome.op,
            "ok": true,
            "output": output,
        }),
        Err(e) => json!({
            "step": outcome.index + 1,
            "op": outcome.op,
            "ok": false,
            "error": e.to_string(),
        }),
    }
}
