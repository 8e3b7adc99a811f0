use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde_json::json;
use travelassist::agents::{JAPAN_TRAIN_AGENT, WEATHER_AGENT};
use travelassist::{Assistant, ReqwestTransport, TravelAssistConfig, TravelAssistError, logging};

const USAGE: &str = "\
TravelAssist - weather and Japan rail station tools for conversational agents

Usage: travelassist [--config <path>] [--verbose] <command>

Commands:
  weather <location>   Current weather for a place (get-weather)
  station <name>       Station lines, address and nearby stations (japan-train-info)
  tools                Print tool definitions as JSON
  agents               List agents with their model and tools
  help                 Show this message

Configuration is read from the config file and TRAVELASSIST_* environment
variables, e.g. TRAVELASSIST_LOGGING__LEVEL=debug.";

#[derive(Debug, PartialEq)]
enum Command {
    Weather(String),
    Station(String),
    Tools,
    Agents,
    Help,
}

#[derive(Debug, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
    verbose: bool,
    command: Command,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Cli> {
    let mut config = None;
    let mut verbose = false;
    let mut rest = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => rest.insert(0, "help".to_string()),
            _ => rest.push(arg),
        }
    }

    let mut rest = rest.into_iter();
    let command = match rest.next().as_deref() {
        None | Some("help") => Command::Help,
        Some("tools") => Command::Tools,
        Some("agents") => Command::Agents,
        Some("weather") => Command::Weather(rest.collect::<Vec<_>>().join(" ")),
        Some("station") => Command::Station(rest.collect::<Vec<_>>().join(" ")),
        Some(other) => bail!("Unknown command '{other}'\n\n{USAGE}"),
    };

    Ok(Cli {
        config,
        verbose,
        command,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<TravelAssistError>() {
                Some(error) => {
                    tracing::error!("{err:#}");
                    let message = error.user_message();
                    eprintln!("Error: {message}");
                    if message != error.to_string() {
                        eprintln!("  {error}");
                    }
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, start logging and wire the agents to a live transport
fn build_assistant(config_path: Option<PathBuf>, verbose: bool) -> Result<Assistant> {
    let config = TravelAssistConfig::load_from_path(config_path)?;
    logging::init(&config.logging, verbose);

    let transport = Arc::new(ReqwestTransport::new(&config.http)?);
    Ok(Assistant::new(transport, &config))
}

async fn run() -> Result<()> {
    let Cli {
        config,
        verbose,
        command,
    } = parse_args(std::env::args().skip(1))?;

    let output = match command {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Weather(location) => {
            build_assistant(config, verbose)?
                .call_tool(WEATHER_AGENT, "get-weather", json!({ "location": location }))
                .await?
        }
        Command::Station(station) => {
            build_assistant(config, verbose)?
                .call_tool(JAPAN_TRAIN_AGENT, "japan-train-info", json!({ "station": station }))
                .await?
        }
        Command::Tools => {
            serde_json::to_value(build_assistant(config, verbose)?.tools().definitions())?
        }
        Command::Agents => {
            let assistant = build_assistant(config, verbose)?;
            let agents: Vec<_> = assistant
                .agents()
                .map(|(key, agent)| {
                    json!({ "key": key, "name": agent.name, "model": agent.model, "tools": agent.tools })
                })
                .collect();
            json!(agents)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
