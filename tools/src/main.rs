//! controls-runner: terminal operator console for a word-round game server.
//!
//! Usage:
//!   controls-runner --url http://localhost:8081
//!   controls-runner --config controls.json --poll-ms 300 --render-ms 100

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use wordround_core::{
    auth::{AuthState, OperatorPrompt},
    clock::SystemClock,
    command::ControlAction,
    config::ControlsConfig,
    controller::Controller,
    render::{Region, RenderSink},
    transport::HttpTransport,
};

/// Prints each changed region as its own line. The change-diffing in the
/// renderer keeps this quiet between actual updates.
struct TermSink;

impl RenderSink for TermSink {
    fn set_text(&mut self, region: Region, text: &str) {
        println!("{:>7}| {text}", region.key());
    }
}

/// Blocking stdin/stdout prompt. Fine for a single-operator console.
struct StdinPrompt;

impl StdinPrompt {
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl OperatorPrompt for StdinPrompt {
    fn request_password(&mut self) -> Option<String> {
        print!("Please enter the password: ");
        let _ = io::stdout().flush();
        self.read_line()
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }

    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} [y/N] ");
        let _ = io::stdout().flush();
        matches!(self.read_line().as_deref(), Some("y") | Some("yes"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => ControlsConfig::load(Path::new(&w[1]))?,
        None => ControlsConfig::default(),
    };
    if let Some(w) = args.windows(2).find(|w| w[0] == "--url") {
        config.server_url = w[1].clone();
    }
    config.state_poll_ms = parse_arg(&args, "--poll-ms", config.state_poll_ms);
    config.render_refresh_ms = parse_arg(&args, "--render-ms", config.render_refresh_ms);

    println!("word-round controls");
    println!("  server:    {}", config.server_url);
    println!("  poll:      {}ms", config.state_poll_ms);
    println!("  render:    {}ms", config.render_refresh_ms);
    println!();

    let transport = HttpTransport::new(&config.server_url)?;
    let mut controller = Controller::new(transport, config);
    let _refresh_tasks = controller.spawn_refresh_tasks(SystemClock, TermSink);

    let mut prompt = StdinPrompt;
    match controller.resolve_authorization(&mut prompt).await {
        Ok(AuthState::Authorized) => {}
        Ok(_) => println!("Running without control authorization."),
        Err(err) => log::warn!("authorization check failed: {err}"),
    }

    print_help();
    run_command_loop(&controller, &mut prompt).await;

    println!("Stopping the controls console");
    Ok(())
}

async fn run_command_loop(controller: &Controller<HttpTransport>, prompt: &mut StdinPrompt) {
    let stdin = io::stdin();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = match stdin.lock().read_line(&mut buffer) {
            Ok(n) => n,
            Err(_) => break,
        };
        if bytes_read == 0 {
            break; // EOF
        }

        let mut parts = buffer.split_whitespace();
        let action = match parts.next() {
            None => continue,
            Some("quit") | Some("q") => break,
            Some("help") | Some("?") => {
                print_help();
                continue;
            }
            Some("next") => ControlAction::NextWord,
            Some("skip") => ControlAction::SkipWord,
            Some("nuke") => ControlAction::NukeUsedWords,
            Some("reset") => ControlAction::Reset,
            Some("start") => ControlAction::Start,
            Some("pause") => ControlAction::Pause,
            Some("resume") => ControlAction::Resume,
            Some("points") => match parts.next().and_then(|v| v.parse().ok()) {
                Some(points) => ControlAction::ModifyPoints { points },
                None => {
                    println!("usage: points <delta>");
                    continue;
                }
            },
            Some("timer") => match parts.next().and_then(|v| v.parse().ok()) {
                Some(seconds) => ControlAction::ModifyTimer { seconds },
                None => {
                    println!("usage: timer <delta-seconds>");
                    continue;
                }
            },
            Some(other) => {
                log::warn!("unknown command: {other}");
                continue;
            }
        };

        controller.dispatch(prompt, action).await;
    }
}

fn print_help() {
    println!("commands:");
    println!("  next | skip | nuke | reset");
    println!("  start | pause | resume");
    println!("  points <delta>   adjust the score");
    println!("  timer <delta>    adjust the countdown in seconds");
    println!("  help | quit");
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
