use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use beacon_core::{Application, Flashlight, InputEvent, Key, Outputs, Pattern, PoliceLight};
use beacon_hal::sim::SimPin;
use beacon_posix::{keyboard, HostScreen, LogDisplay, ScriptedInput, TerminalDisplay, PIN_LABELS};
use beacon_rt::{Clock, ExitStatus, Runner, RuntimeConfig, SystemClock};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-channel GPIO beacon applications")]
struct Opts {
    #[command(subcommand)]
    app: AppCommand,

    /// How long each loop iteration waits for input
    #[arg(long = "poll-ms", default_value_t = 100, value_name = "MS")]
    poll_ms: u64,

    /// Log frames instead of drawing them; no keyboard
    #[arg(long)]
    headless: bool,

    /// Comma separated keys to replay, e.g. `ok,right,back`
    #[arg(long, value_name = "KEYS")]
    script: Option<String>,

    /// Delay before each scripted key
    #[arg(long = "step-ms", default_value_t = 500, value_name = "MS")]
    step_ms: u64,
}

#[derive(Subcommand, Debug)]
enum AppCommand {
    /// Blink the two channels in police-light patterns
    Police {
        /// Starting pattern index (0 Red/Blue, 1 Alt Blink, 2 Purple Flash)
        #[arg(long, default_value_t = 0)]
        pattern: usize,
    },
    /// Toggle each channel on and off
    Flashlight,
}

fn main() -> Result<ExitCode> {
    let opts = Opts::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = SystemClock::new();
    let status = match &opts.app {
        AppCommand::Police { pattern } => {
            let pattern = Pattern::from_index(*pattern)?;
            run(&opts, PoliceLight::with_pattern(pattern, clock.now()), clock)?
        }
        AppCommand::Flashlight => run(&opts, Flashlight::new(), clock)?,
    };

    Ok(ExitCode::from(status.code()))
}

fn run<A: Application>(opts: &Opts, app: A, clock: SystemClock) -> Result<ExitStatus> {
    let script = opts
        .script
        .as_deref()
        .map(|keys| ScriptedInput::parse(keys, Duration::from_millis(opts.step_ms)))
        .transpose()
        .context("invalid --script")?;

    let a = SimPin::new(PIN_LABELS[0]);
    let b = SimPin::new(PIN_LABELS[1]);
    let probes = [a.probe(), b.probe()];
    let screen = if opts.headless {
        HostScreen::Log(LogDisplay::new(probes))
    } else {
        HostScreen::Terminal(TerminalDisplay::new(probes).context("terminal setup failed")?)
    };

    let config = RuntimeConfig::builder()
        .name(A::NAME)
        .poll_timeout(Duration::from_millis(opts.poll_ms))
        .build();

    let runner = match Runner::start(config, app, Outputs::new(a, b), clock, screen) {
        Ok(runner) => runner,
        Err(err) => return Ok(ExitStatus::from(&err)),
    };

    let interrupt = runner.input();
    ctrlc::set_handler(move || {
        let _ = interrupt.send(InputEvent::press(Key::Back));
    })
    .context("failed to install Ctrl-C handler")?;

    let scripted = script.map(|script| script.spawn(runner.input()));
    let keys = (!opts.headless).then(|| keyboard::spawn(runner.input()));

    let status = runner.run();

    if let Some(handle) = scripted {
        let _ = handle.join();
    }
    if let Some(handle) = keys {
        match handle.join() {
            Ok(result) => result.context("keyboard input failed")?,
            Err(_) => log::error!("keyboard thread panicked"),
        }
    }
    Ok(status)
}
