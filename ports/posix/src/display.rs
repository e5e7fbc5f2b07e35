//! Host screens: an in-place terminal view and a log-only view.

use std::io::{self, Stdout, Write};

use beacon_core::Frame;
use beacon_hal::sim::PinProbe;
use beacon_rt::Screen;
use crossterm::{cursor, execute, queue, style::Print, terminal};

fn pin_summary(probes: &[PinProbe; 2]) -> String {
    probes
        .iter()
        .map(|probe| format!("{}={}", probe.label(), if probe.is_high() { 1 } else { 0 }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Redraws the frame and pin levels in place whenever they change.
pub struct TerminalDisplay {
    out: Stdout,
    probes: [PinProbe; 2],
    last: Option<String>,
}

impl TerminalDisplay {
    pub fn new(probes: [PinProbe; 2]) -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;
        Ok(Self {
            out,
            probes,
            last: None,
        })
    }

    fn render(&mut self, frame: &Frame, pins: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::FromCursorDown),
            Print(format!("{}\r\n", frame.title()))
        )?;
        for line in frame.lines() {
            queue!(self.out, Print(format!("  {}\r\n", line)))?;
        }
        let indicator = match frame.indicator() {
            beacon_core::Indicator::Hidden => "",
            beacon_core::Indicator::Off => "( ) ",
            beacon_core::Indicator::On => "(*) ",
        };
        queue!(
            self.out,
            Print(format!("\r\n{}{}\r\n", indicator, pins)),
            Print(format!("{}\r\n", crate::keyboard::help()))
        )?;
        self.out.flush()
    }
}

impl Screen for TerminalDisplay {
    fn draw(&mut self, frame: &Frame) {
        let pins = pin_summary(&self.probes);
        let snapshot = format!("{} {}", frame, pins);
        if self.last.as_deref() == Some(snapshot.as_str()) {
            return;
        }
        if let Err(err) = self.render(frame, &pins) {
            log::warn!("terminal draw failed: {}", err);
        }
        self.last = Some(snapshot);
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, Print("\r\n"));
    }
}

/// Logs each distinct frame at `info`, for headless runs.
pub struct LogDisplay {
    probes: [PinProbe; 2],
    last: Option<String>,
    changes: usize,
}

impl LogDisplay {
    pub fn new(probes: [PinProbe; 2]) -> Self {
        Self {
            probes,
            last: None,
            changes: 0,
        }
    }

    /// Number of distinct screens logged so far
    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl Screen for LogDisplay {
    fn draw(&mut self, frame: &Frame) {
        let snapshot = format!("{} [{}]", frame, pin_summary(&self.probes));
        if self.last.as_deref() != Some(snapshot.as_str()) {
            log::info!("{}", snapshot);
            self.changes += 1;
            self.last = Some(snapshot);
        }
    }
}

/// Either host screen, chosen at startup.
pub enum HostScreen {
    Terminal(TerminalDisplay),
    Log(LogDisplay),
}

impl Screen for HostScreen {
    fn draw(&mut self, frame: &Frame) {
        match self {
            HostScreen::Terminal(display) => display.draw(frame),
            HostScreen::Log(display) => display.draw(frame),
        }
    }
}
