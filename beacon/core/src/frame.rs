//! Status frames handed to the display service

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::time::{Millis, Tick};

/// Maximum characters per line; the screen is 128 px wide.
pub const LINE_CAPACITY: usize = 24;

/// Maximum detail lines below the title
pub const MAX_LINES: usize = 3;

pub type Line = String<LINE_CAPACITY>;

/// State of the LED icon drawn next to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Hidden,
    Off,
    On,
}

/// A rendered status screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    title: Line,
    lines: Vec<Line, MAX_LINES>,
    indicator: Indicator,
}

impl Frame {
    pub fn new(title: &str) -> Self {
        Self {
            title: truncated(format_args!("{}", title)),
            lines: Vec::new(),
            indicator: Indicator::Hidden,
        }
    }

    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = indicator;
        self
    }

    /// Appends a formatted line. Text past [`LINE_CAPACITY`] and lines past
    /// [`MAX_LINES`] are dropped.
    pub fn push_line(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.lines.push(truncated(args));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.indicator {
            Indicator::Hidden => "",
            Indicator::Off => "( ) ",
            Indicator::On => "(*) ",
        };
        write!(f, "{}{}", icon, self.title)?;
        for line in self.lines() {
            write!(f, " | {}", line)?;
        }
        Ok(())
    }
}

fn truncated(args: fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    let _ = Truncating(&mut line).write_fmt(args);
    line
}

struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Cosmetic LED icon blink, independent of pattern timing.
#[derive(Debug, Clone)]
pub struct BlinkIndicator {
    lit: bool,
    last_toggle: Tick,
}

impl BlinkIndicator {
    pub const PERIOD: Millis = Millis::new(300);

    pub const fn new(now: Tick) -> Self {
        Self {
            lit: false,
            last_toggle: now,
        }
    }

    /// Flips the phase once per period and returns whether the icon is lit.
    pub fn update(&mut self, now: Tick) -> bool {
        if now.has_elapsed(self.last_toggle, Self::PERIOD) {
            self.lit = !self.lit;
            self.last_toggle = now;
        }
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_is_truncated() {
        let mut frame = Frame::new("a title that is far too long to fit");
        assert_eq!(frame.title().len(), LINE_CAPACITY);

        for n in 0..5 {
            frame.push_line(format_args!("line {}", n));
        }
        assert_eq!(frame.lines().count(), MAX_LINES);
    }

    #[test]
    fn display_joins_lines() {
        let mut frame = Frame::new("Flashlight").with_indicator(Indicator::On);
        frame.push_line(format_args!("> B2: ON"));
        assert_eq!(frame.to_string(), "(*) Flashlight | > B2: ON");
    }

    #[test]
    fn blink_toggles_every_period() {
        let mut blink = BlinkIndicator::new(Tick::ZERO);
        assert!(!blink.update(Tick::new(299)));
        assert!(blink.update(Tick::new(300)));
        assert!(blink.update(Tick::new(500)));
        assert!(!blink.update(Tick::new(600)));
    }
}
