use std::fmt::Display;

use chrono::Local;
use nu_ansi_term::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Success,
    Debug,
    Verbose,
}

// Ordered to match the `Level` discriminants.
const LEVEL_TABLE: [(&str, Color); 6] = [
    ("INFO", Color::LightBlue),
    ("WARN", Color::LightYellow),
    ("ERROR", Color::LightRed),
    ("SUCCESS", Color::LightGreen),
    ("DEBUG", Color::LightMagenta),
    ("VERBOSE", Color::Cyan),
];

impl Level {
    fn tag(self) -> &'static str {
        LEVEL_TABLE[self as usize].0
    }

    fn style(self) -> Style {
        Style::new().fg(LEVEL_TABLE[self as usize].1).bold()
    }

    fn detail_color(self) -> Color {
        match self {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            _ => Color::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Success,
    Failed,
}

/// Console logger for the bot's own output. Constructed once in `main` and
/// handed to collaborators; SDK-internal diagnostics go through the `log`
/// facade instead.
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn header() -> String {
        Color::Cyan.paint("◆ LayerEdge Auto Bot").to_string()
    }

    fn timestamp() -> String {
        Color::DarkGray
            .paint(format!("[{}]", Local::now().format("%H:%M:%S")))
            .to_string()
    }

    pub fn log(&self, level: Level, message: &str, detail: Option<&str>) {
        let tag = level.style().paint(format!("[{}]", level.tag()));
        let mut line = format!(
            "{} {} {} {}",
            Self::header(),
            Self::timestamp(),
            tag,
            message
        );

        if let Some(detail) = detail {
            line.push(' ');
            line.push_str(&level.detail_color().paint(detail).to_string());
        }

        println!("{line}");
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, &message.to_string(), None);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, &message.to_string(), None);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, &message.to_string(), None);
    }

    pub fn error_with(&self, message: impl Display, detail: impl Display) {
        self.log(Level::Error, &message.to_string(), Some(&detail.to_string()));
    }

    pub fn success(&self, message: impl Display) {
        self.log(Level::Success, &message.to_string(), None);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, &message.to_string(), None);
    }

    pub fn verbose(&self, message: impl Display) {
        if self.verbose {
            self.log(Level::Verbose, &message.to_string(), None);
        }
    }

    pub fn progress(&self, wallet: &str, step: &str, status: StepStatus) {
        let glyph = match status {
            StepStatus::Success => Color::Green.paint("✔"),
            StepStatus::Failed => Color::Red.paint("✘"),
            StepStatus::Pending => Color::Yellow.paint("➤"),
        };

        println!(
            "{} {} {} {} {} - {}",
            Self::header(),
            Self::timestamp(),
            Color::LightBlue.paint("[PROGRESS]"),
            glyph,
            wallet,
            step
        );
    }
}
