#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;
use std::io::IsTerminal;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

#[derive(Debug, Clone)]
pub struct Logger {
    #[cfg_attr(not(feature = "cli"), allow(dead_code))]
    colored: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Colors are only emitted with the `cli` feature and when stdout is a terminal.
    pub fn new() -> Self {
        Logger {
            colored: cfg!(feature = "cli") && std::io::stdout().is_terminal(),
        }
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        println!("{}", self.format_line(level, message));
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        self.log_message(level, message);
        for t in trace {
            println!("     ↳ {}", t);
        }
    }

    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        format!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        )
    }

    fn tool_signature(&self) -> String {
        #[cfg(feature = "cli")]
        if self.colored {
            let mut s = String::new();

            // writing into a String cannot fail
            let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
            s.push('[');
            let _ = write!(
                &mut s,
                "{}",
                SetForegroundColor(Color::Rgb {
                    r: 71,
                    g: 140,
                    b: 191,
                })
            );
            let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
            s.push_str("Buildbump");
            let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
            let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
            s.push(']');
            let _ = write!(&mut s, "{}", ResetColor);

            return s;
        }

        "[Buildbump]".to_string()
    }

    fn format_status(&self, level: LogLevel) -> String {
        #[cfg(feature = "cli")]
        if self.colored {
            let mut s = String::new();

            let color = match level {
                LogLevel::Error => Color::Rgb {
                    r: 244,
                    g: 67,
                    b: 54,
                },
                LogLevel::Info => Color::Rgb {
                    r: 33,
                    g: 150,
                    b: 243,
                },
                LogLevel::Debug => Color::Rgb {
                    r: 103,
                    g: 58,
                    b: 183,
                },
            };

            s.push('[');
            let _ = write!(&mut s, "{}", SetForegroundColor(color));
            let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
            s.push_str(status_label(&level));
            let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
            s.push(']');
            let _ = write!(&mut s, "{}", ResetColor);

            return s;
        }

        format!("[{}]", status_label(&level))
    }
}

fn status_label(level: &LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "ERROR",
        LogLevel::Info => "INFO",
        LogLevel::Debug => "DEBUG",
    }
}
