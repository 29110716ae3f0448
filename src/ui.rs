//! Styled terminal output for the interactive walk.
//!
//! Prompts and status lines go to stderr so that the final summary on stdout
//! stays clean. Colors honor NO_COLOR / FORCE_COLOR and tty detection.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            colors_enabled: should_use_colors(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

pub struct Ui {
    config: UiConfig,
    writer: Box<dyn Write>,
}

impl Ui {
    pub fn new(config: UiConfig) -> Self {
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self {
            config,
            writer: Box::new(io::stderr()),
        }
    }

    /// Create UI with custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer(config: UiConfig, writer: Box<dyn Write>) -> Self {
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self { config, writer }
    }

    pub fn header(&mut self, version: &str) {
        let title = format!("Anime Folder Wizard v{}", version);
        let width = title.len() + 4;

        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", format!("╔{}╗", "═".repeat(width)).cyan());
            let _ = writeln!(self.writer, "{}", format!("║  {}  ║", title).cyan().bold());
            let _ = writeln!(self.writer, "{}", format!("╚{}╝", "═".repeat(width)).cyan());
        } else {
            let _ = writeln!(self.writer, "╔{}╗", "═".repeat(width));
            let _ = writeln!(self.writer, "║  {}  ║", title);
            let _ = writeln!(self.writer, "╚{}╝", "═".repeat(width));
        }
        let _ = writeln!(self.writer);
    }

    /// Banner for the folder currently under consideration
    pub fn folder_banner(&mut self, current: usize, total: usize, name: &str) {
        let counter = format!("[{}/{}]", current, total);
        let _ = writeln!(self.writer);
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", counter.cyan(), name.bold());
        } else {
            let _ = writeln!(self.writer, "{} {}", counter, name);
        }
    }

    pub fn searching(&mut self, query: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", format!("Searching for '{}'...", query).dimmed());
        } else {
            let _ = writeln!(self.writer, "Searching for '{}'...", query);
        }
    }

    /// One row of the candidate list, 1-based
    pub fn candidate_row(&mut self, number: usize, label: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "  {} {}", format!("{}.", number).cyan(), label);
        } else {
            let _ = writeln!(self.writer, "  {}. {}", number, label);
        }
    }

    pub fn prompt(&mut self) {
        if self.config.colors_enabled {
            let _ = write!(self.writer, "{} ", ">".cyan().bold());
        } else {
            let _ = write!(self.writer, "> ");
        }
        let _ = self.writer.flush();
    }

    pub fn info(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.cyan());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    pub fn success(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), msg.green());
        } else {
            let _ = writeln!(self.writer, "* {}", msg);
        }
    }

    pub fn warning(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
        } else {
            let _ = writeln!(self.writer, "! {}", msg);
        }
    }

    pub fn error(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✗".red().bold(), msg.red());
        } else {
            let _ = writeln!(self.writer, "X {}", msg);
        }
    }

    pub fn dim(&mut self, msg: &str) {
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    pub fn help(&mut self) {
        self.dim("Commands:");
        self.dim("  1-5        rename using that candidate");
        self.dim("  s          skip this folder");
        self.dim("  r          search again");
        self.dim("  o <text>   search with an override query (o alone clears it)");
        self.dim("  b          toggle bracket stripping and search again");
        self.dim("  h, ?       show this help");
        self.dim("  q          quit");
    }
}
