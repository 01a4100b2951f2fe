use colored::Colorize;

/// How reports are decorated. Tests use [`Style::plain`] to compare text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Style { color: false }
    }

    pub fn heading(&self, text: &str) -> String {
        let text = format!("--- {text} ---");
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text
        }
    }

    pub fn banner(&self, text: &str) -> String {
        let text = format!("=== {text} ===");
        if self.color {
            text.bold().to_string()
        } else {
            text
        }
    }

    pub fn changed(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn unchanged(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn should_use_colors() -> bool {
        std::env::var_os("NO_COLOR").is_none()
    }
}
