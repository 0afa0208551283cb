// Sat Oct 17 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    style: BannerStyle,
    use_color: bool,
    width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Box,
    Minimal,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            style: BannerStyle::Box,
            use_color: true,
            width: 52,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self) -> String {
        match self.style {
            BannerStyle::Box => self.render_box(),
            BannerStyle::Minimal => self.render_minimal(),
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.render());
    }

    pub fn default_banner() -> Self {
        Banner::new("Unity Version Finder")
            .with_subtitle("Unity engine version detection for APK archives")
            .with_version(env!("CARGO_PKG_VERSION"))
    }

    fn render_box(&self) -> String {
        let inner_width = self.width.saturating_sub(4).max(self.title.len());
        let h_line = "─".repeat(inner_width + 2);
        let mut lines = vec![format!("┌{}┐", h_line)];

        let title_line = format!("{:^width$}", self.title, width = inner_width);
        if self.use_color {
            lines.push(format!("│ {} │", title_line.cyan().bold()));
        } else {
            lines.push(format!("│ {} │", title_line));
        }

        if let Some(subtitle) = &self.subtitle {
            lines.push(format!("│ {:^width$} │", subtitle, width = inner_width));
        }

        if let Some(version) = &self.version {
            lines.push(format!("├{}┤", h_line));
            let ver_line = format!("{:^width$}", format!("v{}", version), width = inner_width);
            if self.use_color {
                lines.push(format!("│ {} │", ver_line.green()));
            } else {
                lines.push(format!("│ {} │", ver_line));
            }
        }

        lines.push(format!("└{}┘", h_line));
        lines.join("\n")
    }

    fn render_minimal(&self) -> String {
        let mut title = self.title.clone();
        if let Some(version) = &self.version {
            title = format!("{} v{}", title, version);
        }

        if self.use_color {
            title.cyan().bold().to_string()
        } else {
            title
        }
    }
}
