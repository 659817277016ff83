use inksac::prelude::*;

/// Colors interactive output when the terminal supports it, otherwise
/// passes text through untouched.
#[derive(Debug, Clone, Copy)]
pub struct PromptStyler {
    color_support: ColorSupport,
}

impl Default for PromptStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptStyler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// The working-directory segment of the prompt.
    pub fn prompt_dir(&self, dir: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return dir.to_string();
        }

        let style = Style::builder().foreground(Color::Cyan).bold().build();
        dir.style(style).to_string()
    }
}
