use crate::counter::{CharCount, CounterLevel};
use colored::*;
use std::io::{self, Write};

/// Everything the controller needs from the page. Keeps request logic
/// testable without a real UI.
pub trait FormView {
    /// Show the spinner, hide error and result panels, disable submit.
    fn show_loading(&mut self);
    /// Hide the spinner and re-enable submit.
    fn hide_loading(&mut self);
    /// Show `message` in the error panel and hide the result panel.
    fn show_error(&mut self, message: &str);
    /// Show the image with its alt text and hide the error panel.
    fn show_result(&mut self, src: &str, alt: &str);
    fn update_counter(&mut self, count: &CharCount);
    fn set_prompt(&mut self, prompt: &str);
}

/// Drops control characters so service-supplied text can't drive the terminal.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Renders form updates as lines on a writer, stdout by default.
pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    colors: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            colors: true,
        }
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, colors: false }
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, plain: &str, styled: ColoredString) {
        let result = if self.colors {
            writeln!(self.out, "{}", styled)
        } else {
            writeln!(self.out, "{}", plain)
        };
        if let Err(e) = result {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> FormView for TerminalView<W> {
    fn show_loading(&mut self) {
        let text = "Generating image...";
        self.line(text, text.cyan());
    }

    fn hide_loading(&mut self) {
        log::debug!("Loading indicator cleared");
    }

    fn show_error(&mut self, message: &str) {
        let text = format!("Error: {}", sanitize_for_terminal(message));
        let styled = text.red().bold();
        self.line(&text, styled);
    }

    fn show_result(&mut self, src: &str, alt: &str) {
        let text = sanitize_for_terminal(alt);
        let styled = text.green().bold();
        self.line(&text, styled);
        log::debug!("Image source is a data URL of {} bytes", src.len());
    }

    fn update_counter(&mut self, count: &CharCount) {
        let text = count.label();
        let styled = match count.level {
            CounterLevel::Muted => text.bright_black(),
            CounterLevel::Warning => text.yellow(),
            CounterLevel::Danger => text.red(),
        };
        self.line(&text, styled);
    }

    fn set_prompt(&mut self, prompt: &str) {
        let text = sanitize_for_terminal(prompt);
        let styled = text.white();
        self.line(&text, styled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut TerminalView<Vec<u8>>)) -> String {
        let mut view = TerminalView::new(Vec::new());
        f(&mut view);
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(sanitize_for_terminal("cat\x1b[31m red\n"), "cat[31m red");
        assert_eq!(sanitize_for_terminal("plain prompt"), "plain prompt");
    }

    #[test]
    fn test_plain_rendering() {
        let output = render(|view| {
            view.show_loading();
            view.show_error("quota exceeded");
            view.update_counter(&CharCount::measure("abc"));
            view.show_result("data:image/png;base64,AAAA", "Generated image: cat");
        });
        assert_eq!(
            output,
            "Generating image...\nError: quota exceeded\n3/1000 characters\nGenerated image: cat\n"
        );
    }
}
