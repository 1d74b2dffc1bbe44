//! Shared helpers for widget rendering tests

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// A terminal over [`TestBackend`] with convenience assertions.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
    width: u16,
    height: u16,
}

impl TestTerminal {
    /// Standard 100x30 test terminal.
    pub fn new() -> Self {
        Self::with_size(100, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self {
            terminal,
            width,
            height,
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw");
    }

    /// Draw a full frame with the given closure.
    pub fn draw(&mut self, f: impl FnOnce(&mut ratatui::Frame)) {
        self.terminal.draw(f).expect("draw");
    }

    /// The rendered buffer flattened to a newline-separated string.
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }
}
