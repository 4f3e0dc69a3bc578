//! Helpers for component tests
//!
//! ```ignore
//! use dashboard_core::testing::*;
//!
//! let actions = banner.handle_event(&EventKind::Key(key("x")), props);
//! actions.assert_first(Action::AlertDismiss);
//!
//! let mut render = RenderHarness::new(80, 24);
//! let screen = render.render_to_string_plain(|frame| chart.render(frame, frame.area(), props));
//! assert!(screen.contains("Temperature Trends"));
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Key press from a name like `"j"`, `"esc"`, `"down"` or `"ctrl+u"`
///
/// Panics on anything it does not understand, which is what a test wants.
pub fn key(combo: &str) -> KeyEvent {
    let (modifiers, name) = match combo.rsplit_once('+') {
        Some((prefix, name)) if !name.is_empty() => (modifiers_from(prefix, combo), name),
        _ => (KeyModifiers::NONE, combo),
    };

    let code = match name {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => panic!("unknown key {combo:?}"),
            }
        }
    };
    KeyEvent::new(code, modifiers)
}

fn modifiers_from(prefix: &str, combo: &str) -> KeyModifiers {
    prefix
        .split('+')
        .fold(KeyModifiers::NONE, |acc, part| match part {
            "ctrl" => acc | KeyModifiers::CONTROL,
            "alt" => acc | KeyModifiers::ALT,
            "shift" => acc | KeyModifiers::SHIFT,
            _ => panic!("unknown modifier {part:?} in {combo:?}"),
        })
}

/// In-memory terminal for render tests
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        Self { terminal }
    }

    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        if let Err(e) = self.terminal.draw(draw) {
            panic!("test draw failed: {e}");
        }
        self.terminal.backend().buffer()
    }

    /// Screen text, one line per row, trailing blanks trimmed
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        buffer_text(self.render(draw))
    }
}

pub(crate) fn buffer_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    let rows: Vec<String> = buffer
        .content
        .chunks(width)
        .map(|row| {
            let text: String = row.iter().map(|cell| cell.symbol()).collect();
            text.trim_end().to_owned()
        })
        .collect();
    rows.join("\n")
}

/// Checks on the actions a component emitted
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
    fn assert_contains(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got {self:?}");
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(self.len(), expected, "actions: {self:?}");
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(self.first(), Some(&expected), "actions: {self:?}");
    }

    fn assert_contains(&self, expected: A) {
        assert!(self.contains(&expected), "{expected:?} not in {self:?}");
    }
}
