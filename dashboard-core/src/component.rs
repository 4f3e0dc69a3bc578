use ratatui::{layout::Rect, Frame};

use crate::input::EventKind;

/// A piece of UI driven entirely by its props
///
/// `handle_event` translates input into actions and leaves state alone; the
/// reducer applies them. Whether a component has focus is part of its props.
pub trait Component<A> {
    type Props<'a>;

    /// Actions for `event`; render-only components keep the empty default
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<A> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use crossterm::event::KeyCode;
    use ratatui::widgets::Paragraph;

    struct Label;

    impl Component<u8> for Label {
        type Props<'a> = &'a str;

        fn render(&mut self, frame: &mut Frame, area: Rect, text: &str) {
            frame.render_widget(Paragraph::new(text), area);
        }
    }

    /// Counts `+` presses, emitting the running total
    struct Counter(u8);

    impl Component<u8> for Counter {
        type Props<'a> = ();

        fn handle_event(&mut self, event: &EventKind, _: ()) -> Vec<u8> {
            match event {
                EventKind::Key(key) if key.code == KeyCode::Char('+') => {
                    self.0 += 1;
                    vec![self.0]
                }
                _ => vec![],
            }
        }

        fn render(&mut self, frame: &mut Frame, area: Rect, _: ()) {
            frame.render_widget(Paragraph::new(self.0.to_string()), area);
        }
    }

    #[test]
    fn test_render_only_component_emits_nothing() {
        let mut label = Label;
        label
            .handle_event(&EventKind::Key(key("x")), "Oslo")
            .assert_empty();

        let mut render = RenderHarness::new(8, 1);
        let screen =
            render.render_to_string_plain(|frame| label.render(frame, frame.area(), "Oslo"));
        assert_eq!(screen, "Oslo");
    }

    #[test]
    fn test_overridden_handler_returns_actions() {
        let mut counter = Counter(0);
        counter.handle_event(&EventKind::Key(key("+")), ()).assert_first(1);
        counter.handle_event(&EventKind::Key(key("+")), ()).assert_first(2);
        counter.handle_event(&EventKind::Resize(80, 24), ()).assert_empty();
    }
}
