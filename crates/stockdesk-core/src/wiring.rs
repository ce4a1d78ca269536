//! Host event to page action mapping.
//!
//! The host (a browser shell, a TUI, a test) owns the event source and the
//! elements. It feeds [`PageEvent`]s in and applies the returned
//! [`PageAction`]s; nothing here touches host state directly.

use crate::{
    format_fixed, parse_number, validate_stock_form_with, StockEntry, StockEntryInput, Symbol,
    ValidationMessages,
};

/// Something the host observed on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The add-position form was submitted.
    FormSubmit(StockEntryInput),
    /// A symbol field's text changed.
    SymbolInput(String),
    /// A numeric field lost focus.
    NumberBlur(String),
    KeyDown { key: String, ctrl: bool, meta: bool },
    /// An in-page anchor was clicked.
    AnchorClick(String),
    /// The portfolio auto-refresh timer fired.
    RefreshTick,
}

/// What the host should do in response.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    AcceptEntry(StockEntry),
    /// Cancel the submission and show every message together.
    BlockSubmit { errors: Vec<String> },
    SetSymbolValue(String),
    SetNumberValue(String),
    FocusSearch,
    CloseModals,
    /// Smooth-scroll to the element with this id.
    ScrollTo(String),
    RefreshPortfolio,
}

/// Stateless event handler set for the portfolio pages.
#[derive(Debug, Clone, Default)]
pub struct PageWiring {
    messages: ValidationMessages,
}

impl PageWiring {
    pub fn new(messages: ValidationMessages) -> Self {
        Self { messages }
    }

    /// Runs every event through [`PageWiring::handle`] in order.
    pub fn dispatch(&self, events: impl IntoIterator<Item = PageEvent>) -> Vec<PageAction> {
        events
            .into_iter()
            .flat_map(|event| self.handle(event))
            .collect()
    }

    pub fn handle(&self, event: PageEvent) -> Vec<PageAction> {
        match event {
            PageEvent::FormSubmit(input) => vec![self.submit(input)],
            PageEvent::SymbolInput(text) => {
                vec![PageAction::SetSymbolValue(text.to_uppercase())]
            }
            PageEvent::NumberBlur(text) => parse_number(&text)
                .map(|value| PageAction::SetNumberValue(format_fixed(value, 2)))
                .into_iter()
                .collect(),
            PageEvent::KeyDown { key, ctrl, meta } => {
                let mut actions = Vec::new();
                if (ctrl || meta) && key == "k" {
                    actions.push(PageAction::FocusSearch);
                }
                if key == "Escape" {
                    actions.push(PageAction::CloseModals);
                }
                actions
            }
            PageEvent::AnchorClick(href) => href
                .strip_prefix('#')
                .filter(|fragment| !fragment.is_empty())
                .map(|fragment| PageAction::ScrollTo(fragment.to_owned()))
                .into_iter()
                .collect(),
            PageEvent::RefreshTick => vec![PageAction::RefreshPortfolio],
        }
    }

    fn submit(&self, input: StockEntryInput) -> PageAction {
        let result = validate_stock_form_with(&input, &self.messages);
        if !result.is_valid {
            return PageAction::BlockSubmit {
                errors: result.errors,
            };
        }

        match Symbol::parse(&input.symbol) {
            Ok(symbol) => PageAction::AcceptEntry(StockEntry {
                symbol,
                quantity: input.quantity,
                avg_price: input.avg_price,
            }),
            Err(error) => PageAction::BlockSubmit {
                errors: vec![self.messages.render(&error)],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, ctrl: bool, meta: bool) -> PageEvent {
        PageEvent::KeyDown {
            key: String::from(key),
            ctrl,
            meta,
        }
    }

    #[test]
    fn invalid_submit_blocks_with_all_messages() {
        let wiring = PageWiring::default();
        let actions = wiring.handle(PageEvent::FormSubmit(StockEntryInput::new("", 0.0, 0.0)));

        match actions.as_slice() {
            [PageAction::BlockSubmit { errors }] => assert_eq!(errors.len(), 3),
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn valid_submit_accepts_normalized_entry() {
        let wiring = PageWiring::default();
        let input = StockEntryInput::new("amzn", 2.0, 180.0);
        let actions = wiring.handle(PageEvent::FormSubmit(input));

        match actions.as_slice() {
            [PageAction::AcceptEntry(entry)] => assert_eq!(entry.symbol.as_str(), "AMZN"),
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn symbol_input_is_uppercased() {
        let actions = PageWiring::default().handle(PageEvent::SymbolInput(String::from("msft")));
        assert_eq!(actions, vec![PageAction::SetSymbolValue(String::from("MSFT"))]);
    }

    #[test]
    fn number_blur_normalizes_only_numeric_text() {
        let wiring = PageWiring::default();
        assert_eq!(
            wiring.handle(PageEvent::NumberBlur(String::from("12.5"))),
            vec![PageAction::SetNumberValue(String::from("12.50"))]
        );
        assert!(wiring.handle(PageEvent::NumberBlur(String::new())).is_empty());
        assert!(wiring.handle(PageEvent::NumberBlur(String::from("12abc"))).is_empty());
    }

    #[test]
    fn keyboard_shortcuts_map_to_focus_and_close() {
        let wiring = PageWiring::default();
        let focus = vec![PageAction::FocusSearch];
        assert_eq!(wiring.handle(key("k", true, false)), focus);
        assert_eq!(wiring.handle(key("k", false, true)), focus);
        assert!(wiring.handle(key("k", false, false)).is_empty());
        assert_eq!(
            wiring.handle(key("Escape", false, false)),
            vec![PageAction::CloseModals]
        );
    }

    #[test]
    fn anchor_clicks_scroll_to_fragment() {
        let wiring = PageWiring::default();
        assert_eq!(
            wiring.handle(PageEvent::AnchorClick(String::from("#holdings"))),
            vec![PageAction::ScrollTo(String::from("holdings"))]
        );
        assert!(wiring.handle(PageEvent::AnchorClick(String::from("#"))).is_empty());
    }

    #[test]
    fn dispatch_preserves_event_order() {
        let actions = PageWiring::default().dispatch([
            PageEvent::RefreshTick,
            key("Escape", false, false),
            PageEvent::RefreshTick,
        ]);

        assert_eq!(
            actions,
            vec![
                PageAction::RefreshPortfolio,
                PageAction::CloseModals,
                PageAction::RefreshPortfolio,
            ]
        );
    }
}
