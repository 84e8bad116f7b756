//! Global keyboard shortcuts for the search field.
//!
//! - `/` focuses the search field when it is not focused
//! - `Escape` clears the search field while it is focused

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};

/// DOM id of the search `<input>`.
pub const SEARCH_INPUT_ID: &str = "standards-search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    FocusSearch,
    ClearSearch,
}

pub fn shortcut_action(key: &str, search_focused: bool) -> Option<ShortcutAction> {
    match (key, search_focused) {
        ("/", false) => Some(ShortcutAction::FocusSearch),
        ("Escape", true) => Some(ShortcutAction::ClearSearch),
        _ => None,
    }
}

fn search_input() -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(SEARCH_INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

fn search_focused() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(|el| el.id() == SEARCH_INPUT_ID)
        .unwrap_or(false)
}

/// Registers the window-level `keydown` listener. `on_clear` runs when
/// `Escape` is pressed inside the search field.
pub fn install_search_shortcuts(on_clear: Callback<()>) {
    let _ = window_event_listener(leptos::ev::keydown, move |ev: KeyboardEvent| {
        match shortcut_action(&ev.key(), search_focused()) {
            Some(ShortcutAction::FocusSearch) => {
                ev.prevent_default();
                if let Some(input) = search_input() {
                    let _ = input.focus();
                }
            }
            Some(ShortcutAction::ClearSearch) => on_clear.run(()),
            None => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_focuses_when_unfocused() {
        assert_eq!(shortcut_action("/", false), Some(ShortcutAction::FocusSearch));
        assert_eq!(shortcut_action("/", true), None);
    }

    #[test]
    fn test_escape_clears_only_when_focused() {
        assert_eq!(shortcut_action("Escape", true), Some(ShortcutAction::ClearSearch));
        assert_eq!(shortcut_action("Escape", false), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(shortcut_action("a", false), None);
        assert_eq!(shortcut_action("Enter", true), None);
    }
}
