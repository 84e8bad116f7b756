/// Search helpers for the card list: match highlighting and the search box
use crate::shared::icons::icon;
use crate::shared::keyboard::SEARCH_INPUT_ID;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Splits `text` into `(segment, is_match)` parts for a case-insensitive
/// substring filter.
///
/// Texts whose lower-cased form changes byte length are returned whole, so
/// match offsets always fall on the original text's char boundaries.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((text[last_pos..actual_pos].to_string(), false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((text[actual_pos..match_end].to_string(), true));
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Highlights matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! {
                    <mark style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                        {segment}
                    </mark>
                }
                .into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Debounce delay; 0 reports every keystroke immediately
    #[prop(optional)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search codes, text, strands, grades (press /)".to_string()
    } else {
        placeholder
    };

    // Local input state (ahead of the debounced value)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Replacing the pending timeout drops it, which cancels it
    let debounce = StoredValue::new_local(None::<Timeout>);

    // Follow changes made elsewhere (clear filters, Escape)
    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        if debounce_ms == 0 {
            on_change.run(new_value);
            return;
        }
        let timeout = Timeout::new(debounce_ms, move || on_change.run(new_value));
        debounce.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <span class="search-input__icon" style="position: absolute; left: 8px; color: #888; display: inline-flex;">
                {icon("search")}
            </span>
            <input
                id=SEARCH_INPUT_ID
                type="search"
                placeholder=placeholder
                style=move || format!(
                    "width: 320px; padding: 6px 32px 6px 30px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    // Escape clears through the global shortcut; drop pending input
                    if ev.key() == "Escape" {
                        debounce.set_value(None);
                    }
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear search"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
