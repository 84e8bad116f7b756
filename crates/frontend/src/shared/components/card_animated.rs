//! CardAnimated: Thaw `Card` with an appear animation and a strand accent.
//!
//! The animation is `@keyframes card-appear` from the stylesheet.
//!
//! ```ignore
//! <CardAnimated delay_ms=0 accent="#2563eb">   // first card
//! <CardAnimated delay_ms=40 accent="#2563eb">  // second card
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation and a colored left edge.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds, for a staggered appearance.
    #[prop(optional)]
    delay_ms: u32,
    /// Left border color; no border when empty.
    #[prop(optional, into)]
    accent: String,
    /// Extra inline styles appended after the generated ones.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let mut full_style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if !accent.is_empty() {
        full_style.push_str(&format!(" border-left: 4px solid {};", accent));
    }
    if !style.is_empty() {
        full_style.push(' ');
        full_style.push_str(&style);
    }

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
