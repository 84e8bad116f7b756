//! TopHeader component - application top bar.
//!
//! Contains the application title, the record counter and the page-level
//! actions (print, and the reserved export action).

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::print::print_page;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let title = ctx.config.with_value(|c| c.ui.title.clone());
    let total = move || ctx.catalog.with(|c| c.records.len());
    let source_label = move || {
        if ctx.catalog.with(|c| c.loaded_from_source) {
            "data file"
        } else {
            "sample data"
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
                <Badge variant="primary".to_string()>
                    {move || format!("{} standards", total())}
                </Badge>
                <span class="top-header__subtitle">{source_label}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Print"
                    on:click=move |_| print_page()
                >
                    {icon("printer")}
                    <span>"Print"</span>
                </button>

                // Reserved for CSV/PDF export
                <button
                    class="top-header__icon-btn"
                    title="Export is not available yet"
                    disabled=true
                >
                    {icon("download")}
                    <span>"Export"</span>
                </button>
            </div>
        </div>
    }
}
