use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StrandBadge;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_standard::StandardRecord;
use contracts::enums::theme_for;
use leptos::prelude::*;

const PLACEHOLDER: &str = "Not provided.";

/// One standard: header, description and an expandable detail panel.
#[component]
pub fn StandardCard(
    record: StandardRecord,
    /// Stagger delay for the appear animation
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let theme = theme_for(&record.strand);
    let key = record.card_key();
    let key_for_toggle = key.clone();
    let is_expanded = Memo::new(move |_| ctx.is_expanded(&key));

    let code_for_focus = record.code.clone();
    let code_for_check = record.code.clone();
    let is_focus = Memo::new(move |_| {
        ctx.view.with(|v| {
            v.code
                .as_deref()
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(code_for_check.trim()))
        })
    });

    let query = move || ctx.view.with(|v| v.query.clone());
    let code_text = record.code.clone();
    let description = record
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());
    let record_for_panel = record.clone();

    view! {
        <CardAnimated delay_ms=delay_ms accent=theme.accent>
            <div class=move || {
                if is_focus.get() { "standard-card standard-card--focus" } else { "standard-card" }
            }>
                <div class="standard-card__header">
                    <span class="standard-card__code" style="font-family: monospace; font-weight: 600;">
                        {move || highlight_matches(&code_text, &query())}
                    </span>
                    <span class="standard-card__grade">{record.grade.clone()}</span>
                    <StrandBadge strand=record.strand.clone() theme=theme />
                </div>

                <p class="standard-card__description">
                    {move || highlight_matches(&description, &query())}
                </p>

                <div class="standard-card__actions">
                    <button
                        class="button button--ghost"
                        on:click=move |_| ctx.toggle_card(key_for_toggle.clone())
                    >
                        {move || if is_expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
                        {move || if is_expanded.get() { "Hide details" } else { "Show details" }}
                    </button>
                    <button
                        class="button button--ghost"
                        title="Compare this skill across grades"
                        on:click=move |_| ctx.focus_progression(code_for_focus.clone())
                    >
                        {icon("progression")}
                        "Progression"
                    </button>
                </div>

                <Show when=move || is_expanded.get()>
                    <DetailPanel record=record_for_panel.clone() />
                </Show>
            </div>
        </CardAnimated>
    }
}

#[component]
fn DetailPanel(record: StandardRecord) -> impl IntoView {
    let samples = record.samples().to_vec();

    view! {
        <div class="standard-card__details">
            <DetailSection title="Details" text=record.details.clone() />
            <DetailSection title="Achievement level descriptors" text=record.ald.clone() />
            <DetailSection title="Evidence of mastery" text=record.evidence.clone() />

            <div class="detail-section">
                <h4 class="detail-section__title">"Sample items"</h4>
                {if samples.is_empty() {
                    view! { <p class="detail-section__placeholder">"No sample items yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="detail-section__list">
                            {samples.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn DetailSection(title: &'static str, text: Option<String>) -> impl IntoView {
    let body = match text.filter(|t| !t.trim().is_empty()) {
        Some(t) => view! { <p class="detail-section__text">{t}</p> }.into_any(),
        None => view! { <p class="detail-section__placeholder">{PLACEHOLDER}</p> }.into_any(),
    };

    view! {
        <div class="detail-section">
            <h4 class="detail-section__title">{title}</h4>
            {body}
        </div>
    }
}
