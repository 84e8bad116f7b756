use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StrandBadge;
use crate::shared::icons::icon;
use contracts::enums::theme_for;
use contracts::projections::p001_standards_view::{Progression, ProgressionBasis};
use leptos::prelude::*;

/// Cross-grade comparison for the focused code, lowest grade first.
#[component]
pub fn ProgressionPanel(progression: Progression) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let basis_label = match &progression.basis {
        ProgressionBasis::Structural(key) => format!("Matched by skill {}", key),
        ProgressionBasis::Heuristic { .. } => {
            "Code not recognized; matched by identical description and strand".to_string()
        }
    };
    let is_heuristic = matches!(progression.basis, ProgressionBasis::Heuristic { .. });
    let basis_class = if is_heuristic {
        "progression-panel__basis progression-panel__basis--loose"
    } else {
        "progression-panel__basis"
    };
    let focus = progression.focus.clone();

    view! {
        <section class="progression-panel">
            <div class="progression-panel__header">
                <div class="progression-panel__title">
                    {icon("progression")}
                    <h2>{format!("Progression for {}", focus)}</h2>
                </div>
                <button
                    class="top-header__icon-btn"
                    title="Close progression"
                    on:click=move |_| ctx.clear_progression()
                >
                    {icon("x")}
                </button>
            </div>

            <p class=basis_class>
                {basis_label}
            </p>

            {if progression.records.is_empty() {
                view! {
                    <p class="progression-panel__empty">
                        "No standards in the catalog share this skill."
                    </p>
                }.into_any()
            } else {
                view! {
                    <ol class="progression-panel__list">
                        {progression.records.into_iter().map(|record| {
                            let is_focus = record.code.trim().eq_ignore_ascii_case(&focus);
                            let theme = theme_for(&record.strand);
                            let step_class = if is_focus {
                                "progression-step progression-step--focus"
                            } else {
                                "progression-step"
                            };
                            view! {
                                <li class=step_class>
                                    <span class="progression-step__grade">{record.grade.clone()}</span>
                                    <span class="progression-step__code" style="font-family: monospace;">
                                        {record.code.clone()}
                                    </span>
                                    <StrandBadge strand=record.strand.clone() theme=theme />
                                    <span class="progression-step__description">
                                        {record.description.clone().unwrap_or_else(|| "No description provided.".to_string())}
                                    </span>
                                </li>
                            }
                        }).collect_view()}
                    </ol>
                }.into_any()
            }}
        </section>
    }
}
