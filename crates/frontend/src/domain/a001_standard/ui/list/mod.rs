use super::card::StandardCard;
use super::progression::ProgressionPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::keyboard::install_search_shortcuts;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_standard::CardKey;
use contracts::projections::p001_standards_view::{
    grade_options, group_by_strand, project, strand_options, StrandGroup,
};
use leptos::prelude::*;
use thaw::*;

/// Stagger step between card animations inside a group.
const CARD_DELAY_STEP_MS: u32 = 30;

/// Searchable, filterable list of standards grouped by strand.
#[component]
pub fn StandardsGuide() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let debounce_ms = ctx.config.with_value(|c| c.ui.search_debounce_ms);

    install_search_shortcuts(Callback::new(move |_| ctx.set_query(String::new())));

    let projection = Memo::new(move |_| {
        let state = ctx.view.get();
        ctx.catalog.with(|c| project(&c.records, &state))
    });
    let groups = Memo::new(move |_| projection.with(|p| group_by_strand(&p.visible)));
    // Rebuilds the panel only when the progression itself changes
    let progression = Memo::new(move |_| projection.with(|p| p.progression.clone()));

    let visible_count = move || projection.with(|p| p.visible.len());
    let total_count = move || ctx.catalog.with(|c| c.records.len());
    let active_filters_count = Signal::derive(move || ctx.view.with(|v| v.active_filters_count()));
    let is_unfiltered = Signal::derive(move || ctx.view.with(|v| v.is_unfiltered()));

    let grade_opts = Signal::derive(move || {
        ctx.catalog
            .with(|c| grade_options(&c.records))
            .into_iter()
            .map(|g| (g.clone(), g))
            .collect::<Vec<_>>()
    });
    let strand_opts = Signal::derive(move || {
        ctx.catalog
            .with(|c| strand_options(&c.records))
            .into_iter()
            .map(|s| (s.clone(), s))
            .collect::<Vec<_>>()
    });

    let query_value = Signal::derive(move || ctx.view.with(|v| v.query.clone()));
    let grade_value = Signal::derive(move || ctx.view.with(|v| v.grade_value()));
    let strand_value = Signal::derive(move || ctx.view.with(|v| v.strand_value()));

    let expand_visible = move |_| {
        let keys: Vec<CardKey> =
            projection.with_untracked(|p| p.visible.iter().map(|r| r.card_key()).collect());
        ctx.expand_all(keys);
    };

    view! {
        <div id="a001_standard--list" class="page" data-page-category="list">
            <Show when=move || !ctx.catalog.with(|c| c.loaded_from_source)>
                <div class="alert alert--info">
                    {icon("info")}
                    <span>"Showing the bundled sample. The standards data file could not be loaded."</span>
                </div>
            </Show>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        <span class="filter-panel__title">"Filters"</span>
                        {move || {
                            let count = active_filters_count.get();
                            if count > 0 {
                                view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>

                    <div class="filter-panel-header__center">
                        <span class="filter-panel__summary">
                            {move || format!("{} of {} standards", visible_count(), total_count())}
                        </span>
                    </div>

                    <div class="filter-panel-header__right">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.clear_filters()
                            disabled=is_unfiltered
                        >
                            "Clear filters"
                        </Button>
                    </div>
                </div>

                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Search:"</Label>
                            <SearchInput
                                value=query_value
                                on_change=Callback::new(move |q: String| ctx.set_query(q))
                                debounce_ms=debounce_ms
                            />
                        </Flex>
                        <Select
                            label="Grade".to_string()
                            id="filter-grade".to_string()
                            value=grade_value
                            options=grade_opts
                            all_label="All grades"
                            on_change=Callback::new(move |v: String| ctx.set_grade(v))
                        />
                        <Select
                            label="Strand".to_string()
                            id="filter-strand".to_string()
                            value=strand_value
                            options=strand_opts
                            all_label="All strands"
                            on_change=Callback::new(move |v: String| ctx.set_strand(v))
                        />
                        <Button appearance=ButtonAppearance::Secondary on_click=expand_visible>
                            "Expand all"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.collapse_all()
                            disabled=Signal::derive(move || ctx.expanded_count() == 0)
                        >
                            "Collapse all"
                        </Button>
                    </Flex>
                </div>
            </div>

            {move || {
                progression
                    .get()
                    .map(|progression| view! { <ProgressionPanel progression=progression /> })
            }}

            <Show
                when=move || projection.with(|p| !p.visible.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <p class="empty-state__title">"No standards match these filters."</p>
                        <p class="empty-state__hint">"Try a shorter search or choose all grades and strands."</p>
                    </div>
                }
            >
                <For
                    each=move || groups.get()
                    key=|group| group_key(group)
                    children=move |group| view! { <StrandSection group=group /> }
                />
            </Show>
        </div>
    }
}

/// Identity of a rendered group: its strand plus the cards it holds.
fn group_key(group: &StrandGroup) -> (String, Vec<CardKey>) {
    (
        group.strand.clone(),
        group.records.iter().map(|r| r.card_key()).collect(),
    )
}

#[component]
fn StrandSection(group: StrandGroup) -> impl IntoView {
    let theme = group.theme();
    let header_style = format!(
        "background: {}; color: {}; border-bottom: 2px solid {};",
        theme.background, theme.text, theme.accent
    );
    let count = group.records.len();

    view! {
        <section class="strand-group">
            <h2 class="strand-group__header" style=header_style>
                <span>{group.strand.clone()}</span>
                <span class="strand-group__count">{count}</span>
            </h2>
            <div class="strand-group__cards">
                {group
                    .records
                    .into_iter()
                    .enumerate()
                    .map(|(i, record)| {
                        let delay_ms = i as u32 * CARD_DELAY_STEP_MS;
                        view! { <StandardCard record=record delay_ms=delay_ms /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
