use crate::domain::a001_standard::api::fetch_catalog;
use contracts::domain::a001_standard::CardKey;
use contracts::shared::catalog::Catalog;
use contracts::shared::config::AppConfig;
use contracts::shared::expansion::ExpansionMap;
use contracts::shared::view_state::ViewState;
use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

/// Single owner of the dataset and the view state. Every write replaces or
/// updates a signal; components only read.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
    pub catalog: RwSignal<Catalog>,
    pub view: RwSignal<ViewState>,
    pub expansion: RwSignal<ExpansionMap>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: RwSignal::new(Catalog::fallback()),
            view: RwSignal::new(ViewState::default()),
            expansion: RwSignal::new(ExpansionMap::new()),
        }
    }

    /// Seeds the view state from `location.search` and mirrors every later
    /// change back with `history.replaceState`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = ViewState::from_query_string(&search);
        log::debug!("Initial view state from URL: {:?}", initial);
        self.view.set(initial);

        let this = *self;
        Effect::new(move |_| {
            let query_string = this.view.with(|v| v.to_query_string());
            replace_url_query(&query_string);
        });
    }

    /// One attempt per session; failures fall back to the bundled sample.
    pub fn load_catalog(&self) {
        let this = *self;
        let catalog_config = self.config.with_value(|c| c.catalog.clone());
        spawn_local(async move {
            let outcome = fetch_catalog(&catalog_config).await;
            this.catalog.set(Catalog::resolve(outcome));
        });
    }

    pub fn set_query(&self, query: String) {
        self.view.update(|v| v.query = query);
    }

    pub fn set_grade(&self, value: String) {
        self.view.update(|v| v.set_grade(&value));
    }

    pub fn set_strand(&self, value: String) {
        self.view.update(|v| v.set_strand(&value));
    }

    pub fn clear_filters(&self) {
        self.view.update(|v| v.clear_filters());
    }

    pub fn focus_progression(&self, code: String) {
        log::debug!("Progression focus: {}", code);
        self.view.update(|v| v.code = Some(code));
    }

    pub fn clear_progression(&self) {
        self.view.update(|v| v.code = None);
    }

    pub fn is_expanded(&self, key: &CardKey) -> bool {
        self.expansion.with(|m| m.is_expanded(key))
    }

    pub fn toggle_card(&self, key: CardKey) {
        self.expansion.update(|m| {
            m.toggle(key);
        });
    }

    pub fn expand_all(&self, keys: Vec<CardKey>) {
        self.expansion.update(|m| m.expand_all(keys));
    }

    pub fn expanded_count(&self) -> usize {
        self.expansion.with(|m| m.expanded_count())
    }

    pub fn collapse_all(&self) {
        self.expansion.update(|m| m.collapse_all());
    }
}

/// Replaces the current history entry when the query string changed.
/// An empty query string drops the `?` entirely.
fn replace_url_query(query_string: &str) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let current_search = location.search().unwrap_or_default();
    let target_search = if query_string.is_empty() {
        String::new()
    } else {
        format!("?{}", query_string)
    };

    // Only update URL if it actually changed
    if current_search == target_search {
        return;
    }

    let hash = location.hash().unwrap_or_default();
    let new_url = if target_search.is_empty() {
        format!("{}{}", location.pathname().unwrap_or_default(), hash)
    } else {
        format!("{}{}", target_search, hash)
    };

    if let Ok(history) = w.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        {
            log::warn!("replaceState failed: {:?}", e);
        }
    }
}
