use crate::domain::a001_standard::ui::list::StandardsGuide;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::CATALOG_TOML;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config(Some(CATALOG_TOML)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid catalog.toml, using defaults: {}", e);
            AppConfig::default()
        }
    };

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);

    // Seed filters from the URL, then start the one-shot data load.
    ctx.init_router_integration();
    ctx.load_catalog();

    view! {
        <Shell>
            <StandardsGuide />
        </Shell>
    }
}
