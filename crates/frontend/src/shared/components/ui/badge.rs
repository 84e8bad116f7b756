use contracts::enums::StrandTheme;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge colored with a strand theme
#[component]
pub fn StrandBadge(
    /// Strand name shown in the badge
    #[prop(into)]
    strand: String,
    theme: StrandTheme,
) -> impl IntoView {
    let style = format!(
        "background: {}; color: {}; border: 1px solid {};",
        theme.background, theme.text, theme.border
    );

    view! {
        <span class="badge badge--strand" style=style>
            {strand}
        </span>
    }
}
