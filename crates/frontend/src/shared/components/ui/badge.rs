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
    let variant_class = move || badge_class(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::BackendStatus;

    #[test]
    fn test_backend_status_variants_have_classes() {
        assert_eq!(badge_class(Some(BackendStatus::Online.badge_variant())), "badge--success");
        assert_eq!(badge_class(Some(BackendStatus::Offline.badge_variant())), "badge--error");
        assert_eq!(badge_class(Some(BackendStatus::Unknown.badge_variant())), "badge--neutral");
        assert_eq!(badge_class(None), "badge--neutral");
    }
}
