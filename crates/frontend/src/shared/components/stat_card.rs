use crate::shared::icons::icon;
use leptos::prelude::*;

fn change_class(positive: Option<bool>) -> &'static str {
    match positive {
        Some(true) => "stat-card__change stat-card__change--up",
        Some(false) => "stat-card__change stat-card__change--down",
        None => "stat-card__change stat-card__change--flat",
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Change text such as "+12%"; colour follows `positive`
    #[prop(optional, into)]
    change: Option<String>,
    /// `None` renders the change in a neutral colour
    #[prop(optional_no_strip)]
    positive: Option<bool>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let change_view = change.map(|text| {
        let arrow = match positive {
            Some(true) => "\u{2191} ",
            Some(false) => "\u{2193} ",
            None => "",
        };
        view! { <span class=change_class(positive)>{format!("{}{}", arrow, text)}</span> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_class() {
        assert!(change_class(Some(true)).ends_with("--up"));
        assert!(change_class(Some(false)).ends_with("--down"));
        assert!(change_class(None).ends_with("--flat"));
    }
}
