use contracts::shared::mock::{bar_percent, SeriesPoint};
use leptos::prelude::*;

/// Horizontal bar chart over a short labelled series.
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    points: Vec<SeriesPoint>,
    /// Suffix appended to every value label, e.g. "%"
    #[prop(optional, into)]
    unit: String,
) -> impl IntoView {
    let rows = points
        .iter()
        .map(|point| {
            let width = format!("{}%", bar_percent(&points, point.value));
            let value = format!("{}{}", point.value, unit);
            view! {
                <div class="bar-chart__row">
                    <span class="bar-chart__label">{point.label.clone()}</span>
                    <div class="bar-chart__track">
                        <div class="bar-chart__bar" style:width=width></div>
                    </div>
                    <span class="bar-chart__value">{value}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card bar-chart">
            <h3 class="card__title">{title}</h3>
            {rows}
        </div>
    }
}
