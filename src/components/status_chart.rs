//! Status Chart Component
//!
//! Summary of the full (unfiltered) collection: an SVG donut of completed
//! vs total plus count tiles.

use leptos::prelude::*;

use crate::store::{use_dash_store, DashStateStoreFields};

const DONUT_RADIUS: f64 = 45.0;

/// Completed share of the collection; empty collections count as 0
pub fn completion_ratio(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    }
}

/// stroke-dasharray that fills `ratio` of the donut circumference
fn donut_dash(ratio: f64) -> String {
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let filled = circumference * ratio.clamp(0.0, 1.0);
    format!("{:.1} {:.1}", filled, circumference - filled)
}

#[component]
pub fn StatusChart() -> impl IntoView {
    let store = use_dash_store();

    // (pending, completed) over the whole collection, not the filtered view
    let counts = Memo::new(move |_| {
        let tasks = store.tasks().get();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        (tasks.len() - completed, completed)
    });

    view! {
        <div class="status-chart">
            <svg viewBox="0 0 120 120" class="donut">
                <circle cx="60" cy="60" r="45" class="donut-track"/>
                <circle
                    cx="60"
                    cy="60"
                    r="45"
                    class="donut-fill"
                    transform="rotate(-90 60 60)"
                    stroke-dasharray=move || {
                        let (pending, completed) = counts.get();
                        donut_dash(completion_ratio(completed, pending + completed))
                    }
                />
                <text x="60" y="66" text-anchor="middle" class="donut-label">
                    {move || {
                        let (pending, completed) = counts.get();
                        format!("{}/{}", completed, pending + completed)
                    }}
                </text>
            </svg>
            <div class="count-tiles">
                <div class="count-tile pending">
                    <span class="count">{move || counts.get().0}</span>
                    <span class="label">"Pending"</span>
                </div>
                <div class="count-tile completed">
                    <span class="count">{move || counts.get().1}</span>
                    <span class="label">"Completed"</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_ratio() {
        assert_eq!(completion_ratio(0, 0), 0.0);
        assert_eq!(completion_ratio(1, 2), 0.5);
        assert_eq!(completion_ratio(3, 3), 1.0);
    }

    #[test]
    fn test_donut_dash_bounds() {
        let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
        assert_eq!(donut_dash(0.0), format!("0.0 {:.1}", circumference));
        assert_eq!(donut_dash(1.0), format!("{:.1} 0.0", circumference));
        // Out-of-range ratios are clamped
        assert_eq!(donut_dash(2.0), donut_dash(1.0));
    }
}
