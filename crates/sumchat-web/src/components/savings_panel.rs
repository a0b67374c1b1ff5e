//! Summarization savings panel.

use dioxus::prelude::*;

use crate::state::{ids, WidgetState};

/// Savings panel component.
///
/// Empty until the first statistics arrive.
#[component]
pub fn SavingsPanel() -> Element {
    let state = use_context::<WidgetState>();
    let savings = *state.savings.read();
    let width = savings.map(|v| v.bar_width()).unwrap_or(0);

    rsx! {
        div { class: "savings-panel",
            div { class: "savings-title", "Memory savings" }
            div { id: ids::SAVINGS_STATS, class: "savings-stats",
                if let Some(view) = savings {
                    for line in view.lines() {
                        div { class: "savings-line", "{line}" }
                    }
                }
            }
            div { class: "savings-bar",
                div {
                    id: ids::SAVINGS_BAR_FILL,
                    class: "savings-bar-fill",
                    style: "width: {width}%",
                }
            }
        }
    }
}
