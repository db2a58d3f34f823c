use leptos::prelude::*;

use crate::app::HoveredCounty;

/// County under the pointer and where the pointer is.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyHover {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Tooltip that follows the mouse cursor while it is over a county.
#[component]
pub fn CountyTooltip() -> impl IntoView {
    let HoveredCounty(hovered) = expect_context();

    view! {
        {move || {
            let Some(hover) = hovered.get() else {
                return view! { <div style="display:none;" /> }.into_any();
            };
            view! {
                <div
                    class="countyTooltip"
                    style:left=format!("{}px", hover.x + 14.0)
                    style:top=format!("{}px", hover.y - 8.0)
                    style="position: fixed; pointer-events: none; z-index: 100;"
                >
                    {hover.text}
                </div>
            }
            .into_any()
        }}
    }
}
