use leptos::prelude::*;

use triexplore_shared::{BUCKET_COUNT, LegendEntry};

use crate::app::RenderedMap;

/// The five legend slots, `#range0` (lowest) through `#range4`.
#[component]
pub fn Legend() -> impl IntoView {
    let RenderedMap(rendered) = expect_context();

    let entries = Memo::new(move |_| {
        rendered.with(|map| match map {
            Some(map) => map.legend(),
            None => (0..BUCKET_COUNT)
                .map(|bucket| LegendEntry {
                    bucket,
                    range: String::new(),
                    caption: String::new(),
                })
                .collect(),
        })
    });

    view! {
        <div id="legend">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div
                                id=format!("range{}", entry.bucket)
                                class=format!("legendRange county{}", entry.bucket)
                            >
                                {entry.range}
                                <br />
                                <span class="info">{entry.caption}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
