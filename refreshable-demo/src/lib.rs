//! Refreshable scroll demo
//!
//! Single-page Yew app showing the pull-to-refresh container over a list
//! of items, with a simulated fetch that clears the refresh flag after
//! two seconds.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use refreshable_view::{CircleSpinner, RefreshableScroll, ScrollKind};

#[function_component(App)]
pub fn app() -> Html {
    let refreshing = use_state(|| false);
    let fetch_count = use_state(|| 1_u32);

    let action = {
        let refreshing = refreshing.clone();
        let fetch_count = fetch_count.clone();

        Callback::from(move |_| {
            web_sys::console::log_1(&"Refresh triggered".into());

            let refreshing = refreshing.clone();
            let fetch_count = fetch_count.clone();

            spawn_local(async move {
                // Simulated fetch; the flag must be cleared to end the cycle
                TimeoutFuture::new(2_000).await;
                fetch_count.set(*fetch_count + 1);
                refreshing.set(false);
            });
        })
    };

    html! {
        <div class="demo-app" style="height: 100vh;">
            <RefreshableScroll
                line_width={2.0}
                color="#1a1a1a"
                refreshing={refreshing.clone()}
                scroll_kind={ScrollKind::Plain}
                activity_view={Some(html! {
                    <CircleSpinner line_width={2.0} color="#1a1a1a" />
                })}
                action={action}
            >
                { for (0..20).map(|index| html! {
                    <div class="demo-row" style="padding: 12px 16px;">
                        { format!("Item {} (fetch {})", index, *fetch_count) }
                    </div>
                }) }
            </RefreshableScroll>
        </div>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    yew::Renderer::<App>::new().render();
}
