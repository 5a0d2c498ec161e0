//! Pull-to-refresh scroll container

use web_sys::{Element, TouchEvent};
use yew::prelude::*;

use crate::logic::RefreshCore;
use crate::markers::{FrameCollector, MarkerKind};
use crate::symbol::{IndicatorPhase, PullViewArgs, RefreshSymbol};

/// How the scroll area lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollKind {
    /// Children rendered as-is inside the scroll area
    #[default]
    Plain,
    /// Children rendered as separated list rows
    List,
}

#[derive(Properties, PartialEq)]
pub struct RefreshableScrollProps {
    /// Stroke width of the built-in indicators
    pub line_width: f64,
    /// Stroke color of the built-in indicators
    pub color: AttrValue,
    /// Pull distance that arms the refresh, also the indicator band height
    #[prop_or(80.0)]
    pub threshold: f64,
    /// Host-owned refresh flag. The container only ever sets it to true;
    /// the host clears it once its reload completes.
    pub refreshing: UseStateHandle<bool>,
    #[prop_or_default]
    pub scroll_kind: ScrollKind,
    /// Loading indicator shown while refreshing
    #[prop_or_default]
    pub activity_view: Option<Html>,
    /// Custom pull indicator
    #[prop_or_default]
    pub pull_view: Option<Callback<PullViewArgs, Html>>,
    /// Runs at most once per threshold crossing
    #[prop_or_default]
    pub action: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RefreshableScroll)]
pub fn refreshable_scroll(props: &RefreshableScrollProps) -> Html {
    let pull_distance = use_state(|| 0.0_f64);
    let is_pulling = use_state(|| false);
    let start_y = use_state(|| 0.0_f64);
    let rotation = use_state(|| 0.0_f64);

    let core = use_mut_ref(|| RefreshCore::new(props.threshold));
    let collector = use_mut_ref(FrameCollector::new);

    // Fixed marker: the container itself. Moving marker: a zero-height
    // element riding the translated content.
    let container_ref = use_node_ref();
    let scroll_ref = use_node_ref();
    let moving_ref = use_node_ref();

    let on_touch_start = {
        let start_y = start_y.clone();
        let is_pulling = is_pulling.clone();
        let scroll_ref = scroll_ref.clone();

        Callback::from(move |e: TouchEvent| {
            // Pulling only engages while the scroll area sits at its top
            let at_top = scroll_ref
                .cast::<Element>()
                .map(|area| area.scroll_top() == 0)
                .unwrap_or(false);

            if at_top {
                if let Some(touch) = e.touches().get(0) {
                    start_y.set(touch.client_y() as f64);
                    is_pulling.set(true);
                }
            }
        })
    };

    let on_touch_move = {
        let start_y = start_y.clone();
        let pull_distance = pull_distance.clone();
        let is_pulling = is_pulling.clone();

        Callback::from(move |e: TouchEvent| {
            if *is_pulling {
                if let Some(touch) = e.touches().get(0) {
                    let current_y = touch.client_y() as f64;
                    let distance = (current_y - *start_y).max(0.0).min(150.0);
                    pull_distance.set(distance);
                }
            }
        })
    };

    let on_touch_end = {
        let pull_distance = pull_distance.clone();
        let is_pulling = is_pulling.clone();

        Callback::from(move |_: TouchEvent| {
            is_pulling.set(false);
            pull_distance.set(0.0);
        })
    };

    // Measure both markers after every render pass and run the refresh
    // logic on the batch. Effects run in render order, so the previous
    // offset always belongs to the immediately preceding pass.
    {
        let core = core.clone();
        let collector = collector.clone();
        let container_ref = container_ref.clone();
        let moving_ref = moving_ref.clone();
        let refreshing = props.refreshing.clone();
        let rotation = rotation.clone();
        let action = props.action.clone();

        use_effect(move || {
            if let (Some(moving), Some(fixed)) = (
                moving_ref.cast::<Element>(),
                container_ref.cast::<Element>(),
            ) {
                let mut collector = collector.borrow_mut();
                collector.report(MarkerKind::Moving, moving.get_bounding_client_rect().into());
                collector.report(MarkerKind::Fixed, fixed.get_bounding_client_rect().into());
                let frames = collector.take();

                let mut core = core.borrow_mut();
                core.sync_refreshing(*refreshing);

                if core.evaluate(&frames) {
                    refreshing.set(true);
                    if let Some(ref action) = action {
                        action.emit(());
                    }
                }

                if (core.rotation() - *rotation).abs() > f64::EPSILON {
                    rotation.set(core.rotation());
                }
            }

            || ()
        });
    }

    let threshold = props.threshold;

    // While refreshing the content stays shifted down by the band height,
    // easing back once the host clears the flag
    let shift = if *is_pulling {
        *pull_distance
    } else if *props.refreshing {
        threshold
    } else {
        0.0
    };

    let phase = if *props.refreshing {
        IndicatorPhase::Loading
    } else {
        IndicatorPhase::Pull {
            rotation: *rotation,
        }
    };

    let content = match props.scroll_kind {
        ScrollKind::Plain => html! { <>{ props.children.clone() }</> },
        ScrollKind::List => html! {
            <ul class="refresh-list" style="list-style: none; margin: 0; padding: 0;">
                { for props.children.iter().map(|child| html! {
                    <li
                        class="refresh-list-row"
                        style="border-bottom: 1px solid rgba(0, 0, 0, 0.1);"
                    >
                        {child}
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <div
            ref={container_ref}
            class="refreshable-scroll"
            style="position: relative; height: 100%; overflow: hidden;"
        >
            <div
                ref={scroll_ref}
                class="refresh-scroll-area"
                style="height: 100%; overflow-y: auto;"
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                <div
                    class="refresh-content"
                    style={format!(
                        "position: relative; transform: translateY({}px); transition: transform 0.2s;",
                        shift
                    )}
                >
                    <div ref={moving_ref} class="refresh-moving-marker" style="height: 0;"></div>
                    <div
                        class="refresh-symbol-band"
                        style={format!(
                            "position: absolute; left: 0; right: 0; top: {}px; height: {}px;",
                            -threshold, threshold
                        )}
                    >
                        <RefreshSymbol
                            height={threshold}
                            phase={phase}
                            line_width={props.line_width}
                            color={props.color.clone()}
                            activity_view={props.activity_view.clone()}
                            pull_view={props.pull_view.clone()}
                        />
                    </div>
                    {content}
                </div>
            </div>
        </div>
    }
}
