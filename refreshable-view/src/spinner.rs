//! Circular activity indicators

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Milliseconds between spinner animation frames
const FRAME_MS: u32 = 16;
/// One full revolution per second, advanced linearly
const STEP_DEGREES: f64 = 360.0 * FRAME_MS as f64 / 1000.0;

#[derive(Properties, PartialEq)]
pub struct CircleArcProps {
    pub line_width: f64,
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub color: AttrValue,
}

/// Partial circular stroke covering three quarters of the circle,
/// with round caps. Fills whatever box its parent gives it.
#[function_component(CircleArc)]
pub fn circle_arc(props: &CircleArcProps) -> Html {
    let radius = 24.0 - props.line_width / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let dash = circumference * 0.75;
    let gap = circumference * 0.25;

    html! {
        <svg width="100%" height="100%" viewBox="0 0 48 48">
            <circle
                cx="24"
                cy="24"
                r={radius.to_string()}
                fill="none"
                stroke={props.color.clone()}
                stroke-width={props.line_width.to_string()}
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-dasharray={format!("{} {}", dash, gap)}
            />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct CircleSpinnerProps {
    pub line_width: f64,
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub color: AttrValue,
    #[prop_or(false)]
    pub animating: bool,
}

/// Continuously rotating arc, the default loading indicator.
///
/// The rotation runs on a linear, non-reversing interval that starts when
/// the component mounts and stops when the interval is dropped on unmount.
#[function_component(CircleSpinner)]
pub fn circle_spinner(props: &CircleSpinnerProps) -> Html {
    let rotation = use_state(|| 0.0_f64);
    let animating = use_state(|| props.animating);

    // Start spinning once mounted
    {
        let animating = animating.clone();
        use_effect_with((), move |_| {
            animating.set(true);
            || ()
        });
    }

    {
        let rotation = rotation.clone();
        use_effect_with(*animating, move |running| {
            let interval = running.then(|| {
                let mut angle = 0.0_f64;
                Interval::new(FRAME_MS, move || {
                    angle = (angle + STEP_DEGREES) % 360.0;
                    rotation.set(angle);
                })
            });

            move || drop(interval)
        });
    }

    html! {
        <div
            class="circle-spinner"
            style={format!("width: 100%; height: 100%; transform: rotate({}deg);", *rotation)}
        >
            <CircleArc line_width={props.line_width} color={props.color.clone()} />
        </div>
    }
}
