//! Indicator rendering for the refresh band

use yew::prelude::*;

use crate::spinner::{CircleArc, CircleSpinner};

/// What the indicator band is showing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorPhase {
    /// Waiting for a pull; carries the indicator rotation in degrees
    Pull { rotation: f64 },
    /// A refresh is running
    Loading,
}

/// Arguments handed to a custom pull view
#[derive(Debug, Clone, PartialEq)]
pub struct PullViewArgs {
    /// Reserved indicator band height, equal to the trigger threshold
    pub height: f64,
    /// Indicator rotation in degrees
    pub rotation: f64,
    /// Whether a refresh is running
    pub loading: bool,
}

/// The built-in pull indicator: the partial arc, rotated with the pull
pub fn default_pull_view(line_width: f64, color: AttrValue, args: &PullViewArgs) -> Html {
    let size = args.height * 0.25;
    let padding = args.height * 0.375;

    html! {
        <div
            class="refresh-pull"
            style={format!("padding: {}px; display: flex; justify-content: center;", padding)}
        >
            <div style={format!(
                "width: {}px; height: {}px; transform: rotate({}deg);",
                size, size, args.rotation
            )}>
                <CircleArc line_width={line_width} color={color} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RefreshSymbolProps {
    /// Indicator band height
    pub height: f64,
    pub phase: IndicatorPhase,
    pub line_width: f64,
    pub color: AttrValue,
    /// Loading indicator shown while refreshing; defaults to [`CircleSpinner`]
    #[prop_or_default]
    pub activity_view: Option<Html>,
    /// Replaces the built-in pull indicator
    #[prop_or_default]
    pub pull_view: Option<Callback<PullViewArgs, Html>>,
}

/// Chooses between the pull indicator and the loading indicator
#[function_component(RefreshSymbol)]
pub fn refresh_symbol(props: &RefreshSymbolProps) -> Html {
    match props.phase {
        IndicatorPhase::Loading => {
            let activity = props.activity_view.clone().unwrap_or_else(|| {
                html! { <CircleSpinner line_width={props.line_width} color={props.color.clone()} /> }
            });
            let size = props.height * 0.25;

            html! {
                <div
                    class="refresh-activity"
                    style={format!(
                        "height: {}px; display: flex; align-items: center; justify-content: center;",
                        props.height
                    )}
                >
                    <div style={format!("width: {}px; height: {}px;", size, size)}>
                        {activity}
                    </div>
                </div>
            }
        }
        IndicatorPhase::Pull { rotation } => {
            let args = PullViewArgs {
                height: props.height,
                rotation,
                loading: false,
            };

            match &props.pull_view {
                Some(view) => view.emit(args),
                None => default_pull_view(props.line_width, props.color.clone(), &args),
            }
        }
    }
}
