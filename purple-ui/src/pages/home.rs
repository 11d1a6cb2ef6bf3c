use crate::components::symbol_sidebar::SymbolSidebar;
use crate::dto::{normalize_height, Alert, AppState, Symbol};
use leptos::*;

pub const FLAGGED_PATH: &str = "/flagged";

/// The slice of the store the home page renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeProps {
    pub alerts: Vec<Alert>,
    pub symbols: Vec<Symbol>,
    pub header_height: f64,
}

impl From<&AppState> for HomeProps {
    fn from(state: &AppState) -> Self {
        Self {
            alerts: state.db.alerts.clone(),
            symbols: state.db.symbols.clone(),
            header_height: state.ui.header_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeStatus {
    Clear,
    Flagged { action: NavAction },
}

impl HomeStatus {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        if alerts.is_empty() {
            HomeStatus::Clear
        } else {
            HomeStatus::Flagged {
                action: NavAction {
                    label: "Get to zero now",
                    target: FLAGGED_PATH,
                },
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeLayout {
    pub height: String,
    pub status: HomeStatus,
    pub sidebar_symbols: Vec<Symbol>,
}

/// CSS height of the area below the app header.
pub fn available_height(header_height: f64) -> String {
    format!("calc(100vh - {}px)", normalize_height(header_height))
}

pub fn layout(props: &HomeProps) -> HomeLayout {
    HomeLayout {
        height: available_height(props.header_height),
        status: HomeStatus::from_alerts(&props.alerts),
        sidebar_symbols: props.symbols.clone(),
    }
}

// Plain anchors are picked up by the router's click handler, so this stays
// renderable outside a `<Router>`.
fn status_view(status: HomeStatus) -> View {
    match status {
        HomeStatus::Clear => view! {
          <div class="status clear">
            <i class="massive green check circle icon pulsate"></i>
            <h2 class="ui green header">"No issues"</h2>
          </div>
        }
        .into_view(),
        HomeStatus::Flagged { action } => view! {
          <div class="status flagged">
            <i class="massive red remove circle icon pulsate"></i>
            <h2 class="ui red header">"There are issues to review"</h2>
            <a href=action.target class="ui secondary button">{action.label}</a>
          </div>
        }
        .into_view(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let home = create_memo(move |_| state.with(|s| layout(&HomeProps::from(s))));
    let status = create_memo(move |_| home.with(|h| h.status));
    let symbols = Signal::derive(move || home.with(|h| h.sidebar_symbols.clone()));

    view! {
      <div>
        <div class="pushable" style=move || home.with(|h| format!("height: {}", h.height))>
          <SymbolSidebar symbols=symbols/>
          <div class="pusher">
            <div class="ui padded stackable grid">
              <div class="sixteen wide column">
                <div class="ui fluid center aligned container">
                  {move || status_view(status.get())}
                </div>
              </div>
            </div>
          </div>
        </div>
      </div>
    }
}
