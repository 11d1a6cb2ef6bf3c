use crate::components::app_shell::AppShell;
use crate::components::not_found::NotFound;
use crate::dto::AppState;
use crate::pages::home::HomePage;
use crate::routes::{self, Page, RouteMatch};
use crate::store::{self, Store};
use leptos::*;
use leptos_router::{use_location, Router};

fn page_view(page: Page, outlet: Option<View>) -> View {
    match page {
        Page::Shell => view! { <AppShell outlet=outlet/> }.into_view(),
        Page::Home => view! { <HomePage/> }.into_view(),
        Page::NotFound => view! { <NotFound/> }.into_view(),
    }
}

fn matched_view(matched: Option<RouteMatch>) -> View {
    let Some(matched) = matched else {
        return view! { <NotFound/> }.into_view();
    };
    matched
        .pages
        .into_iter()
        .rev()
        .fold(None, |outlet, page| Some(page_view(page, outlet)))
        .unwrap_or_else(|| view! { <NotFound/> }.into_view())
}

#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    move || {
        let path = location.pathname.get();
        let matched = routes::resolve(routes::ROUTES, &path);
        if matched.is_none() {
            log::warn!("no route for {path}");
        }
        matched_view(matched)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = store::global();
    let state = create_rw_signal(store.snapshot());
    let subscription = store.subscribe(move |s: &AppState| state.set(s.clone()));
    {
        let store = store.clone();
        on_cleanup(move || {
            store.unsubscribe(subscription);
        });
    }

    provide_context::<Store>(store);
    provide_context(state);

    view! {
      <Router>
        <RouteOutlet/>
      </Router>
    }
}
