use crate::store::{Action, Store};
use leptos::*;
use leptos_router::A;

/// Header plus the nested page. The header's rendered height is written to
/// the store so pages can size themselves to the remaining viewport.
#[component]
pub fn AppShell(outlet: Option<View>) -> impl IntoView {
    let store = expect_context::<Store>();
    let header = create_node_ref::<html::Header>();

    create_effect(move |_| {
        if let Some(el) = header.get() {
            store.dispatch(Action::SetHeaderHeight(f64::from(el.offset_height())));
        }
    });

    view! {
      <div class="app">
        <header node_ref=header class="ui top attached inverted menu">
          <A href="/" class="header item">"purple"</A>
        </header>
        <main>{outlet}</main>
      </div>
    }
}
