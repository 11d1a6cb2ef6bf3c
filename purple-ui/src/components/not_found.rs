use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    view! {
      <div class="ui center aligned container not-found">
        <h2 class="ui header">"Page does not exist"</h2>
        <p class="meta">{move || location.pathname.get()}</p>
        <A href="/" class="ui button">"Back home"</A>
      </div>
    }
}
