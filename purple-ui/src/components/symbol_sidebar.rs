use crate::dto::Symbol;
use leptos::*;

#[component]
pub fn SymbolSidebar(#[prop(into)] symbols: Signal<Vec<Symbol>>) -> impl IntoView {
    view! {
      <nav class="ui visible inverted vertical sidebar menu">
        <div class="header item">"Symbols"</div>
        {move || {
          symbols
            .get()
            .into_iter()
            .map(|s| view! { <a class="item">{s.name}</a> })
            .collect_view()
        }}
      </nav>
    }
}
