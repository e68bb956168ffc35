//! Recent-query dropdown

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

/// "Recent:" dropdown plus a clear-history button.
///
/// Picking an entry hands it to `on_select` and resets the dropdown to its
/// placeholder so the same entry can be picked again.
#[component]
pub fn HistoryBar(
    /// Recent queries, most recent first
    #[prop(into)]
    entries: Signal<Vec<String>>,
    on_select: impl Fn(String) + 'static,
    on_clear: impl Fn() + 'static,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let picked = event_target_value(&ev);
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value("");
        }
        if !picked.is_empty() {
            on_select(picked);
        }
    };

    view! {
        <div class="history-bar flex items-center gap-2 text-sm">
            <label for="recent" class="text-slate-400">"Recent:"</label>
            <select
                id="recent"
                on:change=on_change
                class="flex-1 min-w-0 px-2 py-1 bg-slate-900 border border-slate-700 rounded-lg text-slate-200"
            >
                <option value="">"— pick recent query —"</option>
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|q| {
                            let label = q.clone();
                            view! { <option value=q>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button
                on:click=move |_| on_clear()
                class="px-3 py-1 text-slate-400 hover:text-slate-100 border border-slate-700 rounded-lg transition-colors"
            >
                "Clear history"
            </button>
        </div>
    }
}
