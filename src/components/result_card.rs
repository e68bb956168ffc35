//! Search result card

use leptos::prelude::*;

use crate::types::SearchResult;

#[component]
pub fn ResultCard(result: SearchResult) -> impl IntoView {
    let meta = result.meta_line();

    view! {
        <article class="result-card bg-slate-900/60 border border-slate-700 rounded-xl p-4">
            <h3 class="font-semibold text-blue-300 hover:underline">
                <a href=result.url target="_blank" rel="noreferrer">{result.name}</a>
            </h3>
            {(!meta.is_empty()).then(|| view! {
                <div class="meta text-xs text-slate-500 mt-1">{meta}</div>
            })}
            <p class="text-sm text-slate-300 mt-2">{result.summary}</p>
        </article>
    }
}
