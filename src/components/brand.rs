//! Static branding for the page shell

use leptos::prelude::*;

/// Brand sidebar: title, tagline, languages and a keyboard tip
#[component]
pub fn BrandPanel() -> impl IntoView {
    view! {
        <aside class="brand flex flex-col gap-3 p-6 lg:w-72 shrink-0">
            <h1 class="text-2xl font-bold text-gradient">"Nonprofit Resources"</h1>
            <p class="tag text-slate-400">"Fast semantic search for local nonprofit services"</p>
            <div class="languages text-sm text-slate-300">"Supports English & Spanish"</div>
            <p class="note text-xs text-slate-500">"Tip: Press Enter to send, Shift+Enter for newline."</p>
        </aside>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer border-t border-slate-800 py-4 text-center text-xs text-slate-500">
            "Built for nonprofit discovery · Local demo"
        </footer>
    }
}
