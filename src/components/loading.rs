//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-blue-400 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-blue-400 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-blue-400 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Placeholder bot bubble while a search is in flight
#[component]
pub fn SearchingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start message-appear">
            <div class="px-4 py-3 bg-slate-800 rounded-2xl rounded-tl-sm">
                <LoadingDots />
            </div>
        </div>
    }
}
