//! Home page - brand panel beside the chat widget

use leptos::prelude::*;

use crate::components::{BrandPanel, ChatWidget, Footer};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="app-root min-h-screen flex flex-col">
            <div class="app-shell flex-1 flex flex-col lg:flex-row max-w-6xl w-full mx-auto">
                <BrandPanel />

                <section class="panel flex-1 min-w-0 p-6">
                    <ChatWidget />
                </section>
            </div>
            <Footer />
        </div>
    }
}
