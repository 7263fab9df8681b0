//! Landing page headline.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>
                "AN ENSEMBLE LEARNING APPROACH FOR IMPROVED "
                <span>"SLEEP DISORDER PREDICTION"</span>
            </h1>
        </section>
    }
}
