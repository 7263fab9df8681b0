//! Full-page dimming layer behind an open modal.

use leptos::prelude::*;

use crate::state::modal::ViewController;

/// Clicking the overlay closes whichever modal is open.
#[component]
pub fn ModalOverlay(controller: RwSignal<ViewController>) -> impl IntoView {
    let on_click = move |_| controller.update(ViewController::close_modal);

    view! { <div class="overlay" on:click=on_click></div> }
}
