//! Top navigation bar with logo and links.

use leptos::prelude::*;

use crate::state::modal::ViewController;
use crate::util::nav::{NAV_LINKS, NavAction};

#[component]
pub fn NavBar(controller: RwSignal<ViewController>) -> impl IntoView {
    view! {
        <nav>
            <div class="logo">"CLASSIFICATION OF " <span>"SLEEP DISORDERS"</span></div>
            <div class="nav-links">
                {NAV_LINKS
                    .iter()
                    .map(|link| match link.action {
                        NavAction::Navigate => {
                            view! { <a href=link.href class=link.class>{link.label}</a> }.into_any()
                        }
                        NavAction::OpenModal(target) => {
                            view! {
                                <a
                                    href=link.href
                                    class=link.class
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        controller.update(|c| c.open_modal(target));
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
