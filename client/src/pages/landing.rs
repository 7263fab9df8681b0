//! Landing page: nav, hero, about, and the registration/login modals.
//!
//! DESIGN
//! ======
//! The page owns the only `ViewController` and passes its signal down. What
//! renders is driven by a memoized `RenderPlan`, so the overlay and the two
//! forms can never disagree about which modal is open.

use leptos::prelude::*;

#[cfg(all(test, feature = "ssr"))]
#[path = "landing_test.rs"]
mod tests;

use crate::components::{
    about_section::AboutSection,
    form_modal::{LoginModal, RegistrationModal},
    hero::Hero,
    modal_overlay::ModalOverlay,
    nav_bar::NavBar,
};
use crate::state::modal::{ModalTarget, ViewController};

#[component]
pub fn LandingPage() -> impl IntoView {
    let controller = RwSignal::new(ViewController::new());
    let plan = Memo::new(move |_| controller.get().render_plan());

    view! {
        <div class="landing">
            <NavBar controller/>
            <Hero/>
            <AboutSection/>

            <Show when=move || plan.get().overlay>
                <ModalOverlay controller/>
            </Show>
            <Show when=move || plan.get().shows(ModalTarget::Registration)>
                <RegistrationModal controller/>
            </Show>
            <Show when=move || plan.get().shows(ModalTarget::Login)>
                <LoginModal controller/>
            </Show>
        </div>
    }
}
