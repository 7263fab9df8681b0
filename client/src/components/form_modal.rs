//! Registration and login modals.
//!
//! Both modals render a plain `<form>` from a `FormSpec`. Submission is a
//! normal browser form post; the component only wires the switch link and
//! Escape-to-close to the page's `ViewController`.

use leptos::prelude::*;

#[cfg(all(test, feature = "ssr"))]
#[path = "form_modal_test.rs"]
mod tests;

use crate::state::modal::{ModalTarget, ViewController};
use crate::util::form_rules::{FieldSpec, FormSpec, form_for};

#[component]
pub fn RegistrationModal(controller: RwSignal<ViewController>) -> impl IntoView {
    view! { <FormModal form=form_for(ModalTarget::Registration) controller/> }
}

#[component]
pub fn LoginModal(controller: RwSignal<ViewController>) -> impl IntoView {
    view! { <FormModal form=form_for(ModalTarget::Login) controller/> }
}

#[component]
fn FormModal(form: &'static FormSpec, controller: RwSignal<ViewController>) -> impl IntoView {
    let switch_to = form.switch_to();
    let on_switch = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        controller.update(|c| c.switch_modal(switch_to));
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            controller.update(ViewController::close_modal);
        }
    };

    view! {
        <div class="modal" on:keydown=on_keydown tabindex="0">
            <h2>{form.heading}</h2>
            <form action=form.action method=form.method>
                {form.fields.iter().map(field_input).collect_view()}
                <button type="submit" class="submit-btn">{form.submit_label}</button>
            </form>
            <div class="switch-text">
                {form.switch_prompt}
                <a href="#" on:click=on_switch>{form.switch_label}</a>
            </div>
        </div>
    }
}

fn field_input(field: &'static FieldSpec) -> impl IntoView {
    view! {
        <input
            type=field.input_type.as_str()
            name=field.name
            placeholder=field.placeholder
            pattern=field.pattern()
            title=field.title()
            required=field.required
        />
    }
}
