//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections. Modal-related components take
//! the page's `RwSignal<ViewController>` as a prop and never own modal state.

pub mod about_section;
pub mod form_modal;
pub mod hero;
pub mod modal_overlay;
pub mod nav_bar;
