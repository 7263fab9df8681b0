//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static page data (form descriptors, nav links) lives here so components
//! stay thin and the contracts can be unit tested without rendering.

pub mod form_rules;
pub mod nav;
