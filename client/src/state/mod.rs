//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types are plain Rust values. Pages wrap them in `RwSignal`s and hand
//! the signals to child components as props.

pub mod modal;
