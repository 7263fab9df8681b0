//! Top navigation links.

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;

use crate::state::modal::ModalTarget;

/// What a nav link does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Follow `href` normally.
    Navigate,
    /// Suppress navigation and open a modal.
    OpenModal(ModalTarget),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    pub action: NavAction,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "HOME", href: "/", class: "nav-link", action: NavAction::Navigate },
    NavLink { label: "ABOUT", href: "#about", class: "nav-link", action: NavAction::Navigate },
    NavLink {
        label: "REGISTER",
        href: "#",
        class: "nav-link",
        action: NavAction::OpenModal(ModalTarget::Registration),
    },
    NavLink {
        label: "LOGIN",
        href: "#",
        class: "nav-link",
        action: NavAction::OpenModal(ModalTarget::Login),
    },
    NavLink { label: "ADMIN", href: "/admin-login", class: "nav-link admin-btn", action: NavAction::Navigate },
];
