//! Modal visibility state for the landing page.
//!
//! DESIGN
//! ======
//! The page shows at most one overlay form at a time, so the whole UI state is
//! a single `ModalState`. `ViewController` owns it and is the only writer;
//! components read a derived `RenderPlan` instead of matching on the state
//! themselves, which keeps "overlay iff a modal is open" in one place.
//!
//! Every operation is total over the state space. There are no invalid
//! transitions and nothing here can fail.

#[cfg(test)]
#[path = "modal_test.rs"]
mod tests;

/// Which modal, if any, is currently displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No overlay and no form.
    #[default]
    None,
    /// Registration form over the overlay.
    Registration,
    /// Login form over the overlay.
    Login,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self.target().is_some()
    }

    /// The open modal, or `None` when nothing is displayed.
    pub fn target(self) -> Option<ModalTarget> {
        match self {
            Self::None => None,
            Self::Registration => Some(ModalTarget::Registration),
            Self::Login => Some(ModalTarget::Login),
        }
    }
}

/// A modal that can be opened. Excludes `ModalState::None` so open/switch
/// calls cannot ask for "no modal".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTarget {
    Registration,
    Login,
}

impl ModalTarget {
    /// The modal reached through this modal's "switch" link.
    pub fn other(self) -> Self {
        match self {
            Self::Registration => Self::Login,
            Self::Login => Self::Registration,
        }
    }
}

impl From<ModalTarget> for ModalState {
    fn from(target: ModalTarget) -> Self {
        match target {
            ModalTarget::Registration => Self::Registration,
            ModalTarget::Login => Self::Login,
        }
    }
}

/// What the landing page renders for a given state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub overlay: bool,
    pub registration_form: bool,
    pub login_form: bool,
}

impl RenderPlan {
    pub fn for_state(state: ModalState) -> Self {
        let open = state.target();
        Self {
            overlay: state.is_open(),
            registration_form: open == Some(ModalTarget::Registration),
            login_form: open == Some(ModalTarget::Login),
        }
    }

    /// Whether the form for `target` is part of this plan.
    pub fn shows(self, target: ModalTarget) -> bool {
        match target {
            ModalTarget::Registration => self.registration_form,
            ModalTarget::Login => self.login_form,
        }
    }
}

/// Owner of the landing page's `ModalState`.
///
/// Held inside an `RwSignal` by `LandingPage`; click handlers call the
/// operations through `RwSignal::update`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewController {
    state: ModalState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Show `target`, replacing whatever modal was open.
    pub fn open_modal(&mut self, target: ModalTarget) {
        self.transition("open", target.into());
    }

    /// Hide the overlay and any modal.
    pub fn close_modal(&mut self) {
        self.transition("close", ModalState::None);
    }

    /// Jump from one form to the other. Same effect as `open_modal`.
    pub fn switch_modal(&mut self, target: ModalTarget) {
        self.transition("switch", target.into());
    }

    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::for_state(self.state)
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn transition(&mut self, op: &'static str, next: ModalState) {
        #[cfg(feature = "hydrate")]
        log::debug!("modal {op}: {:?} -> {:?}", self.state, next);

        self.state = next;
    }
}
