use super::*;

#[derive(Clone, Copy, Debug)]
enum Op {
    Open(ModalTarget),
    Switch(ModalTarget),
    Close,
}

const ALL_OPS: [Op; 5] = [
    Op::Open(ModalTarget::Registration),
    Op::Open(ModalTarget::Login),
    Op::Switch(ModalTarget::Registration),
    Op::Switch(ModalTarget::Login),
    Op::Close,
];

fn apply(controller: &mut ViewController, op: Op) {
    match op {
        Op::Open(target) => controller.open_modal(target),
        Op::Switch(target) => controller.switch_modal(target),
        Op::Close => controller.close_modal(),
    }
}

fn assert_plan_consistent(plan: RenderPlan, ops: &[Op]) {
    assert!(
        !(plan.registration_form && plan.login_form),
        "both forms rendered after {ops:?}"
    );
    assert_eq!(
        plan.overlay,
        plan.registration_form || plan.login_form,
        "overlay mismatch after {ops:?}"
    );
}

// =============================================================
// ModalState / ModalTarget
// =============================================================

#[test]
fn modal_state_default_is_none() {
    assert_eq!(ModalState::default(), ModalState::None);
    assert!(!ModalState::None.is_open());
    assert_eq!(ModalState::None.target(), None);
}

#[test]
fn modal_state_target_round_trips_open_states() {
    for target in [ModalTarget::Registration, ModalTarget::Login] {
        let state = ModalState::from(target);
        assert!(state.is_open());
        assert_eq!(state.target(), Some(target));
    }
}

#[test]
fn modal_target_other_swaps_forms() {
    assert_eq!(ModalTarget::Registration.other(), ModalTarget::Login);
    assert_eq!(ModalTarget::Login.other(), ModalTarget::Registration);
}

// =============================================================
// ViewController operations
// =============================================================

#[test]
fn open_modal_replaces_current_modal() {
    let mut controller = ViewController::new();
    controller.open_modal(ModalTarget::Login);
    controller.open_modal(ModalTarget::Registration);
    assert_eq!(controller.state(), ModalState::Registration);
}

#[test]
fn open_modal_twice_matches_single_call() {
    for target in [ModalTarget::Registration, ModalTarget::Login] {
        let mut once = ViewController::new();
        once.open_modal(target);

        let mut twice = ViewController::new();
        twice.open_modal(target);
        twice.open_modal(target);

        assert_eq!(once, twice);
        assert_eq!(once.render_plan(), twice.render_plan());
    }
}

#[test]
fn close_modal_from_none_stays_none() {
    let mut controller = ViewController::new();
    controller.close_modal();
    assert_eq!(controller.state(), ModalState::None);
    controller.close_modal();
    assert_eq!(controller.state(), ModalState::None);
}

#[test]
fn close_modal_resets_any_state() {
    for target in [ModalTarget::Registration, ModalTarget::Login] {
        let mut controller = ViewController::new();
        controller.open_modal(target);
        controller.close_modal();
        assert_eq!(controller.state(), ModalState::None);
    }
}

#[test]
fn switch_modal_has_same_effect_as_open_modal() {
    let starts = [None, Some(ModalTarget::Registration), Some(ModalTarget::Login)];
    for start in starts {
        for target in [ModalTarget::Registration, ModalTarget::Login] {
            let mut opened = ViewController::new();
            let mut switched = ViewController::new();
            if let Some(initial) = start {
                opened.open_modal(initial);
                switched.open_modal(initial);
            }
            opened.open_modal(target);
            switched.switch_modal(target);
            assert_eq!(opened, switched, "start={start:?} target={target:?}");
        }
    }
}

#[test]
fn every_op_sequence_renders_at_most_one_form() {
    // Exhaustive over all sequences up to length 5.
    let mut frontier: Vec<Vec<Op>> = vec![Vec::new()];
    for _ in 0..5 {
        let mut next = Vec::with_capacity(frontier.len() * ALL_OPS.len());
        for seq in &frontier {
            for op in ALL_OPS {
                let mut extended = seq.clone();
                extended.push(op);

                let mut controller = ViewController::new();
                for &step in &extended {
                    apply(&mut controller, step);
                    assert_plan_consistent(controller.render_plan(), &extended);
                }
                next.push(extended);
            }
        }
        frontier = next;
    }
}

// =============================================================
// RenderPlan
// =============================================================

#[test]
fn render_plan_matches_each_state() {
    assert_eq!(RenderPlan::for_state(ModalState::None), RenderPlan::default());
    assert_eq!(
        RenderPlan::for_state(ModalState::Registration),
        RenderPlan { overlay: true, registration_form: true, login_form: false }
    );
    assert_eq!(
        RenderPlan::for_state(ModalState::Login),
        RenderPlan { overlay: true, registration_form: false, login_form: true }
    );
}

#[test]
fn render_plan_shows_only_open_target() {
    let plan = RenderPlan::for_state(ModalState::Login);
    assert!(plan.shows(ModalTarget::Login));
    assert!(!plan.shows(ModalTarget::Registration));
}

// =============================================================
// Page scenarios
// =============================================================

#[test]
fn initial_render_has_no_overlay_or_modal() {
    let plan = ViewController::new().render_plan();
    assert!(!plan.overlay);
    assert!(!plan.registration_form);
    assert!(!plan.login_form);
}

#[test]
fn register_link_shows_registration_form() {
    let mut controller = ViewController::new();
    controller.open_modal(ModalTarget::Registration);
    let plan = controller.render_plan();
    assert!(plan.overlay);
    assert!(plan.registration_form);
    assert!(!plan.login_form);
}

#[test]
fn login_switch_link_from_registration_shows_login_form() {
    let mut controller = ViewController::new();
    controller.open_modal(ModalTarget::Registration);
    controller.switch_modal(ModalTarget::Registration.other());
    let plan = controller.render_plan();
    assert!(plan.overlay);
    assert!(plan.login_form);
    assert!(!plan.registration_form);
}

#[test]
fn overlay_click_from_login_clears_everything() {
    let mut controller = ViewController::new();
    controller.open_modal(ModalTarget::Login);
    controller.close_modal();
    assert_eq!(controller.state(), ModalState::None);
    assert_eq!(controller.render_plan(), RenderPlan::default());
}

#[test]
fn render_plan_follows_open_target() {
    for state in [ModalState::None, ModalState::Registration, ModalState::Login] {
        let plan = RenderPlan::for_state(state);
        assert_eq!(plan.overlay, state.target().is_some());
        for target in [ModalTarget::Registration, ModalTarget::Login] {
            assert_eq!(plan.shows(target), state.target() == Some(target), "{state:?}");
        }
    }
}
