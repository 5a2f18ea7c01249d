use materia_core::{
    update, BoundaryState, BoundaryView, CrashReport, Effect, FallbackView, Msg,
    FALLBACK_MESSAGE, TRY_AGAIN_LABEL,
};
use pretty_assertions::assert_eq;

fn crash(message: &str) -> CrashReport {
    CrashReport::new(message, Some("while rendering card".to_string()))
}

#[test]
fn initial_state_renders_children() {
    let state = BoundaryState::new();

    assert_eq!(state, BoundaryState::Normal);
    assert!(!state.has_error());
    assert_eq!(state.view(), BoundaryView::Children);
}

#[test]
fn child_failure_degrades_and_logs() {
    let (state, effects) = update(BoundaryState::Normal, Msg::ChildRenderFailed(crash("boom")));

    assert_eq!(state, BoundaryState::Degraded);
    assert!(state.has_error());
    assert_eq!(effects, vec![Effect::LogCrash(crash("boom"))]);
}

#[test]
fn degraded_view_shows_fallback_with_recovery_control() {
    let view = BoundaryState::Degraded.view();

    let BoundaryView::Fallback(fallback) = view else {
        panic!("expected fallback view, got {view:?}");
    };
    assert_eq!(fallback, FallbackView::default());
    assert_eq!(fallback.message, FALLBACK_MESSAGE);
    assert_eq!(fallback.action_label, TRY_AGAIN_LABEL);
    assert_eq!(fallback.icon, "error_outline");
}

#[test]
fn failure_while_degraded_stays_degraded_and_still_logs() {
    let (state, _) = update(BoundaryState::Normal, Msg::ChildRenderFailed(crash("first")));
    let (state, effects) = update(state, Msg::ChildRenderFailed(crash("second")));

    assert_eq!(state, BoundaryState::Degraded);
    assert_eq!(effects, vec![Effect::LogCrash(crash("second"))]);
}

#[test]
fn try_again_returns_to_normal() {
    let (state, _) = update(BoundaryState::Normal, Msg::ChildRenderFailed(crash("boom")));
    let (state, effects) = update(state, Msg::TryAgainClicked);

    assert_eq!(state, BoundaryState::Normal);
    assert_eq!(effects, vec![Effect::RetryRender]);
}

#[test]
fn try_again_in_normal_mode_is_ignored() {
    let (state, effects) = update(BoundaryState::Normal, Msg::TryAgainClicked);

    assert_eq!(state, BoundaryState::Normal);
    assert!(effects.is_empty());
}

#[test]
fn failure_after_recovery_degrades_again() {
    let (state, _) = update(BoundaryState::Normal, Msg::ChildRenderFailed(crash("boom")));
    let (state, _) = update(state, Msg::TryAgainClicked);
    let (state, effects) = update(state, Msg::ChildRenderFailed(crash("again")));

    assert_eq!(state, BoundaryState::Degraded);
    assert_eq!(effects.len(), 1);
}
