use crate::{BoundaryState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(state: BoundaryState, msg: Msg) -> (BoundaryState, Vec<Effect>) {
    match msg {
        // A failure while already degraded is still reported; the state stays put.
        Msg::ChildRenderFailed(report) => {
            (BoundaryState::Degraded, vec![Effect::LogCrash(report)])
        }
        Msg::TryAgainClicked => match state {
            BoundaryState::Degraded => (BoundaryState::Normal, vec![Effect::RetryRender]),
            BoundaryState::Normal => (state, Vec::new()),
        },
        Msg::NoOp => (state, Vec::new()),
    }
}
