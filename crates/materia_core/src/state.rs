use crate::view_model::{BoundaryView, FallbackView};

/// Crash boundary state. Degraded is sticky until the user asks to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    Normal,
    Degraded,
}

impl BoundaryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(self) -> bool {
        self == BoundaryState::Degraded
    }

    pub fn view(self) -> BoundaryView {
        match self {
            BoundaryState::Normal => BoundaryView::Children,
            BoundaryState::Degraded => BoundaryView::Fallback(FallbackView::default()),
        }
    }
}
