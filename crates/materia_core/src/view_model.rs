pub const FALLBACK_ICON: &str = "error_outline";
pub const FALLBACK_MESSAGE: &str = "Something went wrong while displaying this section.";
pub const TRY_AGAIN_LABEL: &str = "Try Again";

/// What the host should draw for the boundary's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryView {
    /// Draw the wrapped subtree unchanged.
    Children,
    /// Draw the static fallback with its recovery control.
    Fallback(FallbackView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub icon: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
}

impl Default for FallbackView {
    fn default() -> Self {
        Self {
            icon: FALLBACK_ICON,
            message: FALLBACK_MESSAGE,
            action_label: TRY_AGAIN_LABEL,
        }
    }
}
