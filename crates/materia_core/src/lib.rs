//! Materia core: pure crash-boundary state machine and the boundary wrapper.
mod boundary;
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use boundary::{render_fn, BoundaryOutput, ErrorBoundary, Render, RenderFn};
pub use effect::Effect;
pub use error::RenderError;
pub use msg::{CrashReport, Msg};
pub use state::BoundaryState;
pub use update::update;
pub use view_model::{
    BoundaryView, FallbackView, FALLBACK_ICON, FALLBACK_MESSAGE, TRY_AGAIN_LABEL,
};
