use std::panic::{self, AssertUnwindSafe};

use materia_logging::{materia_debug, materia_error};

use crate::{update, BoundaryState, BoundaryView, CrashReport, Effect, FallbackView, Msg, RenderError};

/// A subtree that may fail while rendering.
pub trait Render {
    type Output;

    /// Name used in crash reports.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn render(&self) -> Result<Self::Output, RenderError>;
}

/// Adapts a closure into a named [`Render`] child.
pub struct RenderFn<F> {
    name: String,
    f: F,
}

pub fn render_fn<F, T>(name: impl Into<String>, f: F) -> RenderFn<F>
where
    F: Fn() -> Result<T, RenderError>,
{
    RenderFn {
        name: name.into(),
        f,
    }
}

impl<F, T> Render for RenderFn<F>
where
    F: Fn() -> Result<T, RenderError>,
{
    type Output = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Result<T, RenderError> {
        (self.f)()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryOutput<T> {
    Content(T),
    Fallback(FallbackView),
}

impl<T> BoundaryOutput<T> {
    pub fn content(self) -> Option<T> {
        match self {
            BoundaryOutput::Content(value) => Some(value),
            BoundaryOutput::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BoundaryOutput::Fallback(_))
    }
}

/// Wraps a child renderer and converts its failures into a fallback view.
///
/// Both `Err` returns and panics raised by the child are caught, logged at
/// error level and never propagated. Once degraded, the child is not called
/// again until [`ErrorBoundary::try_again`].
pub struct ErrorBoundary<R> {
    child: R,
    state: BoundaryState,
}

impl<R: Render> ErrorBoundary<R> {
    pub fn new(child: R) -> Self {
        Self {
            child,
            state: BoundaryState::new(),
        }
    }

    pub fn state(&self) -> BoundaryState {
        self.state
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    pub fn child(&self) -> &R {
        &self.child
    }

    pub fn render(&mut self) -> BoundaryOutput<R::Output> {
        if let BoundaryView::Fallback(view) = self.state.view() {
            return BoundaryOutput::Fallback(view);
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.child.render()));
        let report = match outcome {
            Ok(Ok(output)) => return BoundaryOutput::Content(output),
            Ok(Err(err)) => CrashReport::from_error(self.child.name(), &err),
            Err(payload) => CrashReport::from_panic(self.child.name(), payload.as_ref()),
        };

        self.dispatch(Msg::ChildRenderFailed(report));
        BoundaryOutput::Fallback(FallbackView::default())
    }

    /// Recovery control: returns to normal mode. The child may fail again.
    pub fn try_again(&mut self) {
        self.dispatch(Msg::TryAgainClicked);
    }

    fn dispatch(&mut self, msg: Msg) {
        let (next, effects) = update(self.state, msg);
        self.state = next;
        for effect in effects {
            run_effect(effect);
        }
    }
}

fn run_effect(effect: Effect) {
    match effect {
        Effect::LogCrash(report) => materia_error!("Component crashed: {}", report),
        Effect::RetryRender => materia_debug!("Boundary reset, re-rendering child"),
    }
}
