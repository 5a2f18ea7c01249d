use std::any::Any;
use std::fmt;

use crate::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The wrapped child failed while rendering.
    ChildRenderFailed(CrashReport),
    /// User clicked "Try Again" on the fallback view.
    TryAgainClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What was caught at the boundary: the failure itself plus auxiliary context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashReport {
    pub message: String,
    pub info: Option<String>,
}

impl CrashReport {
    pub fn new(message: impl Into<String>, info: Option<String>) -> Self {
        Self {
            message: message.into(),
            info,
        }
    }

    pub fn from_error(child: &str, err: &RenderError) -> Self {
        Self::new(err.to_string(), Some(format!("while rendering {child}")))
    }

    pub fn from_panic(child: &str, payload: &(dyn Any + Send)) -> Self {
        Self::new(
            panic_payload_to_string(payload),
            Some(format!("panic while rendering {child}")),
        )
    }
}

impl fmt::Display for CrashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.info {
            Some(info) => write!(f, "{} ({info})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

fn panic_payload_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
