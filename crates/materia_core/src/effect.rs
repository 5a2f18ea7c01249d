use crate::CrashReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Report a caught child failure on the operator log channel.
    LogCrash(CrashReport),
    /// The user asked for the wrapped subtree to be rendered again.
    RetryRender,
}
