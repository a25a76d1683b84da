use crate::call::{Arguments, CallContext, CallOutcome};

/// A state machine reachable through the method/argument/sender boundary.
///
/// Implementations must check every precondition before writing, so a failed
/// outcome leaves their state untouched.
pub trait Contract: Send {
    /// Short name used in logs and receipts.
    fn name(&self) -> &'static str;

    /// Method names this contract answers to.
    fn methods(&self) -> &'static [&'static str];

    /// Execute `method`. Methods outside [`Contract::methods`] yield
    /// `MethodNotFound`.
    fn invoke(&mut self, ctx: &CallContext, method: &str, args: Arguments<'_>) -> CallOutcome;

    fn owns(&self, method: &str) -> bool {
        self.methods().contains(&method)
    }
}
