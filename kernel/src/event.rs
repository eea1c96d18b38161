mod inventory;

pub use self::inventory::*;

/// Folds an event into a piece of state, refusing events the state does not accept.
pub trait Applier<Event> {
    fn apply(&mut self, event: Event) -> error_stack::Result<(), crate::KernelError>;
}
