mod capability;
mod id;
mod name;

pub use self::{capability::*, id::*, name::*};
use destructure::Destructure;
use error_stack::Report;
use vodca::References;

use crate::KernelError;

/// An authenticated actor together with the capabilities granted to them.
#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct User {
    id: UserId,
    name: UserName,
    capabilities: Capabilities,
}

impl User {
    pub fn new(id: UserId, name: UserName, capabilities: Capabilities) -> Self {
        Self {
            id,
            name,
            capabilities,
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn require(&self, capability: Capability) -> error_stack::Result<(), KernelError> {
        if self.has_capability(capability) {
            Ok(())
        } else {
            Err(Report::new(KernelError::PermissionDenied).attach_printable(format!(
                "{} lacks capability {}",
                self.name.as_ref(),
                capability
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::entity::{Capabilities, Capability, User, UserId, UserName};
    use crate::KernelError;

    #[test]
    fn require_checks_capability() {
        let librarian = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new("librarian"),
            Capabilities::from_iter([Capability::CanMarkReturned]),
        );
        assert!(librarian.require(Capability::CanMarkReturned).is_ok());
        let error = librarian.require(Capability::DeleteAuthor).unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);
    }
}
