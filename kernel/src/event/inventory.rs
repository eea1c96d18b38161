use error_stack::Report;

use crate::entity::{BookInstance, DueBack, LoanStatus, UserId};
use crate::event::Applier;
use crate::KernelError;

/// Everything that can happen to a copy while it circulates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InventoryEvent {
    CheckedOut { borrower: UserId, due_back: DueBack },
    Returned,
    Reserved { borrower: UserId, hold_until: DueBack },
    Released,
    SentToMaintenance,
    Renewed { due_back: DueBack },
}

impl InventoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InventoryEvent::CheckedOut { .. } => "checked_out",
            InventoryEvent::Returned => "returned",
            InventoryEvent::Reserved { .. } => "reserved",
            InventoryEvent::Released => "released",
            InventoryEvent::SentToMaintenance => "sent_to_maintenance",
            InventoryEvent::Renewed { .. } => "renewed",
        }
    }
}

impl Applier<InventoryEvent> for BookInstance {
    fn apply(&mut self, event: InventoryEvent) -> error_stack::Result<(), KernelError> {
        let status = *self.status();
        let holder = self.borrower().clone();
        let name = event.name();
        let (next_status, borrower, due_back) = match (status, event) {
            (
                LoanStatus::Available,
                InventoryEvent::CheckedOut { borrower, due_back },
            ) => (LoanStatus::OnLoan, Some(borrower), Some(due_back)),
            (
                LoanStatus::Reserved,
                InventoryEvent::CheckedOut { borrower, due_back },
            ) if holder.as_ref() == Some(&borrower) => {
                (LoanStatus::OnLoan, Some(borrower), Some(due_back))
            }
            (LoanStatus::OnLoan, InventoryEvent::Returned) => (LoanStatus::Available, None, None),
            (
                LoanStatus::Available,
                InventoryEvent::Reserved {
                    borrower,
                    hold_until,
                },
            ) => (LoanStatus::Reserved, Some(borrower), Some(hold_until)),
            (LoanStatus::Reserved | LoanStatus::Maintenance, InventoryEvent::Released) => {
                (LoanStatus::Available, None, None)
            }
            (_, InventoryEvent::SentToMaintenance) => (LoanStatus::Maintenance, None, None),
            // renewal only moves the date; the status is left as found
            (status, InventoryEvent::Renewed { due_back }) => (status, holder, Some(due_back)),
            (status, _) => {
                return Err(Report::new(KernelError::InvalidState)
                    .attach_printable(format!("Cannot apply {name} to a copy in state {status}")))
            }
        };
        self.substitute(|instance| {
            *instance.status = next_status;
            *instance.borrower = borrower;
            *instance.due_back = due_back;
        });
        Ok(())
    }
}
