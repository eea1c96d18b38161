use serde::Deserialize;
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

use application::transfer::{
    CheckoutDto, GetBookInstanceDto, ProposeRenewalDto, RenewBookInstanceDto, ReserveDto,
    TransitionDto,
};
use kernel::prelude::entity::{Capability, User};
use kernel::{validation_error, KernelError};

use crate::controller::{Intake, TryIntake};

#[derive(Debug, Deserialize)]
pub struct RenewRequest {
    due_back: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    borrower: Uuid,
    due_back: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    borrower: Uuid,
    hold_until: Option<Date>,
}

#[derive(Debug)]
pub struct GetBookInstanceRequest {
    id: Uuid,
}

impl GetBookInstanceRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct RenewalFormRequest {
    actor: User,
    id: Uuid,
}

impl RenewalFormRequest {
    pub fn new(actor: User, id: Uuid) -> Self {
        Self { actor, id }
    }
}

#[derive(Debug)]
pub struct TransitionRequest {
    actor: User,
    id: Uuid,
}

impl TransitionRequest {
    pub fn new(actor: User, id: Uuid) -> Self {
        Self { actor, id }
    }
}

pub struct Transformer;

impl Intake<GetBookInstanceRequest> for Transformer {
    type To = GetBookInstanceDto;
    fn emit(&self, GetBookInstanceRequest { id }: GetBookInstanceRequest) -> Self::To {
        GetBookInstanceDto { id }
    }
}

impl Intake<RenewalFormRequest> for Transformer {
    type To = ProposeRenewalDto;
    fn emit(&self, RenewalFormRequest { actor, id }: RenewalFormRequest) -> Self::To {
        ProposeRenewalDto { actor, id }
    }
}

impl TryIntake<(User, Uuid, RenewRequest)> for Transformer {
    type To = RenewBookInstanceDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, (actor, id, input): (User, Uuid, RenewRequest)) -> Result<Self::To, Self::Error> {
        actor.require(Capability::CanMarkReturned)?;
        let due_back = input
            .due_back
            .ok_or_else(|| validation_error("due_back", "This field is required."))?;
        let due_back = Date::parse(due_back.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| validation_error("due_back", "Enter a valid date."))?;
        Ok(RenewBookInstanceDto {
            actor,
            id,
            due_back,
        })
    }
}

impl Intake<(User, Uuid, CheckoutRequest)> for Transformer {
    type To = CheckoutDto;
    fn emit(&self, (actor, id, input): (User, Uuid, CheckoutRequest)) -> Self::To {
        CheckoutDto {
            actor,
            id,
            borrower: input.borrower,
            due_back: input.due_back,
        }
    }
}

impl Intake<(User, Uuid, ReserveRequest)> for Transformer {
    type To = ReserveDto;
    fn emit(&self, (actor, id, input): (User, Uuid, ReserveRequest)) -> Self::To {
        ReserveDto {
            actor,
            id,
            borrower: input.borrower,
            hold_until: input.hold_until,
        }
    }
}

impl Intake<TransitionRequest> for Transformer {
    type To = TransitionDto;
    fn emit(&self, TransitionRequest { actor, id }: TransitionRequest) -> Self::To {
        TransitionDto { actor, id }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::prelude::entity::{Capabilities, Capability, User, UserId, UserName};
    use kernel::{KernelError, KernelReportExt};

    use crate::controller::TryIntake;
    use crate::route::instance::request::{RenewRequest, Transformer};

    fn actor() -> User {
        User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new("librarian"),
            [Capability::CanMarkReturned].into_iter().collect::<Capabilities>(),
        )
    }

    fn reader() -> User {
        User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new("reader"),
            Capabilities::default(),
        )
    }

    #[test]
    fn permission_is_checked_before_the_form() {
        let req: RenewRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        let error = Transformer.emit((reader(), Uuid::new_v4(), req)).unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);
        assert!(error.field_errors().is_empty());

        let req: RenewRequest =
            serde_json::from_value(serde_json::json!({ "due_back": "not a date" })).unwrap();
        let error = Transformer.emit((reader(), Uuid::new_v4(), req)).unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);
    }

    #[test]
    fn malformed_renewal_date_is_a_field_error() {
        let req: RenewRequest =
            serde_json::from_value(serde_json::json!({ "due_back": "15/01/2024" })).unwrap();
        let error = Transformer.emit((actor(), Uuid::new_v4(), req)).unwrap_err();
        assert_eq!(*error.current_context(), KernelError::Validation);
        assert_eq!(error.field_errors()[0].field(), "due_back");
        assert_eq!(error.field_errors()[0].message(), "Enter a valid date.");
    }

    #[test]
    fn renewal_date_is_required() {
        let req: RenewRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        let error = Transformer.emit((actor(), Uuid::new_v4(), req)).unwrap_err();
        assert_eq!(*error.current_context(), KernelError::Validation);
        assert_eq!(error.field_errors()[0].field(), "due_back");
    }

    #[test]
    fn renewal_date_is_read_as_iso_date() {
        let id = Uuid::new_v4();
        let req: RenewRequest =
            serde_json::from_value(serde_json::json!({ "due_back": "2024-01-15" })).unwrap();
        let dto = Transformer.emit((actor(), id, req)).unwrap();
        assert_eq!(dto.due_back, date!(2024 - 01 - 15));
        assert_eq!(dto.id, id);
    }
}
