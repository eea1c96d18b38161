use application::transfer::GetCatalogSummaryDto;

use crate::controller::Intake;
use crate::extract::Session;

pub struct Transformer;

impl Intake<Session> for Transformer {
    type To = GetCatalogSummaryDto;
    fn emit(&self, Session(session): Session) -> Self::To {
        GetCatalogSummaryDto { session }
    }
}
