use serde::Serialize;

use application::transfer::{LoanDto, PageDto};

use crate::controller::Exhaust;
use crate::route::model::BookInstanceResponse;
use crate::route::page::PageResponse;

#[derive(Debug, Serialize)]
pub struct LoanResponse {
    #[serde(flatten)]
    instance: BookInstanceResponse,
    title: String,
}

impl From<LoanDto> for LoanResponse {
    fn from(LoanDto { instance, title }: LoanDto) -> Self {
        Self {
            instance: instance.into(),
            title,
        }
    }
}

pub struct Presenter;

impl Exhaust<PageDto<LoanDto>> for Presenter {
    type To = PageResponse<LoanResponse>;
    fn emit(&self, input: PageDto<LoanDto>) -> Self::To {
        PageResponse::new(input, LoanResponse::from)
    }
}
