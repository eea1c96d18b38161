mod author;
mod book;
mod catalog;
mod instance;
mod loan;
mod model;
mod page;
mod reference;

pub use self::{
    author::AuthorRouter, book::BookRouter, catalog::CatalogRouter, instance::InstanceRouter,
    loan::LoanRouter, reference::ReferenceRouter,
};
