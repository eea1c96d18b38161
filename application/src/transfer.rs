mod author;
mod book;
mod book_instance;
mod catalog;
mod genre;
mod language;
mod page;
mod user;

pub use self::{
    author::*, book::*, book_instance::*, catalog::*, genre::*, language::*, page::*, user::*,
};
