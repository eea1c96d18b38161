mod author;
mod book;
mod book_instance;
mod common;
mod genre;
mod language;
mod session;
mod user;

pub use self::{
    author::*, book::*, book_instance::*, common::*, genre::*, language::*, session::*, user::*,
};
