mod author;
mod book;
mod book_instance;
mod genre;
mod language;
mod session;
mod user;

pub use self::{
    author::*, book::*, book_instance::*, genre::*, language::*, session::*, user::*,
};
