mod author;
mod book;
mod book_instance;
mod genre;
mod language;
mod user;

pub use self::{author::*, book::*, book_instance::*, genre::*, language::*, user::*};
