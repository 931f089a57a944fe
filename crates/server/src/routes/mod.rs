//! Route handlers exposed by the bookshelf server.

pub mod books;
pub mod page;
