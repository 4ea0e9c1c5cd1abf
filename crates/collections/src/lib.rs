#![forbid(unsafe_code)]

mod book;
mod object;
mod value;

#[cfg(test)]
mod tests;

pub use self::{
    book::{
        Book,
        BookRecord,
    },
    object::Object,
    value::Value,
};
pub use keyed::{
    Collection,
    Entry,
    Error,
    Key,
    KeyedCollection,
};

/// A collection of books.
pub type BookCollection = KeyedCollection<Box<dyn Book>>;

/// A collection of loosely typed values.
///
/// Holds strings, integers, floats, booleans, nulls, object references and
/// nested arrays, see [`Value`].
pub type StandardCollection = KeyedCollection<Value>;
