#![forbid(unsafe_code)]

pub mod collection;
pub mod iter;
pub mod key;


pub use self::{
    collection::{
        Entry,
        KeyedCollection,
    },
    iter::{
        IntoIter,
        Iter,
        IterMut,
    },
    key::Key,
};
use core::fmt;

/// Errors that may occur when operating on a keyed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The automatic integer key space is used up.
    ///
    /// Happens when the next free key saturated at `i64::MAX` and that key
    /// is occupied.
    KeySpaceExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::KeySpaceExhausted => {
                write!(f, "cannot push: the next integer key is already occupied")
            }
        }
    }
}

impl std::error::Error for Error {}

/// The operations shared by all keyed collections regardless of their items.
///
/// Generic code that only needs list and map like access to a collection
/// should be written against this trait.
pub trait Collection {
    /// The type of the stored values.
    type Item;

    /// Returns a shared reference to the value of the key if any.
    fn get<K>(&self, key: K) -> Option<&Self::Item>
    where
        K: Into<Key>;

    /// Returns the value of the key or `default` if the key is missing.
    fn get_or<'a, K>(&'a self, key: K, default: &'a Self::Item) -> &'a Self::Item
    where
        K: Into<Key>,
    {
        self.get(key).unwrap_or(default)
    }

    /// Sets the value of the key, overwriting an existing value in place.
    fn set<K>(&mut self, key: K, value: Self::Item) -> &mut Self
    where
        K: Into<Key>;

    /// Appends the value with the next free integer key.
    fn push(&mut self, value: Self::Item) -> &mut Self;

    /// Removes and returns the last value if any.
    fn pop(&mut self) -> Option<Self::Item>;

    /// Removes and returns the first value if any.
    fn shift(&mut self) -> Option<Self::Item>;

    /// Prepends the value.
    fn unshift(&mut self, value: Self::Item) -> &mut Self;

    /// Removes the entry of the key if present.
    fn remove<K>(&mut self, key: K) -> &mut Self
    where
        K: Into<Key>;

    /// Returns `true` if the key is present.
    fn exists<K>(&self, key: K) -> bool
    where
        K: Into<Key>;

    /// Returns all entries in their current order.
    fn all(&self) -> &[Entry<Self::Item>];

    /// Removes all entries.
    fn clear(&mut self) -> &mut Self;

    /// Returns the number of entries.
    fn count(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns an iterator over the key and value pairs in order.
    fn iter(&self) -> Iter<Self::Item>;
}
