use super::{
    Collection,
    Error,
    IntoIter,
    Iter,
    IterMut,
    Key,
};
use ahash::AHashMap;
use core::{
    fmt,
    iter::FromIterator,
    ops,
};

/// A key and value pair stored in a keyed collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    key: Key,
    value: T,
}

impl<T> Entry<T> {
    /// Returns the key of the entry.
    #[inline]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns a shared reference to the value of the entry.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns an exclusive reference to the value of the entry.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_parts(self) -> (Key, T) {
        (self.key, self.value)
    }

    pub(crate) fn as_pair(&self) -> (&Key, &T) {
        (&self.key, &self.value)
    }

    pub(crate) fn as_pair_mut(&mut self) -> (&Key, &mut T) {
        (&self.key, &mut self.value)
    }
}

/// An insertion ordered collection addressed by integer or string keys.
///
/// Supports list like access through [`push`], [`pop`], [`shift`] and
/// [`unshift`] as well as map like access through [`get`], [`set`] and
/// [`remove`] on the same key space.
///
/// # Integer keys
///
/// The collection tracks the next free integer key that [`push`] assigns.
/// It is one past the greatest non-negative integer key ever inserted and
/// is not lowered by [`remove`]. [`shift`] and [`unshift`] renumber all
/// integer keys to `0..n` in their current order while string keys keep
/// their names.
///
/// [`push`]: KeyedCollection::push
/// [`pop`]: KeyedCollection::pop
/// [`shift`]: KeyedCollection::shift
/// [`unshift`]: KeyedCollection::unshift
/// [`get`]: KeyedCollection::get
/// [`set`]: KeyedCollection::set
/// [`remove`]: KeyedCollection::remove
#[derive(Clone)]
pub struct KeyedCollection<T> {
    /// The entries in their iteration order.
    entries: Vec<Entry<T>>,
    /// Maps every key to the position of its entry.
    positions: AHashMap<Key, usize>,
    /// The key the next pushed value receives.
    ///
    /// Saturates at `i64::MAX`.
    next_index: i64,
}

impl<T> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: AHashMap::default(),
            next_index: 0,
        }
    }
}

impl<T> KeyedCollection<T> {
    /// Creates a new empty keyed collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty keyed collection with space for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: AHashMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the integer key the next pushed value receives.
    #[inline]
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    /// Returns the position of the key's entry if any.
    fn position_of(&self, key: &Key) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns a shared reference to the value of the key if any.
    #[inline]
    pub fn get<K>(&self, key: K) -> Option<&T>
    where
        K: Into<Key>,
    {
        self.position_of(&key.into())
            .map(|position| &self.entries[position].value)
    }

    /// Returns an exclusive reference to the value of the key if any.
    #[inline]
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut T>
    where
        K: Into<Key>,
    {
        let position = self.position_of(&key.into())?;
        Some(&mut self.entries[position].value)
    }

    /// Returns the value of the key or `default` if the key is missing.
    #[inline]
    pub fn get_or<'a, K>(&'a self, key: K, default: &'a T) -> &'a T
    where
        K: Into<Key>,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the key is present.
    #[inline]
    pub fn exists<K>(&self, key: K) -> bool
    where
        K: Into<Key>,
    {
        self.positions.contains_key(&key.into())
    }

    /// Returns the first entry if any.
    #[inline]
    pub fn first(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Returns the last entry if any.
    #[inline]
    pub fn last(&self) -> Option<&Entry<T>> {
        self.entries.last()
    }

    /// Returns all entries in their current order.
    #[inline]
    pub fn all(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Advances the next free integer key past `key` if necessary.
    fn observe_key(&mut self, key: &Key) {
        if let Key::Index(index) = key {
            if *index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
    }

    /// Inserts the value for the key and returns the old value if any.
    ///
    /// An existing entry keeps its position, a new entry is appended.
    pub fn insert<K>(&mut self, key: K, value: T) -> Option<T>
    where
        K: Into<Key>,
    {
        let key = key.into();
        if let Some(position) = self.position_of(&key) {
            return Some(core::mem::replace(&mut self.entries[position].value, value))
        }
        self.observe_key(&key);
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { key, value });
        None
    }

    /// Sets the value of the key, overwriting an existing value in place.
    #[inline]
    pub fn set<K>(&mut self, key: K, value: T) -> &mut Self
    where
        K: Into<Key>,
    {
        self.insert(key, value);
        self
    }

    /// Appends the value with the next free integer key.
    ///
    /// # Errors
    ///
    /// If the next free integer key saturated at `i64::MAX` and is occupied.
    pub fn try_push(&mut self, value: T) -> Result<&mut Self, Error> {
        let index = self.next_index;
        if self.exists(index) {
            return Err(Error::KeySpaceExhausted)
        }
        self.insert(index, value);
        Ok(self)
    }

    /// Appends the value with the next free integer key.
    ///
    /// # Panics
    ///
    /// If the next free integer key saturated at `i64::MAX` and is occupied.
    pub fn push(&mut self, value: T) -> &mut Self {
        let len = self.len();
        self.try_push(value).unwrap_or_else(|error| {
            panic!(
                "cannot push onto a keyed collection of {} entries: {}",
                len, error
            )
        })
    }

    /// Removes and returns the last value if any.
    pub fn pop(&mut self) -> Option<T> {
        let Entry { key, value } = self.entries.pop()?;
        self.positions.remove(&key);
        if let Key::Index(index) = key {
            if index.checked_add(1) == Some(self.next_index) {
                self.next_index = index;
            }
        }
        Some(value)
    }

    /// Removes and returns the first value if any.
    ///
    /// Renumbers the remaining integer keys.
    pub fn shift(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None
        }
        let Entry { value, .. } = self.entries.remove(0);
        self.renumber();
        Some(value)
    }

    /// Prepends the value with integer key `0` and renumbers the other integer keys.
    pub fn unshift(&mut self, value: T) -> &mut Self {
        self.entries.insert(
            0,
            Entry {
                key: Key::Index(0),
                value,
            },
        );
        self.renumber();
        self
    }

    /// Assigns the integer keys `0..n` in order and rebuilds the positions.
    fn renumber(&mut self) {
        let mut next = 0;
        self.positions.clear();
        for (position, entry) in self.entries.iter_mut().enumerate() {
            if entry.key.is_index() {
                entry.key = Key::Index(next);
                next += 1;
            }
            self.positions.insert(entry.key.clone(), position);
        }
        self.next_index = next;
    }

    /// Removes the entry of the key and returns its value if any.
    ///
    /// Does not renumber integer keys.
    pub fn take<K>(&mut self, key: K) -> Option<T>
    where
        K: Into<Key>,
    {
        let position = self.positions.remove(&key.into())?;
        let Entry { value, .. } = self.entries.remove(position);
        for entry in &self.entries[position..] {
            if let Some(moved) = self.positions.get_mut(&entry.key) {
                *moved -= 1;
            }
        }
        Some(value)
    }

    /// Removes the entry of the key if present.
    #[inline]
    pub fn remove<K>(&mut self, key: K) -> &mut Self
    where
        K: Into<Key>,
    {
        self.take(key);
        self
    }

    /// Removes all entries and resets the next free integer key.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self.positions.clear();
        self.next_index = 0;
        self
    }

    /// Returns an iterator yielding the key and value pairs in order.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.entries)
    }

    /// Returns an iterator yielding keys with exclusive value references in order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut::new(&mut self.entries)
    }

    /// Returns an iterator over the keys in order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.iter().map(Entry::key)
    }

    /// Returns an iterator over the values in order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter().map(Entry::value)
    }
}

impl<T> Collection for KeyedCollection<T> {
    type Item = T;

    fn get<K>(&self, key: K) -> Option<&T>
    where
        K: Into<Key>,
    {
        KeyedCollection::get(self, key)
    }

    fn set<K>(&mut self, key: K, value: T) -> &mut Self
    where
        K: Into<Key>,
    {
        KeyedCollection::set(self, key, value)
    }

    fn push(&mut self, value: T) -> &mut Self {
        KeyedCollection::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        KeyedCollection::pop(self)
    }

    fn shift(&mut self) -> Option<T> {
        KeyedCollection::shift(self)
    }

    fn unshift(&mut self, value: T) -> &mut Self {
        KeyedCollection::unshift(self, value)
    }

    fn remove<K>(&mut self, key: K) -> &mut Self
    where
        K: Into<Key>,
    {
        KeyedCollection::remove(self, key)
    }

    fn exists<K>(&self, key: K) -> bool
    where
        K: Into<Key>,
    {
        KeyedCollection::exists(self, key)
    }

    fn all(&self) -> &[Entry<T>] {
        KeyedCollection::all(self)
    }

    fn clear(&mut self) -> &mut Self {
        KeyedCollection::clear(self)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn iter(&self) -> Iter<T> {
        KeyedCollection::iter(self)
    }
}

impl<T> fmt::Debug for KeyedCollection<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for KeyedCollection<T>
where
    T: PartialEq,
{
    /// Two collections are equal if they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T> FromIterator<T> for KeyedCollection<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T> Extend<T> for KeyedCollection<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for KeyedCollection<T> {
    type Item = (Key, T);
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

impl<'a, T> IntoIterator for &'a KeyedCollection<T> {
    type Item = (&'a Key, &'a T);
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut KeyedCollection<T> {
    type Item = (&'a Key, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, K> ops::Index<K> for KeyedCollection<T>
where
    K: Into<Key>,
{
    type Output = T;

    /// Returns a shared reference to the value of the key.
    ///
    /// # Panics
    ///
    /// If the key is missing.
    #[inline]
    fn index(&self, key: K) -> &Self::Output {
        self.get(key).expect("encountered missing key")
    }
}

impl<T, K> ops::IndexMut<K> for KeyedCollection<T>
where
    K: Into<Key>,
{
    /// Returns an exclusive reference to the value of the key.
    ///
    /// # Panics
    ///
    /// If the key is missing.
    #[inline]
    fn index_mut(&mut self, key: K) -> &mut Self::Output {
        self.get_mut(key).expect("encountered missing key")
    }
}
