use super::{
    Entry,
    Key,
};
use core::{
    iter::FusedIterator,
    slice,
};

/// Iterator yielding shared references to the key and value pairs in order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    iter: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(entries: &'a [Entry<T>]) -> Self {
        Self {
            iter: entries.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a Key, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Entry::as_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Entry::as_pair)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Iterator yielding keys together with exclusive value references in order.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    iter: slice::IterMut<'a, Entry<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(entries: &'a mut [Entry<T>]) -> Self {
        Self {
            iter: entries.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (&'a Key, &'a mut T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Entry::as_pair_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Entry::as_pair_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// Iterator yielding the owned key and value pairs in order.
#[derive(Debug)]
pub struct IntoIter<T> {
    iter: std::vec::IntoIter<Entry<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(entries: Vec<Entry<T>>) -> Self {
        Self {
            iter: entries.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (Key, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Entry::into_parts)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Entry::into_parts)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
