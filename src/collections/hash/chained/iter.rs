use std::iter::FusedIterator;
use std::slice;

use super::{ChainedMap, IdentityHash};
use crate::collections::linked::ForwardList;
use crate::collections::linked::forward_list::Iter as ChainIter;

impl<'a, K: IdentityHash, V> IntoIterator for &'a ChainedMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`ChainedMap`]. See [`ChainedMap::iter`].
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, ForwardList<(K, V)>>,
    // The chain of the bucket currently being walked, None before the first bucket.
    pub(crate) chain: Option<ChainIter<'a, (K, V)>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        loop {
            if let Some((key, value)) = self.chain.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some((key, value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            len: self.len,
        }
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
