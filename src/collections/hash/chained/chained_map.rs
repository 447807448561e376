use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{IdentityHash, InvalidBucketBits, Iter};
use crate::collections::contiguous::Array;
use crate::collections::linked::ForwardList;

/// The odd multiplier used to scatter keys between buckets, `2^32` divided by the golden ratio.
pub const MAGIC: u32 = 2654435769;

/// The bucket exponent used by [`ChainedMap::new`], giving 65536 buckets.
pub const DEFAULT_BUCKET_BITS: u32 = 16;

/// The largest bucket exponent accepted by [`ChainedMap::with_bits`].
pub const MAX_BUCKET_BITS: u32 = 24;

/// A map of integer keys to values, stored in a fixed number of buckets which are chained with
/// [`ForwardList`]s.
///
/// The number of buckets is chosen on construction and never changes: the map doesn't rehash, so
/// performance degrades towards `O(n)` as chains grow, or if every key lands in the same bucket.
/// Keys are placed with multiplicative hashing, taking the top `bits` of `key * MAGIC`.
///
/// Within a bucket, the most recently inserted key is first.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ChainedMap.
/// - `b`: The number of buckets.
/// - `c`: The length of the chain that the key belongs to.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(c)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `clear` | `O(n + b)` |
/// | `iter` | `O(n + b)` |
pub struct ChainedMap<K: IdentityHash, V> {
    pub(crate) buckets: Array<ForwardList<(K, V)>>,
    pub(crate) bits: u32,
    pub(crate) len: usize,
}

impl<K: IdentityHash, V> ChainedMap<K, V> {
    /// Creates a new ChainedMap with `2^DEFAULT_BUCKET_BITS` empty buckets.
    pub fn new() -> ChainedMap<K, V> {
        ChainedMap::with_valid_bits(DEFAULT_BUCKET_BITS)
    }

    /// Creates a new ChainedMap with `2^bits` empty buckets, returning an [`Err`] if `bits` isn't
    /// in `1..=MAX_BUCKET_BITS`.
    pub fn with_bits(bits: u32) -> Result<ChainedMap<K, V>, InvalidBucketBits> {
        match bits {
            1..=MAX_BUCKET_BITS => Ok(ChainedMap::with_valid_bits(bits)),
            _ => Err(InvalidBucketBits { bits }),
        }
    }

    fn with_valid_bits(bits: u32) -> ChainedMap<K, V> {
        ChainedMap {
            buckets: Array::repeat_with(ForwardList::new, 1 << bits),
            bits,
            len: 0,
        }
    }

    /// Returns the number of entries in the ChainedMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ChainedMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets, which is fixed for the lifetime of the map.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the index of the bucket that `key` belongs to. Always the same for a given key and
    /// bucket count.
    pub fn bucket_index(&self, key: &K) -> usize {
        (key.identity_hash().wrapping_mul(MAGIC) >> (u32::BITS - self.bits)) as usize
    }

    /// Associates `value` with `key`, returning the previous value if the key was already
    /// present. An existing entry is updated in place, otherwise the new entry goes to the front
    /// of its bucket.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some((_, existing)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(mem::replace(existing, value));
        }

        bucket.push_front((key, value));
        self.len += 1;
        None
    }

    /// Returns a reference to the value associated with `key`, if there is one.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with `key`, if there is one.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if the ChainedMap contains an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value. Returns [`None`] if there was no entry,
    /// leaving the map unchanged.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let mut cursor = self.buckets[index].before_begin_mut();

        // Keep the cursor one behind, so that the matching entry can be erased after it.
        while let Some((k, _)) = cursor.peek_next() {
            if k == key {
                let (_, value) = cursor.erase_after();
                self.len -= 1;
                return Some(value);
            }
            cursor.move_next();
        }

        None
    }

    /// Removes every entry, keeping the buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over the entries of the map, in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len,
        }
    }
}

impl<K: IdentityHash, V> Default for ChainedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IdentityHash, V> Extend<(K, V)> for ChainedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: IdentityHash, V> FromIterator<(K, V)> for ChainedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: IdentityHash + Debug, V: Debug> Debug for ChainedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
