#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_put_get_remove() {
    let mut map = ChainedMap::new();
    assert_eq!(map.put(1, 100), None);
    assert_eq!(map.put(2, 200), None);

    assert_eq!(map.get(&1), Some(&100));
    assert_eq!(map.remove(&2), Some(200));
    assert_eq!(map.get(&2), None, "A removed key should be absent.");
    assert_eq!(map.remove(&2), None, "Removing an absent key is a no-op.");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_put_overwrites() {
    let mut map = ChainedMap::new();
    map.put(7, 'a');
    assert_eq!(map.put(7, 'b'), Some('a'), "The previous value should be returned.");
    assert_eq!(map.get(&7), Some(&'b'));
    assert_eq!(map.len(), 1, "Overwriting shouldn't add an entry.");

    *map.get_mut(&7).unwrap() = 'c';
    assert_eq!(map.get(&7), Some(&'c'));
    assert!(map.contains_key(&7));
    assert!(!map.contains_key(&8));
}

#[test]
fn test_negative_values_are_present() {
    let mut map = ChainedMap::new();
    map.put(-1, -1);
    map.put(i32::MIN, -1);

    assert_eq!(map.get(&-1), Some(&-1), "A stored -1 is distinct from an absent key.");
    assert_eq!(map.get(&i32::MIN), Some(&-1));
    assert_eq!(map.remove(&-1), Some(-1));
}

#[test]
fn test_bucket_index() {
    let map = ChainedMap::<u32, ()>::new();
    assert_eq!(map.bucket_count(), 65536);

    assert_eq!(map.bucket_index(&0), 0);
    assert_eq!(map.bucket_index(&1), (MAGIC >> 16) as usize);
    assert_eq!(map.bucket_index(&1), 0x9E37);
    assert_eq!(map.bucket_index(&12345), map.bucket_index(&12345), "bucket_index is pure.");

    for key in [0, 1, 2, 1000, u32::MAX] {
        assert!(map.bucket_index(&key) < map.bucket_count());
    }

    let signed = ChainedMap::<i32, ()>::new();
    assert_eq!(signed.bucket_index(&-1), map.bucket_index(&u32::MAX));
}

#[test]
fn test_with_bits() {
    let map = ChainedMap::<i32, i32>::with_bits(4).unwrap();
    assert_eq!(map.bucket_count(), 16);
    assert_eq!(map.bucket_index(&1), (MAGIC >> 28) as usize);

    assert_eq!(
        ChainedMap::<i32, i32>::with_bits(0).map(|map| map.bucket_count()),
        Err(InvalidBucketBits { bits: 0 })
    );
    assert_eq!(
        ChainedMap::<i32, i32>::with_bits(MAX_BUCKET_BITS + 1).map(|map| map.len()),
        Err(InvalidBucketBits { bits: 25 })
    );
}

#[test]
fn test_collisions() {
    // With a single bit, every key lands in one of two chains.
    let mut map = ChainedMap::with_bits(1).unwrap();
    for key in 0..100 {
        map.put(key, key * 2);
    }
    assert_eq!(map.len(), 100);

    for key in (0..100).step_by(3) {
        assert_eq!(map.remove(&key), Some(key * 2));
    }
    for key in 0..100 {
        let expected = (key % 3 != 0).then_some(key * 2);
        assert_eq!(map.get(&key).copied(), expected);
    }
    assert_eq!(map.len(), 66);
}

#[test]
fn test_newest_first_in_bucket() {
    let mut map: ChainedMap<i32, &str> = ChainedMap::with_bits(1).unwrap();
    let a = 0;
    let b = (0..).find(|k| *k != a && map.bucket_index(k) == map.bucket_index(&a)).unwrap();
    map.put(a, "a");
    map.put(b, "b");

    let bucket = &map.buckets[map.bucket_index(&a)];
    assert_eq!(bucket.front(), Some(&(b, "b")), "New keys are prepended to their chain.");
}

#[test]
fn test_iter_and_clear() {
    let mut map: ChainedMap<i32, i32> = (0..50).map(|k| (k, -k)).collect();
    assert_eq!(map.iter().len(), 50);

    let mut sum = 0;
    for (key, value) in &map {
        assert_eq!(*value, -*key);
        sum += key;
    }
    assert_eq!(sum, (0..50).sum::<i32>());

    let counter = CountedDrop::new();
    let mut counted = ChainedMap::with_bits(3).unwrap();
    for key in 0..10u8 {
        counted.put(key, counter.clone());
    }
    counted.clear();
    assert_eq!(counter.drops(), 10, "Clearing should drop every value.");
    assert!(counted.is_empty());
    assert_eq!(counted.bucket_count(), 8, "Clearing keeps the buckets.");

    map.clear();
    assert_eq!(map.iter().next(), None);
}

#[test]
fn test_debug() {
    let mut map = ChainedMap::with_bits(2).unwrap();
    map.put(1u8, 'x');
    assert_eq!(format!("{map:?}"), "{1: 'x'}");
}
