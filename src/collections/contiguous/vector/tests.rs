#![cfg(test)]

use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::mem;
use std::rc::Rc;

use super::*;
use crate::util::alloc::{CountedDrop, PanicOnClone, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_back_growth() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();

    for i in 0..9 {
        vec.push_back(i);
        assert_eq!(vec.last(), Some(&i), "The pushed value should be last.");
        assert!(vec.cap() >= vec.len());
        caps.push_back(vec.cap());
    }

    assert_eq!(
        *caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should start at 1 and double whenever it runs out."
    );
}

#[test]
fn test_insert_and_erase() {
    let mut vec = Vector::new();
    vec.push_back(1);
    vec.push_back(2);

    assert_eq!(vec.insert(1, 9), 1);
    assert_eq!(*vec, [1, 9, 2]);
    assert_eq!(vec.cap(), 4, "A full Vector should double when inserting in the middle.");

    assert_eq!(vec.erase(1), 9);
    assert_eq!(*vec, [1, 2]);

    assert_eq!(vec.insert(2, 3), 2, "Inserting at the end should append.");
    assert_eq!(vec.insert(0, 0), 0);
    assert_eq!(*vec, [0, 1, 2, 3]);
    assert_eq!(vec.cap(), 4, "Inserting with spare capacity shouldn't reallocate.");

    assert_eq!(vec.erase(3), 3);
    assert_eq!(vec.erase(0), 0);
    assert_eq!(*vec, [1, 2]);
    assert_eq!(vec.cap(), 4, "Erasing should never shrink the capacity.");
}

#[test]
fn test_out_of_bounds() {
    let mut vec = Vector::from([1, 2, 3]);

    assert_eq!(vec.at(2), Ok(&3));
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_insert(5, 0), Err(IndexOutOfBounds { index: 5, len: 3 }));
    assert_eq!(vec.try_erase(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(*vec, [1, 2, 3], "Failed operations shouldn't change the Vector.");

    *vec.at_mut(0).unwrap() = 10;
    assert_eq!(vec[0], 10);

    assert_panics!({ vec.insert(4, 0); });
    assert_panics!({ vec.erase(3); });
    assert_panics!({ vec[3]; });
}

#[test]
fn test_reserve() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.cap(), 3);

    vec.reserve(2);
    assert_eq!(vec.cap(), 3, "Reserving less than the capacity is a no-op.");

    vec.reserve(10);
    assert_eq!(vec.cap(), 10, "Reserving more sets the capacity exactly.");
    assert_eq!(*vec, [1, 2, 3], "Reserving shouldn't change the contents.");

    let mut reserved: Vector<u8> = Vector::with_cap(4);
    for i in 0..4 {
        reserved.push_back(i);
    }
    assert_eq!(reserved.cap(), 4);
}

#[test]
fn test_resize() {
    let mut vec: Vector<u32> = Vector::with_len(2);
    assert_eq!(*vec, [0, 0]);
    assert_eq!(vec.cap(), 2);

    vec[1] = 7;
    vec.resize(3);
    assert_eq!(*vec, [0, 7, 0]);
    assert_eq!(vec.cap(), 4, "Growing past capacity should at least double it.");

    vec.resize(4);
    assert_eq!(vec.cap(), 4, "Growing within capacity fills in place.");

    vec.resize(9);
    assert_eq!(vec.cap(), 9, "A large resize allocates exactly what is needed.");
    assert_eq!(vec.len(), 9);

    vec.resize(1);
    assert_eq!(*vec, [0]);
    assert_eq!(vec.cap(), 9, "Truncating keeps the capacity.");

    let counter = CountedDrop::new();
    let mut vec = Vector::from_elem(counter.clone(), 5);
    let before = counter.drops();
    vec.resize(2);
    assert_eq!(counter.drops() - before, 3, "Truncated elements should be dropped.");
    vec.clear();
    assert_eq!(counter.drops() - before, 5);
    assert_eq!(vec.cap(), 5, "Clearing keeps the capacity.");
}

#[test]
fn test_pop_back() {
    let mut vec = Vector::from([1, 2]);
    assert_eq!(vec.pop_back(), Some(2));
    assert_eq!(vec.pop_back(), Some(1));
    assert_eq!(vec.pop_back(), None);
    assert_eq!(vec.cap(), 2);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push_back(counter.clone());
    }
    drop(vec.erase(4));
    assert_eq!(counter.drops(), 1);

    drop(vec);
    assert_eq!(counter.drops(), 10, "Dropping a Vector should drop every element once.");
}

#[test]
fn test_move_leaves_empty() {
    let mut vec = Vector::from([1, 2, 3]);
    let taken = mem::take(&mut vec);

    assert_eq!(*taken, [1, 2, 3]);
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 0, "A moved-from Vector should own no buffer.");

    vec.push_back(4);
    assert_eq!(*vec, [4], "A moved-from Vector should still be usable.");
}

#[test]
fn test_comparison_and_hash() {
    let a = Vector::from([1, 2, 3]);
    let mut b = Vector::with_cap(10);
    b.extend([1, 2, 3]);

    assert_eq!(a, b, "Capacity shouldn't affect equality.");
    assert!(Vector::from([1, 2]) < a, "A prefix should order first.");
    assert!(Vector::from([1, 3]) > a);
    assert!(Vector::<i32>::new() < a);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
    assert_eq!(state.hash_one(&a), state.hash_one([1, 2, 3].as_slice()));
}

#[test]
fn test_clone_is_all_or_nothing() {
    let budget = Rc::new(Cell::new(usize::MAX));
    let drops = CountedDrop::new();
    let vec = Vector::from_elem(PanicOnClone::new(&budget, &drops), 4);
    let alive = drops.alive();

    budget.set(2);
    assert_panics!({ vec.clone(); });
    assert_eq!(vec.len(), 4);
    assert_eq!(drops.alive(), alive, "The partial clone should have been dropped.");

    budget.set(4);
    let copy = vec.clone();
    assert_eq!(copy.len(), 4);
    assert_eq!(copy.cap(), 4);
}

#[test]
fn test_iterators() {
    let mut vec: Vector<_> = (0..5).collect();
    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*vec, [0, 2, 4, 6, 8]);

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.len(), 3);

    let counter = CountedDrop::new();
    let vec = Vector::from_elem(counter.clone(), 6);
    let before = counter.drops();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops() - before, 6, "Dropping an owned iterator drops what's left.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push_back(ZeroSizedType);
    }
    vec.insert(50, ZeroSizedType);
    assert_eq!(vec.len(), 101);
    assert_eq!(vec.erase(3), ZeroSizedType);
    assert_eq!(vec.into_iter().count(), 100);
}

#[test]
fn test_display() {
    assert_eq!(Vector::from([1, 9, 2]).to_string(), "[1, 9, 2]");
    assert_eq!(Vector::<u8>::new().to_string(), "[]");
}
