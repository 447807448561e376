// ForwardList property tests.
//
// Model: std VecDeque, with a model index standing in for the cursor position.
//  - Invariant: contents and len match the model after every step.
//  - pop_front returns the most recent push_front.
//  - insert_after at a position places the value at index + 1 in the model, and the
//    cursor lands on it; erase_after removes index + 1.
use std::collections::VecDeque;

use containers::collections::linked::ForwardList;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_forward_list_matches_model(ops in proptest::collection::vec((0u8..=4u8, any::<i32>(), 0usize..32), 1..200)) {
        let mut list = ForwardList::new();
        let mut model = VecDeque::new();

        for (op, value, raw_pos) in ops {
            match op {
                0 => {
                    list.push_front(value);
                    model.push_front(value);
                    prop_assert_eq!(list.front(), Some(&value));
                }
                1 => {
                    prop_assert_eq!(list.pop_front(), model.pop_front());
                }
                // Insert after a position: 0 is the sentinel, i is the i-th element.
                2 => {
                    let pos = raw_pos % (model.len() + 1);
                    let mut cursor = list.before_begin_mut();
                    for _ in 0..pos {
                        cursor.move_next();
                    }
                    cursor.insert_after(value);
                    prop_assert_eq!(cursor.current(), Some(&value));
                    model.insert(pos, value);
                }
                3 => {
                    let pos = raw_pos % (model.len() + 1);
                    let mut cursor = list.before_begin_mut();
                    for _ in 0..pos {
                        cursor.move_next();
                    }
                    if pos < model.len() {
                        prop_assert_eq!(cursor.erase_after(), model.remove(pos).unwrap());
                    } else {
                        prop_assert!(cursor.try_erase_after().is_err());
                    }
                }
                4 => {
                    let copy = list.clone();
                    prop_assert_eq!(&copy, &list);
                    list.clear();
                    model.clear();
                    list = copy.into_iter().collect();
                    model.extend(list.iter().copied());
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.iter().eq(model.iter()));
        }
    }
}
