//! Model-based property tests: `ArrayList` against `Vec`

use arrlist::{ArrayList, INITIAL_CAPACITY, ListError};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    InsertAt(usize, Option<u8>),
    InsertFront(Option<u8>),
    InsertBack(Option<u8>),
    RemoveAt(usize),
    RemoveFront,
    RemoveBack,
    Get(usize),
    Clear,
}

/// Mostly present values, with the occasional absent one
fn value_strategy() -> impl Strategy<Value = Option<u8>> {
    proptest::option::weighted(0.9, any::<u8>())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..40usize, value_strategy()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        3 => value_strategy().prop_map(Op::InsertFront),
        6 => value_strategy().prop_map(Op::InsertBack),
        3 => (0..40usize).prop_map(Op::RemoveAt),
        2 => Just(Op::RemoveFront),
        2 => Just(Op::RemoveBack),
        3 => (0..40usize).prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

/// Expected result of an operation on the model, or the error it must raise
fn apply_model(model: &mut Vec<u8>, op: &Op) -> Result<Option<u8>, ListError> {
    let size = model.len();
    match *op {
        Op::InsertAt(i, _) if i > size => Err(ListError::out_of_range(i, size)),
        Op::InsertAt(_, None) | Op::InsertFront(None) | Op::InsertBack(None) => {
            Err(ListError::InvalidArgument)
        }
        Op::InsertAt(i, Some(v)) => {
            model.insert(i, v);
            Ok(None)
        }
        Op::InsertFront(Some(v)) => {
            model.insert(0, v);
            Ok(None)
        }
        Op::InsertBack(Some(v)) => {
            model.push(v);
            Ok(None)
        }
        Op::RemoveAt(i) | Op::Get(i) if i >= size => Err(ListError::out_of_range(i, size)),
        Op::RemoveAt(i) => Ok(Some(model.remove(i))),
        Op::RemoveFront | Op::RemoveBack if size == 0 => Err(ListError::EmptyContainer),
        Op::RemoveFront => Ok(Some(model.remove(0))),
        Op::RemoveBack => Ok(model.pop()),
        Op::Get(i) => Ok(Some(model[i])),
        Op::Clear => {
            model.clear();
            Ok(None)
        }
    }
}

fn apply_list(list: &mut ArrayList<u8>, op: &Op) -> Result<Option<u8>, ListError> {
    match *op {
        Op::InsertAt(i, v) => list.insert_at(i, v).map(|_| None),
        Op::InsertFront(v) => list.insert_front(v).map(|_| None),
        Op::InsertBack(v) => list.insert_back(v).map(|_| None),
        Op::RemoveAt(i) => list.remove_at(i).map(Some),
        Op::RemoveFront => list.remove_front().map(Some),
        Op::RemoveBack => list.remove_back().map(Some),
        Op::Get(i) => list.get(i).map(|v| Some(*v)),
        Op::Clear => {
            list.clear();
            Ok(None)
        }
    }
}

/// Smallest doubling of the initial capacity that has room for `len` elements
fn min_capacity_for(len: usize) -> usize {
    let mut capacity = INITIAL_CAPACITY;
    while capacity < len {
        capacity *= 2;
    }
    capacity
}

proptest! {
    #[test]
    fn list_matches_vec_model(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut list = ArrayList::new();
        let mut model = Vec::new();

        for op in &ops {
            let expected = apply_model(&mut model, op);
            let actual = apply_list(&mut list, op);
            prop_assert_eq!(&actual, &expected, "op {:?}", op);

            prop_assert_eq!(list.size(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert!(list.iter().copied().eq(model.iter().copied()));

            let slots = list.backing_array();
            prop_assert_eq!(slots.len(), list.capacity());
            prop_assert!(slots[..list.size()].iter().all(Option::is_some));
            prop_assert!(slots[list.size()..].iter().all(Option::is_none));
        }
    }

    #[test]
    fn back_inserts_grow_by_doubling(n in 0usize..200) {
        let list: ArrayList<usize> = (0..n).collect();
        prop_assert_eq!(list.capacity(), min_capacity_for(n));
        for i in 0..n {
            prop_assert_eq!(list.get(i), Ok(&i));
        }
    }

    #[test]
    fn insert_at_then_get_round_trips(len in 0usize..30, pick in 0usize..31, value in any::<u8>()) {
        let mut list: ArrayList<u8> = std::iter::repeat(0).take(len).collect();
        let index = pick % (len + 1);
        list.insert_at(index, value).unwrap();
        prop_assert_eq!(list.get(index), Ok(&value));
        prop_assert_eq!(list.size(), len + 1);
    }
}
