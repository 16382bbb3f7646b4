// LinkedList property tests (public surface).
//
// Model: a plain Vec<i32> mirroring list order.
// Invariants after every op:
// - iteration order equals the model;
// - len/is_empty parity;
// - find_first/find_all agree with the model's positions;
// - pop_front/front/back agree with the model's ends, including
//   EmptyStructure errors on an empty list.

use dh_table::{Error, LinkedList};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopFront,
    RemoveFirst(i32),
    UpdateOne(i32, i32),
    UpdateAll(i32, i32),
    Find(i32),
    Peek,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    // A tiny value domain keeps duplicates frequent, which is what the
    // scan/update operations care about.
    let v = 0i32..8;
    let op = prop_oneof![
        v.clone().prop_map(Op::PushBack),
        v.clone().prop_map(Op::PushFront),
        Just(Op::PopFront),
        v.clone().prop_map(Op::RemoveFirst),
        (v.clone(), v.clone()).prop_map(|(a, b)| Op::UpdateOne(a, b)),
        (v.clone(), v.clone()).prop_map(|(a, b)| Op::UpdateAll(a, b)),
        v.prop_map(Op::Find),
        Just(Op::Peek),
    ];
    proptest::collection::vec(op, 1..100)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_list_matches_vec_model(ops in arb_ops()) {
        let mut sut: LinkedList<i32> = LinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push(v);
                }
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.insert(0, v);
                }
                Op::PopFront => {
                    if model.is_empty() {
                        prop_assert_eq!(sut.pop_front(), Err(Error::EmptyStructure));
                    } else {
                        prop_assert_eq!(sut.pop_front(), Ok(model.remove(0)));
                    }
                }
                Op::RemoveFirst(v) => {
                    if model.is_empty() {
                        prop_assert_eq!(sut.remove_first(&v), Err(Error::EmptyStructure));
                    } else {
                        prop_assert_eq!(sut.remove_first(&v), Ok(()));
                        if let Some(pos) = model.iter().position(|&x| x == v) {
                            model.remove(pos);
                        }
                    }
                }
                Op::UpdateOne(from, to) => {
                    if model.is_empty() {
                        prop_assert_eq!(sut.update_one(&from, to), Err(Error::EmptyStructure));
                    } else {
                        prop_assert_eq!(sut.update_one(&from, to), Ok(()));
                        if let Some(pos) = model.iter().position(|&x| x == from) {
                            model[pos] = to;
                        }
                    }
                }
                Op::UpdateAll(from, to) => {
                    if model.is_empty() {
                        prop_assert_eq!(sut.update_all(&from, &to), Err(Error::EmptyStructure));
                    } else {
                        let expected = model.iter().filter(|&&x| x == from).count();
                        prop_assert_eq!(sut.update_all(&from, &to), Ok(expected));
                        for x in model.iter_mut().filter(|x| **x == from) {
                            *x = to;
                        }
                    }
                }
                Op::Find(v) => {
                    let expected = model.iter().position(|&x| x == v);
                    prop_assert_eq!(sut.find_first(&v).map(|(i, _)| i), expected);

                    let expected_all: Vec<usize> = model
                        .iter()
                        .enumerate()
                        .filter(|(_, &x)| x == v)
                        .map(|(i, _)| i)
                        .collect();
                    let got_all: Vec<usize> =
                        sut.find_all(&v).into_iter().map(|(i, _)| i).collect();
                    prop_assert_eq!(got_all, expected_all);
                }
                Op::Peek => {
                    match (model.first(), model.last()) {
                        (Some(front), Some(back)) => {
                            prop_assert_eq!(sut.front(), Ok(front));
                            prop_assert_eq!(sut.back(), Ok(back));
                        }
                        _ => {
                            prop_assert_eq!(sut.front(), Err(Error::EmptyStructure));
                            prop_assert_eq!(sut.back(), Err(Error::EmptyStructure));
                        }
                    }
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            let order: Vec<i32> = sut.iter().copied().collect();
            prop_assert_eq!(order, model.clone());
        }
    }
}
