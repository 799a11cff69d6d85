use std::collections::BTreeSet;
use std::collections::HashSet;
use std::collections::VecDeque;

use kind_map::CollectionKind;
use kind_map::MapExt;
use kind_map::kinds::CUSTOM_SET;
use kind_map::kinds::CustomSet;
use kind_map::kinds::DEQUE;
use kind_map::kinds::DefaultHashBuilder;
use kind_map::kinds::HASH_SET;
use kind_map::kinds::HashSetKind;
use kind_map::kinds::ORDERED_SET;
use kind_map::kinds::SEQUENCE;
use kind_map::kinds::SequenceKind;
use kind_map::map;
use kind_map::try_map;

fn hash_set<T: Eq + std::hash::Hash>(values: impl IntoIterator<Item = T>) -> HashSet<T, DefaultHashBuilder> {
    values.into_iter().collect()
}

#[derive(Debug, PartialEq, Eq)]
struct Odd(i32);

#[test]
fn sequence_keeps_order_and_duplicates() {
    let output = map(&SEQUENCE, &vec![1, 2, 3], |value| (value / 2).to_string());
    assert_eq!(output, vec!["0".to_string(), "1".to_string(), "1".to_string()]);
}

#[test]
fn hash_set_collapses_equal_outputs() {
    let output = map(&HASH_SET, &hash_set([1, 2, 3]), |value| (value / 2).to_string());
    assert_eq!(output, hash_set(["0".to_string(), "1".to_string()]));
    assert_eq!(output.len(), 2);
}

#[test]
fn custom_set_maps_into_custom_set() {
    let output = map(&CUSTOM_SET, &CustomSet::from([1, 2, 3]), |value| value / 2);
    assert_eq!(output, CustomSet::from([0, 1]));
    assert_eq!(output.iter().count(), 2);
}

#[test]
fn deque_and_ordered_set_follow_their_kind() {
    let deque = map(&DEQUE, &VecDeque::from([3, 1, 2]), |value| value * 10);
    assert_eq!(deque, VecDeque::from([30, 10, 20]));

    let sorted = map(&ORDERED_SET, &BTreeSet::from([5, 4, 3, 2]), |value| value % 3);
    assert_eq!(sorted.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn empty_input_gives_empty_output_of_same_kind() {
    let sequence: Vec<String> = map(&SEQUENCE, &Vec::<i32>::new(), ToString::to_string);
    assert!(sequence.is_empty());

    let set = map(&HASH_SET, &hash_set(Vec::<i32>::new()), |value| *value);
    assert!(set.is_empty());

    let custom = map(&CUSTOM_SET, &CustomSet::<u8>::new(), |value| u16::from(*value));
    assert_eq!(custom.iter().count(), 0);
}

#[test]
fn input_is_left_untouched() {
    let input = vec![4, 4, 5];
    let output = map(&SEQUENCE, &input, |value| value + 1);
    assert_eq!(input, vec![4, 4, 5]);
    assert_eq!(output, vec![5, 5, 6]);
}

#[test]
fn selector_runs_once_per_element_in_input_order() {
    let mut seen = Vec::new();
    let _ = map(&SEQUENCE, &vec!['a', 'b', 'c'], |value| {
        seen.push(*value);
        value.to_ascii_uppercase()
    });
    assert_eq!(seen, vec!['a', 'b', 'c']);
}

#[test]
fn failing_selector_aborts_without_output() {
    let mut calls = 0;
    let result: Result<Vec<i32>, Odd> = try_map(&SEQUENCE, &vec![2, 3, 4], |value| {
        calls += 1;
        if value % 2 == 0 { Ok(value / 2) } else { Err(Odd(*value)) }
    });
    assert_eq!(result, Err(Odd(3)));
    assert_eq!(calls, 2);
}

#[test]
fn try_map_succeeds_when_every_selector_call_does() {
    let result: Result<CustomSet<u8>, std::num::TryFromIntError> = try_map(&CUSTOM_SET, &CustomSet::from([1_u32, 2, 3]), |value| u8::try_from(*value));
    assert_eq!(result, Ok(CustomSet::from([1, 2, 3])));
}

#[test]
fn method_form_matches_free_function() {
    let input = vec![1, 2, 3];
    assert_eq!(input.map_with(&SEQUENCE, |value| value * 2), map(&SEQUENCE, &input, |value| value * 2));

    let parsed: Result<Vec<i32>, std::num::ParseIntError> = vec!["1", "x"].try_map_with(&SEQUENCE, |value| value.parse());
    assert!(parsed.is_err());
}

#[test]
fn description_builds_containers_directly() {
    let mut names = SEQUENCE.make::<&str>();
    let Ok(()) = SEQUENCE.add(&mut names, "a");
    let Ok(()) = SEQUENCE.add(&mut names, "a");
    assert_eq!(names, vec!["a", "a"]);

    let Ok(set) = HASH_SET.collect(["a", "a", "b"]);
    assert_eq!(set.len(), 2);

    // Each call hands back an independent container.
    let mut first = CUSTOM_SET.make::<i32>();
    let second = CUSTOM_SET.make::<i32>();
    first.add(1);
    assert_eq!(second.iter().count(), 0);
}

#[test]
fn descriptions_carry_distinct_kind_ids() {
    assert_eq!(SEQUENCE.id(), SequenceKind::id());
    assert_eq!(HASH_SET.id(), HashSetKind::<DefaultHashBuilder>::id());
    assert_ne!(SEQUENCE.id(), DEQUE.id());
    assert_ne!(HASH_SET.id(), CUSTOM_SET.id());
    assert_eq!(SEQUENCE.name(), "sequence");
    assert_eq!(CUSTOM_SET.id().to_string(), "custom_set");
}

#[test]
fn custom_set_counts_without_walking() {
    let set = CustomSet::from([1, 2, 2, 3]);
    assert_eq!(kind_map::Iterable::count(&set), 3);

    let mut grown = CUSTOM_SET.make::<i32>();
    <kind_map::kinds::CustomSetKind as kind_map::Insert<i32>>::reserve_hint(&mut grown, 16);
    grown.add(7);
    assert_eq!(grown, CustomSet::from([7]));
}
