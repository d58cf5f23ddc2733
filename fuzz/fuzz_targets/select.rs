#![no_main]

use std::collections::{BTreeMap, BTreeSet};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<(u8, u16)>, Vec<u8>)| {
    let (pairs, wanted) = input;
    let map: BTreeMap<u8, u16> = pairs.into_iter().collect();
    let selected = mapkit::select(&map, &wanted);

    let distinct: BTreeSet<u8> = wanted.iter().copied().collect();
    let expected = distinct.iter().filter(|k| map.contains_key(*k)).count();
    assert_eq!(expected, selected.len());
    for (k, v) in &selected {
        assert!(distinct.contains(k));
        assert_eq!(Some(v), map.get(k));
    }
});
