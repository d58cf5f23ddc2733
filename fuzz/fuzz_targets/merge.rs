#![no_main]

use std::collections::{BTreeMap, HashMap};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    base: Option<Vec<(u8, u16)>>,
    overlays: Vec<Option<Vec<(u8, u16)>>>,
}

fn to_map(pairs: &Option<Vec<(u8, u16)>>) -> Option<HashMap<u8, u16>> {
    pairs.as_ref().map(|pairs| pairs.iter().copied().collect())
}

fuzz_target!(|input: Input| {
    let base = to_map(&input.base);
    let overlays: Vec<_> = input.overlays.iter().map(to_map).collect();

    // Naive model: replay every pair in order into an ordered map.
    let mut model = BTreeMap::new();
    for pairs in std::iter::once(&input.base).chain(&input.overlays).flatten() {
        for (k, v) in pairs {
            model.insert(*k, *v);
        }
    }

    let merged = mapkit::merge(&base, &overlays);
    assert_eq!(model.len(), mapkit::len(&merged));
    assert!(mapkit::equal(&merged, &model));
    assert!(mapkit::keys_match(&model, &merged));
    if overlays.is_empty() {
        assert!(mapkit::equal(&merged, &mapkit::copy(&base)));
    }
});
