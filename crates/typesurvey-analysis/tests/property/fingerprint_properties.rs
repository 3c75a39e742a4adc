use proptest::prelude::*;
use typesurvey_analysis::fingerprint;
use typesurvey_core::types::StyleSnapshot;

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z-]{1,12}", "[a-z0-9(), ]{0,16}", 0..11)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn permutation_does_not_change_fingerprint(pairs in pairs(), seed in any::<u64>()) {
        let forward: StyleSnapshot = pairs.iter().cloned().collect();

        let mut shuffled = pairs.clone();
        let len = shuffled.len();
        if len > 1 {
            // deterministic Fisher-Yates driven by the seed
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                shuffled.swap(i, j);
            }
        }
        let permuted: StyleSnapshot = shuffled.into_iter().collect();

        prop_assert_eq!(fingerprint(&forward), fingerprint(&permuted));
    }

    #[test]
    fn fingerprint_lists_sorted_pairs(pairs in pairs()) {
        let style: StyleSnapshot = pairs.iter().cloned().collect();
        let expected = pairs
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(";");

        // `pairs` comes out of a BTreeMap, so it is already in key order.
        let actual = fingerprint(&style);
        prop_assert_eq!(actual.as_str(), expected.as_str());
    }

    #[test]
    fn equal_fingerprints_mean_equal_styles(a in pairs(), b in pairs()) {
        let a: StyleSnapshot = a.into_iter().collect();
        let b: StyleSnapshot = b.into_iter().collect();
        if fingerprint(&a) == fingerprint(&b) {
            prop_assert_eq!(a, b);
        }
    }
}
