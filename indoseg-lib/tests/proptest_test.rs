// Property tests: totality on arbitrary input, round trips on generated
// words, and normaliser idempotence.

use std::sync::LazyLock;

use indoseg_lib::{normalize, Engine};
use proptest::prelude::*;

static ENGINE: LazyLock<Engine> = LazyLock::new(Engine::new);

proptest! {
    #[test]
    fn segment_and_reconstruct_are_total(bytes in proptest::collection::vec(any::<u8>(), 0..=64)) {
        let input = String::from_utf8_lossy(&bytes);
        let segmented = ENGINE.segment(&input);
        let _ = ENGINE.reconstruct(&segmented);
        let _ = ENGINE.reconstruct(&input);
    }

    #[test]
    fn marker_soup_is_total(s in "[a-z~()\\-]{0,40}") {
        let _ = ENGINE.segment(&s);
        let _ = ENGINE.reconstruct(&s);
        let _ = ENGINE.parse(&s);
    }

    #[test]
    fn generated_words_round_trip(w in "[a-z]{1,10}") {
        // Reserved marker tokens cannot round-trip: a bare `ulg` passes
        // through segmentation, and reconstruction reads it as a marker
        // over an empty root.
        prop_assume!(w != "ulg" && w != "rp");
        let segmented = ENGINE.segment(&w);
        prop_assert_eq!(ENGINE.reconstruct(&segmented), w);
    }

    #[test]
    fn generated_reduplications_round_trip(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
        let w = format!("{a}-{b}");
        let segmented = ENGINE.segment(&w);
        prop_assert_eq!(ENGINE.reconstruct(&segmented), w);
    }

    #[test]
    fn full_reduplication_of_roots_round_trips(i in 0usize..10_000) {
        let mut roots: Vec<&String> = ENGINE.dictionary().words.iter().collect();
        roots.sort();
        let root = roots[i % roots.len()];
        let w = format!("{root}-{root}");
        prop_assert_eq!(ENGINE.reconstruct(&ENGINE.segment(&w)), w);
    }

    #[test]
    fn normalize_is_idempotent(s in "[a-zA-Z .,?!:;\\-]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
