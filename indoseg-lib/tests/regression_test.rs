// Regression tests: known segmentations in both directions, and the forward
// allomorph cases.

use indoseg_lib::reconstruct::apply_prefix;
use indoseg_lib::{Config, Dictionary, Engine, RedupMarker, Strategy};

fn engine() -> Engine {
    Engine::new()
}

fn engine_with_dictionary_stops() -> Engine {
    let mut config = Config::default();
    config.features.dictionary_stops = true;
    Engine::builder().config(config).build()
}

/// The packaged dictionary plus extra roots.
fn engine_with_roots(roots: &[&str], dictionary_stops: bool) -> Engine {
    let mut dictionary = Dictionary::new();
    dictionary.words.extend(roots.iter().map(|r| r.to_string()));
    let mut config = Config::default();
    config.features.dictionary_stops = dictionary_stops;
    Engine::builder().dictionary(dictionary).config(config).build()
}

/// (word, segmentation) pairs that must hold in both directions.
const SCENARIOS: &[(&str, &str)] = &[
    ("makanan", "makan~an"),
    ("dibaca", "di~baca"),
    ("memukul", "meN~pukul"),
    ("mengupas", "meN~kupas"),
    ("keberhasilan", "ke~ber~hasil~an"),
    ("mempertaruhkan", "meN~per~taruh~kan"),
    ("rumah-rumah", "rumah~ulg"),
    ("mobil-mobilan", "mobil~ulg~an"),
    ("bermain-main", "ber~main~ulg"),
    ("buku-bukunya", "buku~ulg~nya"),
    ("bukunyalah", "buku~nya~lah"),
    ("sayur-mayur", "sayur~rs(~mayur)"),
    ("lelaki", "laki~rp"),
];

#[test]
fn scenarios_segment() {
    let e = engine();
    for &(word, expected) in SCENARIOS {
        assert_eq!(e.segment(word), expected, "segment({word})");
    }
}

#[test]
fn scenarios_reconstruct() {
    let e = engine();
    for &(word, segmented) in SCENARIOS {
        assert_eq!(e.reconstruct(segmented), word, "reconstruct({segmented})");
    }
}

#[test]
fn forward_morphophonemics() {
    let e = engine();
    let cases = [
        ("meN", "pukul", "memukul"),
        ("meN", "tulis", "menulis"),
        ("meN", "sapu", "menyapu"),
        ("meN", "bom", "mengebom"),
        ("meN", "las", "melas"),
        ("ber", "ajar", "belajar"),
    ];
    for (prefix, root, expected) in cases {
        let word = apply_prefix(prefix, root, root, None, e.rules(), e.dictionary());
        assert_eq!(word, expected, "{prefix} + {root}");
        assert_eq!(e.reconstruct(&format!("{prefix}~{root}")), expected);
    }
}

#[test]
fn confixes_and_chained_prefixes() {
    let e = engine();
    assert_eq!(e.reconstruct("peN~bangun~an"), "pembangunan");
    assert_eq!(e.reconstruct("meN~per~juang~kan"), "memperjuangkan");
    assert_eq!(e.segment("pembangunan"), "peN~bangun~an");
    assert_eq!(e.segment("memperjuangkan"), "meN~per~juang~kan");
}

#[test]
fn nasal_over_per_keeps_p() {
    let e = engine();
    // {meN-} never elides the {p} of {per-}; {peN-} does.
    assert_eq!(e.reconstruct("meN~per~satu"), "mempersatu");
    assert_eq!(e.reconstruct("peN~per~satu"), "pemersatu");
    assert_eq!(e.segment("pemersatu"), "peN~per~satu");
}

#[test]
fn exact_root_allomorphs() {
    let e = engine();
    assert_eq!(e.segment("belajar"), "ber~ajar");
    assert_eq!(e.segment("bekerja"), "ber~kerja");
    assert_eq!(e.segment("berenang"), "ber~renang");
    assert_eq!(e.segment("terasa"), "ter~rasa");
    // The whitelist is checked against the root, not the suffixed base.
    assert_eq!(e.reconstruct("ber~ajar~lah"), "belajarlah");
}

#[test]
fn elided_velar_before_inner_prefix() {
    let e = engine();
    assert_eq!(e.segment("mengetahui"), "meN~ke~tahu~i");
    assert_eq!(e.reconstruct("meN~ke~tahu~i"), "mengetahui");
}

#[test]
fn suffix_first_strategy() {
    let e = engine_with_dictionary_stops();
    let a = e.analyse("teruskan").unwrap();
    assert_eq!(a.root, "terus");
    assert_eq!(a.strategy, Strategy::SuffixFirst);
    assert_eq!(e.segment("teruskan"), "terus~kan");
}

#[test]
fn root_with_suffix_like_ending_is_kept() {
    let e = engine_with_dictionary_stops();
    assert_eq!(e.segment("pakaian"), "pakai~an");
    assert_eq!(e.segment("sekolah"), "sekolah");
}

#[test]
fn stripping_runs_through_roots_by_default() {
    let e = engine();
    // {teruskan}: S1 leaves {uskan}, S2 leaves {us}.
    assert!(e.analyse("teruskan").is_none());
    assert_eq!(e.segment("teruskan"), "teruskan");
    // {pakaian}: peeling continues past {pakai} down to {paka}.
    assert_eq!(e.segment("pakaian"), "pakaian");
    assert_eq!(e.segment("sekolah"), "sekolah");
    assert_eq!(e.reconstruct("terus~kan"), "teruskan");
    assert_eq!(e.reconstruct("pakai~an"), "pakaian");
}

#[test]
fn hyphenated_root_is_affixed_as_one_token() {
    let e = engine_with_roots(&["anti-narkoba"], false);
    for (word, segmented) in [
        ("dianti-narkoba", "di~anti-narkoba"),
        ("anti-narkobanya", "anti-narkoba~nya"),
    ] {
        assert_eq!(e.segment(word), segmented);
        assert_eq!(e.reconstruct(segmented), word);
    }
    assert_eq!(e.segment("anti-narkoba"), "anti-narkoba");
}

#[test]
fn hyphenated_root_ending_in_suffix_needs_dictionary_stops() {
    let words = [
        ("dianti-korupsi", "di~anti-korupsi"),
        ("anti-korupsinya", "anti-korupsi~nya"),
    ];

    // The final {i} of {korupsi} is peeled, so no strategy reaches a root.
    let e = engine_with_roots(&["anti-korupsi"], false);
    for (word, _) in words {
        assert_eq!(e.segment(word), word);
    }

    let e = engine_with_roots(&["anti-korupsi"], true);
    for (word, segmented) in words {
        assert_eq!(e.segment(word), segmented);
        assert_eq!(e.reconstruct(segmented), word);
    }
}

#[test]
fn phonetic_pairs_and_dwipurwa() {
    let e = engine();
    assert_eq!(e.segment("lauk-pauk"), "lauk~rs(~pauk)");
    assert_eq!(e.segment("bolak-balik"), "bolak~rs(~balik)");
    assert_eq!(e.segment("sesama"), "sama~rp");
    assert_eq!(e.segment("tetamu"), "tamu~rp");

    let a = e.analyse("sayur-mayur").unwrap();
    assert_eq!(
        a.redup,
        Some(RedupMarker::Rs {
            variant: "mayur".to_string()
        })
    );
}

#[test]
fn unknown_words_pass_through() {
    let e = engine();
    assert_eq!(e.segment("anti-korupsi"), "anti-korupsi");
    assert_eq!(e.segment("Xyzzy!"), "xyzzy");
    assert_eq!(e.reconstruct("xyzzy"), "xyzzy");
}

#[test]
fn normalisation_before_segmentation() {
    let e = engine();
    assert_eq!(e.segment("  Makanan. "), "makan~an");
    assert_eq!(e.segment("DIBACA?"), "di~baca");
}
