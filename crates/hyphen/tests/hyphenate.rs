//! End-to-end behavior against the dictionaries in `tests/data`.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use hyphen::{HyphenError, HyphenOptions, Hyphenator, Mode, Output, PatternDictionary, hyphenate};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn dictionary(name: &str) -> Arc<PatternDictionary> {
    Arc::new(PatternDictionary::load(data_path(name)).unwrap())
}

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

#[test]
fn loads_test_dictionaries() {
    let en = dictionary("hyph_en_test.dic");
    assert!(en.is_utf8());
    assert_eq!(en.main_level().len(), 11);
    assert_eq!(en.margins().rmin, 3);

    let de = dictionary("hyph_de_test.dic");
    assert!(!de.is_utf8());
    assert_eq!(de.main_level().len(), 3);

    let nl = dictionary("hyph_nl_test.dic");
    assert!(nl.has_explicit_compound_level());
    assert_eq!(nl.margins().compound_rmin, 3);
}

#[test]
fn single_standard_break() {
    let dict = dictionary("hyph_en_test.dic");
    let h = hyphenate(&dict, "beauty", &HyphenOptions::default()).unwrap();
    assert_eq!(h.positions(), vec![4]);
    assert!(h.replacements().is_empty());
    assert_eq!(h.inline(), "beau=ty");
}

#[test]
fn replacement_break_in_latin1_dictionary() {
    let dict = dictionary("hyph_de_test.dic");
    let h = hyphenate(&dict, "zucker", &HyphenOptions::default()).unwrap();
    assert_eq!(h.positions(), vec![3]);
    let sub = h.replacements().get(3).unwrap();
    assert_eq!((sub.pre.as_str(), sub.post.as_str()), ("k", "k"));
    assert_eq!(h.inline(), "zuk=ker");
    assert_eq!(h.pairs(), vec![pair("zuk", "ker")]);
}

#[test]
fn word_shorter_than_every_pattern() {
    let dict = dictionary("hyph_en_test.dic");
    assert_eq!(dict.min_pattern_len(), 2);
    let h = hyphenate(&dict, "x", &HyphenOptions::default()).unwrap();
    assert!(h.is_empty());
    assert_eq!(h.inline(), "x");
    assert!(h.pairs().is_empty());
}

#[test]
fn margin_boundaries() {
    let dict = dictionary("hyph_en_test.dic");
    let inline = |lmin, rmin| {
        let options = HyphenOptions {
            lmin,
            rmin,
            ..Default::default()
        };
        hyphenate(&dict, "hyphenation", &options).unwrap().inline()
    };
    // Break at gap 2 (left fragment "hy") and gap 6 (right fragment "ation").
    assert_eq!(inline(2, 5), "hy=phen=ation");
    assert_eq!(inline(3, 5), "hyphen=ation");
    assert_eq!(inline(2, 6), "hy=phenation");
    assert_eq!(inline(3, 6), "hyphenation");
}

#[test]
fn input_length_boundary() {
    let dict = dictionary("hyph_en_test.dic");
    let options = HyphenOptions::default();
    assert!(hyphenate(&dict, &"a".repeat(98), &options).is_ok());
    assert_eq!(
        hyphenate(&dict, &"a".repeat(99), &options).unwrap_err(),
        HyphenError::InputTooLong { len: 99, max: 98 }
    );

    // Latin-1 encodes 'ä' in one byte, so the limit counts 98 of them.
    let de = dictionary("hyph_de_test.dic");
    assert!(hyphenate(&de, &"\u{00E4}".repeat(98), &options).is_ok());
    assert!(matches!(
        hyphenate(&de, &"\u{00E4}".repeat(99), &options),
        Err(HyphenError::InputTooLong { len: 99, .. })
    ));
}

#[test]
fn unencodable_word_in_latin1_dictionary() {
    let de = dictionary("hyph_de_test.dic");
    let err = hyphenate(&de, "\u{043A}\u{043E}\u{0448}\u{043A}\u{0430}", &HyphenOptions::default()).unwrap_err();
    assert!(matches!(err, HyphenError::Unencodable { ref charset } if charset == "ISO8859-1"));
}

#[test]
fn windows_1252_only_characters_are_unencodable_in_latin1() {
    let de = dictionary("hyph_de_test.dic");
    for word in ["c\u{0153}ur", "zucker\u{20AC}"] {
        assert!(matches!(
            hyphenate(&de, word, &HyphenOptions::default()),
            Err(HyphenError::Unencodable { .. })
        ));
    }
}

#[test]
fn inline_and_pairs_agree() {
    let dict = dictionary("hyph_de_test.dic");
    let h = hyphenate(&dict, "zuckerb\u{00E4}cker", &HyphenOptions::default()).unwrap();
    assert_eq!(h.inline(), "zuk=kerb\u{00E4}k=ker");
    assert_eq!(
        h.pairs(),
        vec![pair("zuk", "kerb\u{00E4}cker"), pair("zuckerb\u{00E4}k", "ker")]
    );
}

#[test]
fn hyphenation_is_deterministic() {
    let dict = dictionary("hyph_en_test.dic");
    let options = HyphenOptions::default();
    let first = hyphenate(&dict, "hyphen-hyphenation", &options).unwrap();
    let second = hyphenate(&dict, "hyphen-hyphenation", &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.inline(), "hy=phen-hy=phen=ation");
}

#[test]
fn compound_margins() {
    let dict = dictionary("hyph_nl_test.dic");
    let strict = Hyphenator::new(dict.clone(), HyphenOptions::from_dictionary());
    let loose = Hyphenator::new(dict, HyphenOptions::default());
    assert_eq!(
        strict.apply("hausboot", Mode::INLINE).unwrap(),
        Output::Inline("haus=bo=ot".into())
    );
    assert_eq!(
        loose.apply("hausboot", Mode::INLINE).unwrap(),
        Output::Inline("ha=us=bo=ot".into())
    );
    // Without a compound boundary only the word margins apply.
    assert_eq!(strict.syllables("haus").unwrap(), vec!["ha", "us"]);
}

#[test]
fn case_modes() {
    let h = Hyphenator::new(dictionary("hyph_de_test.dic"), HyphenOptions::default());
    assert_eq!(
        h.apply("zucker", Mode::CAPITALIZE).unwrap(),
        Output::Inline("Zuk=ker".into())
    );
    assert_eq!(
        h.apply("zucker", Mode::PAIRS | Mode::UPPERCASE).unwrap(),
        Output::Pairs(vec![pair("ZUK", "KER")])
    );
    assert_eq!(
        h.apply("zucker", Mode::PAIRS | Mode::CAPITALIZE).unwrap(),
        Output::Pairs(vec![pair("Zuk", "Ker")])
    );
    assert_eq!(h.pairs("Zucker").unwrap(), vec![pair("Zuk", "ker")]);
    assert_eq!(h.wrap("Zucker", 4, "-").unwrap(), Some(pair("Zuk-", "ker")));
}

#[test]
fn shared_between_threads() {
    let h = Arc::new(
        Hyphenator::new(dictionary("hyph_en_test.dic"), HyphenOptions::default()).with_cache(64),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let h = Arc::clone(&h);
            thread::spawn(move || {
                (0..50)
                    .map(|_| h.syllables("hyphenation").unwrap().join("-"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, "hy-phen-ation");
        }
    }
}

#[test]
fn missing_dictionary_file() {
    let err = Hyphenator::load(data_path("hyph_missing.dic"), HyphenOptions::default()).unwrap_err();
    assert!(err.to_string().contains("hyph_missing.dic"));
}
