use moodmap::core::Polarity;
use moodmap::lexicon::{Lexicon, NEGATIVE_MARKERS, NEUTRAL_MARKERS, POSITIVE_MARKERS};

#[test]
fn test_default_lexicon_classifies_markers() {
    let lexicon = Lexicon::default();

    assert_eq!(lexicon.classify("great"), Some(Polarity::Positive));
    assert_eq!(lexicon.classify("fantastic"), Some(Polarity::Positive));
    assert_eq!(lexicon.classify("terrible"), Some(Polarity::Negative));
    assert_eq!(lexicon.classify("frustrating"), Some(Polarity::Negative));
    assert_eq!(lexicon.classify("okay"), Some(Polarity::Neutral));
}

#[test]
fn test_unlisted_word_is_unclassified() {
    let lexicon = Lexicon::default();
    assert_eq!(lexicon.classify("keyboard"), None);
}

#[test]
fn test_default_marker_tables_are_disjoint() {
    for word in POSITIVE_MARKERS {
        assert!(!NEGATIVE_MARKERS.contains(word));
        assert!(!NEUTRAL_MARKERS.contains(word));
    }
    for word in NEGATIVE_MARKERS {
        assert!(!NEUTRAL_MARKERS.contains(word));
    }
}

#[test]
fn test_default_lexicon_size_matches_tables() {
    let lexicon = Lexicon::default();
    assert_eq!(
        lexicon.len(),
        POSITIVE_MARKERS.len() + NEGATIVE_MARKERS.len() + NEUTRAL_MARKERS.len()
    );
}

#[test]
fn test_custom_lexicon_lowercases_entries() {
    let lexicon = Lexicon::new(vec!["Stellar"], vec!["Dreadful"], vec![]);

    assert_eq!(lexicon.classify("stellar"), Some(Polarity::Positive));
    assert_eq!(lexicon.classify("dreadful"), Some(Polarity::Negative));
    // Lookup is over lowercased tokens; the original casing is gone
    assert_eq!(lexicon.classify("Stellar"), None);
}

#[test]
fn test_empty_lexicon() {
    let lexicon = Lexicon::new(Vec::<&str>::new(), vec![], vec![]);
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.classify("great"), None);
}
