use akshara_core::lexicon::{PartOfSpeech, WordEntry};
use akshara_core::morphology::{self, MorphMatcher, SuffixTableError};
use akshara_core::{Script, SuffixTable};

const MALAYALAM_DATIVE: &str = r#"
[ml]
[[ml.suffixes]]
suffix = "ത്തിന്"
roman = "-ttinŭ"
label = "dative"
category = "case"
"#;

// One test per binary: the custom tables live in process-wide statics.
#[test]
fn custom_tables_replace_defaults_until_first_use() {
    let err = morphology::init_custom("[ml\n".to_string()).unwrap_err();
    assert!(matches!(err, SuffixTableError::Parse(_)));

    // A rejected table does not claim the slot.
    morphology::init_custom(MALAYALAM_DATIVE.to_string()).unwrap();

    let err = morphology::init_custom(MALAYALAM_DATIVE.to_string()).unwrap_err();
    assert!(matches!(err, SuffixTableError::AlreadyInitialized));

    let malayalam = SuffixTable::global(Script::Malayalam);
    assert_eq!(malayalam.entries().len(), 1);
    assert!(SuffixTable::global(Script::Kannada).is_empty());

    let root = WordEntry::new("മര", Some(PartOfSpeech::Noun));
    let b = MorphMatcher::global(Script::Malayalam)
        .decompose("മരത്തിന്", &root)
        .unwrap();
    assert_eq!(b.suffix.label, "dative");
    assert_eq!(b.glide, None);

    let err = morphology::init_custom(MALAYALAM_DATIVE.to_string()).unwrap_err();
    assert!(matches!(err, SuffixTableError::AlreadyInitialized));
}
