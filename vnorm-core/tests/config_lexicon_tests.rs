//! 配置与词表集成测试

use std::fs;

use tempfile::TempDir;

use vnorm_core::lexicon::LexiconParser;
use vnorm_core::{Lexicon, NormalizeMode, Normalizer, SemioticClass, VNormConfig, VNormError};

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = VNormConfig {
        mode: NormalizeMode::NumbersOnly,
        upper_case_electronic: false,
        ..VNormConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = VNormConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = VNormConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, VNormError::ConfigNotFound(_)));
}

#[test]
fn test_config_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "mode = [").unwrap();

    let err = VNormConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, VNormError::ConfigParse { .. }));
}

#[test]
fn test_extra_currency_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("currencies.toml");
    fs::write(
        &path,
        r#"
[currencies]
"zz" = { singular = "zed", plural = "zeds" }
"#,
    )
    .unwrap();

    let config = VNormConfig {
        currency_file: Some(path),
        ..VNormConfig::default()
    };
    let lexicon = Lexicon::from_config(&config).unwrap();
    assert!(lexicon.currency("zz").is_some());
    assert!(lexicon.currency("$").is_some());
    assert!(lexicon.currency_count() > Lexicon::shared().currency_count());

    let normalizer = Normalizer::new(config).unwrap();
    assert_eq!(normalizer.convert_as(SemioticClass::Money, "5000 zz"), "five thousand zeds");
    assert_eq!(normalizer.convert_as(SemioticClass::Money, "1 zz"), "one zed");
}

#[test]
fn test_extra_plain_txt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.txt");
    fs::write(&path, "# 注释\nfavour favor\nrd road\n").unwrap();

    let config = VNormConfig {
        plain_file: Some(path),
        ..VNormConfig::default()
    };
    let normalizer = Normalizer::new(config).unwrap();
    assert_eq!(normalizer.normalize_token("Favour", "", ""), "favor");
    assert_eq!(normalizer.normalize_token("colour", "", ""), "color");
}

#[test]
fn test_malformed_currency_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("currencies.toml");
    fs::write(&path, "[currencies]\n\"zz\" = 5\n").unwrap();

    let config = VNormConfig {
        currency_file: Some(path),
        ..VNormConfig::default()
    };
    assert!(matches!(
        Lexicon::from_config(&config),
        Err(VNormError::LexiconParse { .. })
    ));
    assert!(Normalizer::new(config).is_err());
}

#[test]
fn test_builtin_lexicon() {
    let lexicon = Lexicon::try_builtin().unwrap();
    assert!(lexicon.currency("usd").unwrap().has_decimal_support());
    assert_eq!(lexicon.plain_word("sept"), Some("september"));

    let table = LexiconParser::parse_plain_txt("inline", "gaol jail\n").unwrap();
    assert_eq!(table.get("gaol").map(String::as_str), Some("jail"));
}
