use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use grammar_lens::IdentityCorrector;

use crate::{ConfigError, GrammarService, ServiceConfig, ServiceError};

#[test]
fn missing_file_gives_defaults() {
    let config = ServiceConfig::load(Path::new("/nonexistent/grammar-lens.toml")).unwrap();
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.max_input_chars, 1000);
    assert_eq!(config.max_parse_tokens, 40);
    assert!(config.split_sentences);
}

#[test]
fn load_from_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
max_input_chars = 280
split_sentences = false
"#
    )
    .unwrap();

    let config = ServiceConfig::load(file.path()).unwrap();
    assert_eq!(
        config,
        ServiceConfig {
            max_input_chars: 280,
            max_parse_tokens: 40,
            split_sentences: false,
        }
    );
}

#[test]
fn bad_toml_names_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_parse_tokens = \"many\"").unwrap();

    let error = ServiceConfig::load(file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error
        .to_string()
        .contains(&file.path().display().to_string()));
}

#[test]
fn builder_reads_the_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_parse_tokens = 7").unwrap();

    let service = GrammarService::builder()
        .config_file(file.path())
        .unwrap()
        .corrector(IdentityCorrector)
        .build()
        .unwrap();
    assert_eq!(service.config().max_parse_tokens, 7);
    assert_eq!(service.config().max_input_chars, 1000);
}

#[test]
fn builder_reports_a_broken_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "split_sentences = 3").unwrap();

    let error = GrammarService::builder()
        .config_file(file.path())
        .err()
        .expect("config is rejected");
    assert!(matches!(
        error,
        ServiceError::Config(ConfigError::Parse { .. })
    ));
}
