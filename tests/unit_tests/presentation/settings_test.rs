use config::{Config, File, FileFormat};

use paperlens::presentation::config::{
    DatabaseProvider, Environment, LlmProvider, Settings, StorageProvider,
};

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_no_overrides_when_using_defaults_then_matches_documented_limits() {
    let settings = Settings::default();

    assert_eq!(settings.summary.max_pdf_size_mb, 5);
    assert_eq!(settings.summary.max_text_length, 50_000);
    assert_eq!(settings.summary.max_retries, 3);
    assert_eq!(settings.summary.retry_delay_ms, 21_000);
    assert!(settings.summary.single_flight);
    assert_eq!(settings.llm.chat_model, "gpt-3.5-turbo");
    assert_eq!(settings.llm.max_tokens, 1500);
    assert_eq!(settings.storage.s3_prefix, "uploads");
}

#[test]
fn given_partial_toml_when_deserializing_then_missing_fields_take_defaults() {
    let toml = r#"
        [database]
        provider = "memory"

        [storage]
        provider = "s3"
        s3_bucket = "papers"

        [llm]
        provider = "lmstudio"
        base_url = "http://localhost:1234/v1"

        [summary]
        single_flight = false
    "#;

    let settings: Settings = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.database.provider, DatabaseProvider::Memory);
    assert_eq!(settings.storage.provider, StorageProvider::S3);
    assert_eq!(settings.storage.s3_bucket.as_deref(), Some("papers"));
    assert_eq!(settings.storage.s3_prefix, "uploads");
    assert_eq!(settings.llm.provider, LlmProvider::LmStudio);
    assert!(!settings.summary.single_flight);
    assert_eq!(settings.summary.max_retries, 3);
    assert_eq!(settings.server.port, 3001);
}
