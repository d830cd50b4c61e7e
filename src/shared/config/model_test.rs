use super::model::Settings;
use std::time::Duration;

fn from_toml(source: &str) -> Settings {
    config::Config::builder()
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .build()
        .expect("config builds")
        .try_deserialize()
        .expect("settings deserialize")
}

#[test]
fn empty_source_yields_defaults() {
    let settings = from_toml("");
    assert_eq!(settings.router.key_prefix, "mixed");
    assert_eq!(settings.router.cancel_grace(), Duration::from_millis(250));
    assert!(settings.router.group_timeout().is_none());
    assert_eq!(settings.logging.stdout_level, "info");
}

#[test]
fn partial_router_section_keeps_remaining_defaults() {
    let settings = from_toml(
        r#"
        [router]
        group_timeout_ms = 1500

        [logging]
        stdout_level = "warn"
        "#,
    );
    assert_eq!(settings.router.group_timeout(), Some(Duration::from_millis(1500)));
    assert_eq!(settings.router.key_prefix, "mixed");
    assert_eq!(settings.logging.stdout_level, "warn");
    assert_eq!(settings.logging.file_level, "debug");
}
