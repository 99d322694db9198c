//! Property-based tests for configuration system.

use super::loader::ConfigSource;
use super::merger::ConfigMerger;
use super::schema::Config;
use crate::output::OutputFormat;
use proptest::prelude::*;
use std::path::PathBuf;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(vec![
        OutputFormat::Csv,
        OutputFormat::Tsv,
        OutputFormat::Json,
        OutputFormat::Table,
    ])
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(prop::sample::select(vec!["utf-8", "latin1", "cp1251", "shift_jis"])),
        prop::option::of(prop::sample::select(vec!["utf-8", "windows-1252"])),
        prop::option::of(prop::sample::select(vec!["\\", "/"])),
        prop::option::of("[A-Za-z][A-Za-z ]{0,19}"),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(filter_files, encoding, fallback, separator, label, output_format)| Config {
                filter_files,
                encoding: encoding.map(String::from),
                fallback_encoding: fallback.map(String::from),
                separator: separator.map(String::from),
                no_drive_label: label,
                output_format,
            },
        )
}

fn source(precedence: u8, config: Config) -> ConfigSource {
    ConfigSource {
        path: PathBuf::from(format!("layer-{precedence}.yaml")),
        precedence,
        config,
    }
}

proptest! {
    // A set field in the higher layer always wins; otherwise the lower one shows through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let merged = ConfigMerger::merge(vec![source(2, high.clone()), source(1, low.clone())]);

        prop_assert_eq!(merged.filter_files, high.filter_files.or(low.filter_files));
        prop_assert_eq!(&merged.encoding, &high.encoding.clone().or(low.encoding.clone()));
        prop_assert_eq!(
            &merged.fallback_encoding,
            &high.fallback_encoding.clone().or(low.fallback_encoding.clone())
        );
        prop_assert_eq!(&merged.separator, &high.separator.clone().or(low.separator.clone()));
        prop_assert_eq!(
            &merged.no_drive_label,
            &high.no_drive_label.clone().or(low.no_drive_label.clone())
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config with itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Configs survive a YAML round trip through serde
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Generated configs always resolve to processing options
    #[test]
    fn valid_configs_resolve(config in config_strategy()) {
        prop_assert!(crate::config::ConfigValidator::validate(&config).is_ok());
        prop_assert!(config.process_options().is_ok());
    }
}
