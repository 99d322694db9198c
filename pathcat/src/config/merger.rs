//! Configuration merging logic.
//!
//! Sources are layered in precedence order. A field set in a higher
//! precedence source replaces the value from a lower one; unset fields are
//! inherited.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges multiple configuration sources.
///
/// # Examples
///
/// ```
/// use pathcat::config::{Config, ConfigMerger};
///
/// let mut base = Config {
///     separator: Some("/".into()),
///     ..Default::default()
/// };
/// let overlay = Config {
///     filter_files: Some(true),
///     ..Default::default()
/// };
///
/// ConfigMerger::merge_into(&mut base, &overlay);
/// assert_eq!(base.separator.as_deref(), Some("/"));
/// assert_eq!(base.filter_files, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources in ascending precedence order.
    ///
    /// The input does not need to be sorted.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in &sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.filter_files.is_some() {
            target.filter_files = source.filter_files;
        }

        if source.encoding.is_some() {
            target.encoding.clone_from(&source.encoding);
        }

        if source.fallback_encoding.is_some() {
            target.fallback_encoding.clone_from(&source.fallback_encoding);
        }

        if source.separator.is_some() {
            target.separator.clone_from(&source.separator);
        }

        if source.no_drive_label.is_some() {
            target.no_drive_label.clone_from(&source.no_drive_label);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
