// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig};

/// This module makes it easier to configure the logging system. Instead of having lots of
/// complex arguments to the [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`] functions, they both receive a type that
/// implements the [`Into<TracingConfig>`] trait.
///
/// ```no_run
/// use stutter_log::{
///     TracingConfig, DisplayPreference, WriterConfig,
///     try_initialize_logging_global,
/// };
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_1: TracingConfig = level_filter.into();
///
/// let writer_config = WriterConfig::File("stutter.log".to_string());
/// let config_2: TracingConfig = writer_config.into();
///
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
///
/// try_initialize_logging_global(config_1 + config_2 + config_3);
/// ```
pub mod tracing_config_options {
    use super::{Add, DisplayPreference, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level filter
    /// wins, and the writer configs are merged with [`WriterConfig`]'s `+`.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self`
    /// if it has a "some" value. That is, the value in `rhs` has higher specificity.
    ///
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                    DisplayAndFile(dp_rhs, f_rhs)
                }
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }

    #[cfg(test)]
    mod tests_add_writer_configs {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn test_add_writer_configs() {
            let fname = "log.txt".to_string();

            let none = WriterConfig::None;
            let display_stdout = WriterConfig::Display(DisplayPreference::Stdout);
            let display_stderr = WriterConfig::Display(DisplayPreference::Stderr);
            let file = WriterConfig::File(fname.clone());
            let display_stdout_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
            let display_stderr_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());

            // No collision merge.
            assert_eq!(none.clone() + none.clone(), none);
            assert_eq!(display_stdout.clone() + none.clone(), display_stdout);
            assert_eq!(none.clone() + file.clone(), file);
            assert_eq!(display_stderr.clone() + file.clone(), display_stderr_and_file);
            assert_eq!(file.clone() + display_stdout.clone(), display_stdout_and_file);

            // Collision (rhs has higher specificity).
            assert_eq!(display_stdout.clone() + display_stderr.clone(), display_stderr);
            assert_eq!(
                display_stdout.clone() + display_stderr_and_file.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                display_stderr_and_file.clone() + display_stdout.clone(),
                display_stdout_and_file
            );
            assert_eq!(
                display_stdout_and_file.clone() + WriterConfig::File("other.txt".into()),
                WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "other.txt".into())
            );
        }

        #[test]
        fn test_add_tracing_configs_keeps_most_verbose_level() {
            let lhs: TracingConfig = tracing_core::LevelFilter::INFO.into();
            let rhs: TracingConfig = DisplayPreference::Stderr.into();
            let merged = lhs + rhs;
            assert_eq!(merged.level_filter, tracing_core::LevelFilter::DEBUG);
            assert_eq!(
                merged.writer_config,
                WriterConfig::DisplayAndFile(
                    DisplayPreference::Stderr,
                    DEFAULT_LOG_FILE_NAME.to_string()
                )
            );
        }
    }
}

/// Global default subscriber, which once set, can't be unset or changed. Configure this
/// using the [`mod@tracing_config_options`] module.
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't
/// matter if you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// # Errors
///
/// Returns an error if the log file can't be opened, or if a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, see [`TracingConfig::install_thread_local`]. Returns
/// [`None`] when the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(tracing_core::LevelFilter::OFF)
            .unwrap();
        assert!(guard.is_none());
    }
}
