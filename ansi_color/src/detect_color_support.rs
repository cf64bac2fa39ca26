// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

use crate::ColorDepth;

/// # Terminal color support detection
///
/// Detection examines a handful of environment variables and whether the stream is a
/// TTY. The result is memoized, so it only runs once per process, and it can be
/// overridden (for tests, or when the user asks for a specific color depth).
///
/// ```rust
/// use stutter_ansi_color::{global_color_support, ColorSupport};
///
/// global_color_support::set_override(ColorSupport::NoColor);
/// assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
/// global_color_support::clear_override();
/// ```
///
/// Two global atomic variables manage the detection state:
/// - `COLOR_SUPPORT_OVERRIDE`: explicit override values (highest priority).
/// - `COLOR_SUPPORT_CACHED`: memoized detection results.
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    static COLOR_SUPPORT_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Returns the override if one is set, otherwise the cached detection result,
    /// otherwise runs detection against `stdout` and caches it.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        set_cached(detected);
        detected
    }

    /// Regardless of the value of the environment variables the value you set here will
    /// be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// In any test in which this function is called, please use the `#[serial]`
    /// attribute from the [serial_test](https://crates.io/crates/serial_test) crate.
    /// Otherwise tests running in parallel will see each other's overrides.
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release); }

    /// Forces re-detection on the next call to [`detect()`].
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no cached value has been set yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }

    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_OVERRIDE.load(Ordering::Acquire))
    }
}

/// Determine whether color is supported heuristically, based on environment variables.
///
/// This does several `env::var()` lookups, so call it through
/// [`global_color_support::detect()`] which memoizes the result.
///
/// 1. Explicit color disabling (`NO_COLOR`, `TERM=dumb`) or a non TTY stream (unless
///    `IGNORE_IS_TERMINAL` is set) means [`ColorSupport::NoColor`].
/// 2. Platform specific checks (`TERM_PROGRAM`, `COLORTERM`).
/// 3. Generic fallbacks (`COLORTERM`, `TERM`, `CLICOLOR`, CI detection).
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    if helpers::env_no_color()
        || env::var("TERM").is_ok_and(|v| v == "dumb")
        || !(helpers::is_a_tty(stream)
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return ColorSupport::NoColor;
    }

    if env::consts::OS == "macos" {
        if env::var("TERM_PROGRAM").is_ok_and(|v| v == "Apple_Terminal")
            && env::var("TERM").is_ok_and(|term| helpers::check_256_color(&term))
        {
            return ColorSupport::Ansi256;
        }

        if env::var("TERM_PROGRAM").is_ok_and(|v| v == "iTerm.app")
            || env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
        {
            return ColorSupport::Truecolor;
        }
    }

    if env::consts::OS == "linux" && env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
    {
        return ColorSupport::Truecolor;
    }

    if env::consts::OS == "windows" {
        return ColorSupport::Truecolor;
    }

    if env::var("COLORTERM").is_ok() || is_ci::uncached() {
        return ColorSupport::Truecolor;
    }

    if env::var("TERM").is_ok_and(|term| helpers::check_256_color(&term)) {
        return ColorSupport::Ansi256;
    }

    if env::var("TERM").is_ok_and(|term| helpers::check_ansi_color(&term))
        || env::var("CLICOLOR").is_ok_and(|v| v != "0")
    {
        return ColorSupport::Truecolor;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    NoColor,
}

impl ColorSupport {
    /// The [`ColorDepth`] that can be used for output, if any.
    #[must_use]
    pub fn depth(self) -> Option<ColorDepth> {
        match self {
            ColorSupport::Truecolor => Some(ColorDepth::Truecolor),
            ColorSupport::Ansi256 => Some(ColorDepth::Ansi256),
            ColorSupport::NoColor => None,
        }
    }
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                2 => Ok(super::ColorSupport::Truecolor),
                3 => Ok(super::ColorSupport::NoColor),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256   => 1,
                super::ColorSupport::Truecolor => 2,
                super::ColorSupport::NoColor   => 3,
            }
        }
    }
}

mod helpers {
    use super::{Stream, env};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("vscode")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    #[must_use]
    pub fn env_no_color() -> bool {
        match env::var("NO_COLOR").as_deref() {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}
