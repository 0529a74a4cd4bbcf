/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Whether wrapping a value actually colorizes it. Captured by every
/// [crate::Colorized] at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// The process-wide disable-all-coloring switch. This is a global because it
/// is really dependent on the environment: a host that detects its output is
/// redirected to a non-terminal destination sets it once during startup,
/// before any formatting (or concurrent use) begins.
///
/// ```rust
/// use r3bl_colorize::*;
///
/// global_color_mode::set_override(examine_env_vars_to_determine_color_mode(
///     Stream::Stdout,
/// ));
/// ```
pub mod global_color_mode {
    use super::*;

    static COLOR_MODE_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// The mode constructors capture: the override if one was set, otherwise
    /// [ColorMode::Enabled] (coloring is on by default).
    pub fn current() -> ColorMode {
        match try_get_override() {
            Ok(it) => it,
            Err(_) => ColorMode::Enabled,
        }
    }

    /// Override the color mode. Regardless of the environment, the value you
    /// set here will be captured by every subsequently constructed wrapper.
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used
    /// to test this function. In any test in which this function is called,
    /// please use the `#[serial]` attribute to annotate that test. Otherwise
    /// there will be flakiness in the test results (tests are run in parallel
    /// using many threads). Tests that don't need the global should inject a
    /// mode via [crate::Colorized::with_mode] instead.
    pub fn set_override(value: ColorMode) {
        COLOR_MODE_OVERRIDE.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() {
        COLOR_MODE_OVERRIDE.store(NOT_SET_VALUE, Ordering::SeqCst);
    }

    /// Get the color mode override value.
    /// - If the value has been set using [set_override], then that value will
    ///   be returned.
    /// - Otherwise, an error will be returned.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorMode, ()> {
        ColorMode::try_from(COLOR_MODE_OVERRIDE.load(Ordering::SeqCst))
    }
}

/// Determine heuristically whether coloring should be on, based on the
/// environment variables and whether `stream` is a tty. This is the opt-in
/// detection half of the global switch; hosts wire it up via
/// [global_color_mode::set_override].
pub fn examine_env_vars_to_determine_color_mode(stream: Stream) -> ColorMode {
    if env_no_color()
        || as_str(&env::var("TERM")) == Ok("dumb")
        || !(is_a_tty(stream)
            || env::var("IGNORE_IS_TERMINAL").map_or(false, |v| v != "0"))
    {
        return ColorMode::Disabled;
    }

    if env::consts::OS == "windows" {
        return ColorMode::Enabled;
    }

    if env::var("COLORTERM").is_ok()
        || env::var("TERM").map(|term| check_ansi_color(&term)) == Ok(true)
        || env::var("CLICOLOR").map_or(false, |v| v != "0")
        || is_ci::uncached()
    {
        return ColorMode::Enabled;
    }

    ColorMode::Disabled
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// These trait implementations allow us to use `ColorMode` and `i8`
/// interchangeably (the atomic stores an `i8`).
mod convert_between_color_mode_and_i8 {
    impl TryFrom<i8> for super::ColorMode {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorMode::Enabled),
                2 => Ok(super::ColorMode::Disabled),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorMode> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorMode) -> Self {
            match value {
                super::ColorMode::Enabled  => 1,
                super::ColorMode::Disabled => 2,
            }
        }
    }
}

mod helpers {
    use super::*;

    pub fn is_a_tty(stream: Stream) -> bool {
        use is_terminal::*;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    pub fn env_no_color() -> bool {
        match as_str(&env::var("NO_COLOR")) {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}
pub use helpers::*;

fn as_str<E>(option: &Result<String, E>) -> Result<&str, &E> {
    match option {
        Ok(inner) => Ok(inner),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn cycle_1() {
        global_color_mode::set_override(ColorMode::Enabled);
        assert_eq!(
            global_color_mode::try_get_override(),
            Ok(ColorMode::Enabled)
        );
        assert_eq!(global_color_mode::current(), ColorMode::Enabled);
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_color_mode::set_override(ColorMode::Disabled);
        assert_eq!(
            global_color_mode::try_get_override(),
            Ok(ColorMode::Disabled)
        );
        assert_eq!(global_color_mode::current(), ColorMode::Disabled);
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_color_mode::clear_override();
        assert_eq!(global_color_mode::try_get_override(), Err(()));
        assert_eq!(global_color_mode::current(), ColorMode::Enabled);
    }

    #[test]
    fn ansi_capable_terms() {
        assert!(check_ansi_color("xterm-256color"));
        assert!(check_ansi_color("screen"));
        assert!(check_ansi_color("rxvt-unicode"));
        assert!(!check_ansi_color("dumb"));
    }
}
