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

use std::fmt;

use smallstr::SmallString;

use crate::{Color, ColorMode, RESET_CODE, format_spec::sizing, global_color_mode};

/// The main struct to consider is `Colorized`. It pairs:
/// - `value` - the wrapped value, of any type.
/// - `color` - the [Color] whose escape code brackets the output.
/// - `mode` - the [ColorMode] captured at construction time.
///
/// It implements every `std::fmt` formatting trait that the wrapped value
/// implements, by writing the color code, delegating to the value's own impl
/// with the caller's live [fmt::Formatter] (which carries all
/// flags/width/precision), then writing [RESET_CODE]. So a `Colorized<T>` is
/// accepted anywhere a plain `T` is, for every verb `T` supports, and renders
/// exactly as `T` would — just bracketed by escape codes. Padding applies to
/// the value inside the colorized span.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_colorize::*;
///
/// // Using the constructor functions.
/// println!("{} something failed", red("Error:"));
///
/// // Any verb the wrapped value supports works.
/// println!("{:>8.2}", cyan(3.14159));
/// println!("{:#06x}", bright_yellow(255));
///
/// // Method form, with an explicitly injected mode.
/// let wrapped = Color::Blue.colorize_with_mode("hi", ColorMode::Enabled);
/// assert_eq!(format!("{wrapped:?}"), "\x1b[34m\"hi\"\x1b[0m");
///
/// // Verbose struct construction.
/// let wrapped = Colorized {
///     value: 42,
///     color: Color::BrightGreen,
///     mode: ColorMode::Enabled,
/// };
/// assert_eq!(format!("{wrapped:5}"), "\x1b[32;1m   42\x1b[0m");
/// ```
// No derived Debug: the `{:?}` verb goes through the forwarding impl below,
// so it colorizes like every other verb.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Colorized<T> {
    pub value: T,
    pub color: Color,
    pub mode: ColorMode,
}

mod colorized_impl {
    use super::*;

    impl<T> Colorized<T> {
        /// The single generic constructor. The mode is read from
        /// [global_color_mode::current] once, here; later changes to the
        /// global override do not affect a wrapper that already exists.
        pub fn new(color: Color, value: T) -> Colorized<T> {
            Colorized {
                value,
                color,
                mode: global_color_mode::current(),
            }
        }

        /// Explicit-mode constructor. Bypasses the global override entirely,
        /// so tests (and hosts that thread their own config) get isolated
        /// behavior.
        pub fn with_mode(color: Color, value: T, mode: ColorMode) -> Colorized<T> {
            Colorized { value, color, mode }
        }
    }

    impl<T: fmt::Display> Colorized<T> {
        /// This is different than the [fmt::Display] trait implementation,
        /// because it doesn't allocate a new [String], but instead allocates
        /// an inline buffer on the stack. If this buffer gets larger than
        /// [sizing::DEFAULT_STRING_STORAGE_SIZE], it will spill to the heap.
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            format!("{}", self).into()
        }
    }
}

/// Shared bracketing helper for all nine forwarding impls. In
/// [ColorMode::Disabled] the inner write runs bare, byte-for-byte the
/// unwrapped output. [fmt::Formatter::write_str] applies no padding, so the
/// escape codes are never padded; any error from the inner impl propagates
/// unchanged.
fn write_colorized(
    color: Color,
    mode: ColorMode,
    f: &mut fmt::Formatter<'_>,
    write_value: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    match mode {
        ColorMode::Disabled => write_value(f),
        ColorMode::Enabled => {
            f.write_str(color.code())?;
            write_value(f)?;
            f.write_str(RESET_CODE)
        }
    }
}

/// Stamps one forwarding impl per formatting trait, delegating to the wrapped
/// value's impl with the caller's live formatter.
macro_rules! impl_colorized_fmt {
    ($($fmt_trait:ident),+ $(,)?) => {
        $(
            impl<T: fmt::$fmt_trait> fmt::$fmt_trait for Colorized<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_colorized(self.color, self.mode, f, |f| {
                        fmt::$fmt_trait::fmt(&self.value, f)
                    })
                }
            }
        )+
    };
}

impl_colorized_fmt! {
    Display, Debug, Octal, LowerHex, UpperHex, Binary, LowerExp, UpperExp, Pointer,
}

mod color_sugar_impl {
    use super::*;

    impl Color {
        /// Method-form sugar over [Colorized::new].
        pub fn colorize<T>(self, value: T) -> Colorized<T> {
            Colorized::new(self, value)
        }

        /// Method-form sugar over [Colorized::with_mode].
        pub fn colorize_with_mode<T>(self, value: T, mode: ColorMode) -> Colorized<T> {
            Colorized::with_mode(self, value, mode)
        }
    }
}

pub fn black<T>(value: T) -> Colorized<T> {
    Color::Black.colorize(value)
}

pub fn red<T>(value: T) -> Colorized<T> {
    Color::Red.colorize(value)
}

pub fn green<T>(value: T) -> Colorized<T> {
    Color::Green.colorize(value)
}

pub fn yellow<T>(value: T) -> Colorized<T> {
    Color::Yellow.colorize(value)
}

pub fn blue<T>(value: T) -> Colorized<T> {
    Color::Blue.colorize(value)
}

pub fn magenta<T>(value: T) -> Colorized<T> {
    Color::Magenta.colorize(value)
}

pub fn cyan<T>(value: T) -> Colorized<T> {
    Color::Cyan.colorize(value)
}

pub fn white<T>(value: T) -> Colorized<T> {
    Color::White.colorize(value)
}

pub fn bright_black<T>(value: T) -> Colorized<T> {
    Color::BrightBlack.colorize(value)
}

pub fn bright_red<T>(value: T) -> Colorized<T> {
    Color::BrightRed.colorize(value)
}

pub fn bright_green<T>(value: T) -> Colorized<T> {
    Color::BrightGreen.colorize(value)
}

pub fn bright_yellow<T>(value: T) -> Colorized<T> {
    Color::BrightYellow.colorize(value)
}

pub fn bright_blue<T>(value: T) -> Colorized<T> {
    Color::BrightBlue.colorize(value)
}

pub fn bright_magenta<T>(value: T) -> Colorized<T> {
    Color::BrightMagenta.colorize(value)
}

pub fn bright_cyan<T>(value: T) -> Colorized<T> {
    Color::BrightCyan.colorize(value)
}

pub fn bright_white<T>(value: T) -> Colorized<T> {
    Color::BrightWhite.colorize(value)
}
