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

//! An explicit model of a caller's format request: which [Verb] (formatting
//! trait) was invoked, with which flags, width, and precision. [FormatSpec]
//! can be captured from a live [Formatter] mid-format and rendered back into
//! the equivalent canonical `{:...}` specifier string.
//!
//! More info:
//! - <https://doc.rust-lang.org/std/fmt/index.html#syntax>

use std::fmt::{Alignment, Display, Formatter, Result};

use strum_macros::EnumCount;

use crate::format_spec::sizing::{InlineString, InlineVecFlagChars};

/// The nine `std::fmt` formatting traits, as data. This is which trait the
/// formatting dispatch invoked, never user input, so there is no malformed
/// case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum Verb {
    /// `{}`
    Display,
    /// `{:?}`
    Debug,
    /// `{:o}`
    Octal,
    /// `{:x}`
    LowerHex,
    /// `{:X}`
    UpperHex,
    /// `{:b}`
    Binary,
    /// `{:e}`
    LowerExp,
    /// `{:E}`
    UpperExp,
    /// `{:p}`
    Pointer,
}

pub mod sizing {
    use smallstr::SmallString;
    use smallvec::SmallVec;

    /// Recognized flags are: align char, `+`, `-`, `#`, `0`.
    pub const MAX_FORMAT_SPEC_FLAG_COUNT: usize = 5;
    pub type InlineVecFlagChars = SmallVec<[char; MAX_FORMAT_SPEC_FLAG_COUNT]>;

    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

mod verb_impl {
    use super::*;

    impl Verb {
        /// The type character that ends the `{:...}` specifier. Empty for
        /// [Verb::Display].
        #[rustfmt::skip]
        pub fn symbol(&self) -> &'static str {
            match self {
                Verb::Display  => "",
                Verb::Debug    => "?",
                Verb::Octal    => "o",
                Verb::LowerHex => "x",
                Verb::UpperHex => "X",
                Verb::Binary   => "b",
                Verb::LowerExp => "e",
                Verb::UpperExp => "E",
                Verb::Pointer  => "p",
            }
        }
    }
}

/// The caller's formatting state in struct form. Field order is the canonical
/// specifier order, so rendering is deterministic no matter how many flags
/// are set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Only meaningful when `align` is set; defaults to a space.
    pub fill: char,
    pub align: Option<Alignment>,
    pub sign_plus: bool,
    pub sign_minus: bool,
    pub alternate: bool,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub verb: Verb,
}

mod format_spec_impl {
    use super::*;

    impl FormatSpec {
        /// Reads the live formatting state out of the caller's [Formatter].
        /// The verb cannot be introspected, so the invoked trait impl supplies
        /// it. Never fails.
        pub fn capture(f: &Formatter<'_>, verb: Verb) -> FormatSpec {
            FormatSpec {
                fill: f.fill(),
                align: f.align(),
                sign_plus: f.sign_plus(),
                sign_minus: f.sign_minus(),
                alternate: f.alternate(),
                zero_pad: f.sign_aware_zero_pad(),
                width: f.width(),
                precision: f.precision(),
                verb,
            }
        }

        /// The recognized flag characters present, in canonical order: align
        /// char, `+`, `-`, `#`, `0`.
        pub fn flag_chars(&self) -> InlineVecFlagChars {
            let mut acc = InlineVecFlagChars::new();
            if let Some(align) = self.align {
                acc.push(align_char(align));
            }
            if self.sign_plus {
                acc.push('+');
            }
            if self.sign_minus {
                acc.push('-');
            }
            if self.alternate {
                acc.push('#');
            }
            if self.zero_pad {
                acc.push('0');
            }
            acc
        }

        /// Renders the canonical `{:...}` specifier into an inline string
        /// (spills to the heap past
        /// [sizing::DEFAULT_STRING_STORAGE_SIZE] bytes).
        pub fn render(&self) -> InlineString {
            format!("{}", self).into()
        }
    }

    #[rustfmt::skip]
    pub fn align_char(align: Alignment) -> char {
        match align {
            Alignment::Left   => '<',
            Alignment::Center => '^',
            Alignment::Right  => '>',
        }
    }
}
use format_spec_impl::align_char;

mod display_trait_impl {
    use super::*;

    impl Display for FormatSpec {
        /// Canonical rendering: `{` `:` fill align sign `#` `0` width
        /// `.`precision verb `}`. The `:` and everything after it are omitted
        /// when no component is present, degenerating to `{}`. The `.`
        /// separator is always emitted when precision is present.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let symbol = self.verb.symbol();
            let has_components = self.align.is_some()
                || self.sign_plus
                || self.sign_minus
                || self.alternate
                || self.zero_pad
                || self.width.is_some()
                || self.precision.is_some()
                || !symbol.is_empty();

            f.write_str("{")?;
            if has_components {
                f.write_str(":")?;
                if let Some(align) = self.align {
                    if self.fill != ' ' {
                        write!(f, "{}", self.fill)?;
                    }
                    write!(f, "{}", align_char(align))?;
                }
                if self.sign_plus {
                    f.write_str("+")?;
                }
                if self.sign_minus {
                    f.write_str("-")?;
                }
                if self.alternate {
                    f.write_str("#")?;
                }
                if self.zero_pad {
                    f.write_str("0")?;
                }
                if let Some(width) = self.width {
                    write!(f, "{width}")?;
                }
                if let Some(precision) = self.precision {
                    write!(f, ".{precision}")?;
                }
                f.write_str(symbol)?;
            }
            f.write_str("}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;

    use super::*;

    /// Captures the caller's formatting state and writes the reconstructed
    /// specifier straight through ([Formatter::write_str] applies no
    /// padding), so `format!` output *is* the canonical spec string.
    struct DisplayProbe;

    impl Display for DisplayProbe {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let spec = FormatSpec::capture(f, Verb::Display);
            f.write_str(&spec.render())
        }
    }

    struct HexProbe;

    impl std::fmt::LowerHex for HexProbe {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let spec = FormatSpec::capture(f, Verb::LowerHex);
            f.write_str(&spec.render())
        }
    }

    struct DebugProbe;

    impl std::fmt::Debug for DebugProbe {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let spec = FormatSpec::capture(f, Verb::Debug);
            f.write_str(&spec.render())
        }
    }

    #[test]
    fn nine_verbs() {
        assert_eq!(Verb::COUNT, 9);
    }

    #[test]
    fn degenerate_capture_renders_empty_braces() {
        assert_eq!(format!("{}", DisplayProbe), "{}");
    }

    #[test]
    fn degenerate_non_display_verb_keeps_its_symbol() {
        assert_eq!(format!("{:x}", HexProbe), "{:x}");
        assert_eq!(format!("{:?}", DebugProbe), "{:?}");
    }

    #[test]
    fn align_sign_width_precision_round_trip() {
        assert_eq!(format!("{:>+8.3}", DisplayProbe), "{:>+8.3}");
    }

    #[test]
    fn custom_fill_round_trips_with_align() {
        assert_eq!(format!("{:*^9}", DisplayProbe), "{:*^9}");
    }

    #[test]
    fn zero_pad_and_precision_keep_the_dot() {
        assert_eq!(format!("{:08.3}", DisplayProbe), "{:08.3}");
    }

    #[test]
    fn width_only() {
        assert_eq!(format!("{:5}", DisplayProbe), "{:5}");
    }

    #[test]
    fn precision_only_still_carries_the_dot() {
        assert_eq!(format!("{:.2}", DisplayProbe), "{:.2}");
    }

    #[test]
    fn alternate_hex() {
        assert_eq!(format!("{:#x}", HexProbe), "{:#x}");
    }

    #[test]
    fn flag_order_is_canonical() {
        let spec = FormatSpec {
            fill: ' ',
            align: Some(Alignment::Right),
            sign_plus: true,
            sign_minus: false,
            alternate: true,
            zero_pad: true,
            width: Some(10),
            precision: None,
            verb: Verb::Display,
        };
        let flags: Vec<char> = spec.flag_chars().into_iter().collect();
        assert_eq!(flags, vec!['>', '+', '#', '0']);
        assert_eq!(spec.render().as_str(), "{:>+#010}");
    }

    #[test]
    fn no_flags_means_empty_flag_chars() {
        let spec = FormatSpec {
            fill: ' ',
            align: None,
            sign_plus: false,
            sign_minus: false,
            alternate: false,
            zero_pad: false,
            width: None,
            precision: None,
            verb: Verb::UpperExp,
        };
        assert!(spec.flag_chars().is_empty());
        assert_eq!(spec.render().as_str(), "{:E}");
    }
}
