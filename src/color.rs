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

//! More info:
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

use crate::ansi_escape_codes::*;

/// One variant per supported color name: the eight standard terminal colors
/// (codes 30-37) and their bright (`;1` bold modifier) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

mod color_impl {
    use super::*;

    impl Color {
        /// The escape code that starts a span in this color. Fixed at compile
        /// time; see [crate::ansi_escape_codes].
        #[rustfmt::skip]
        pub fn code(&self) -> &'static str {
            match self {
                Color::Black         => BLACK_CODE,
                Color::Red           => RED_CODE,
                Color::Green         => GREEN_CODE,
                Color::Yellow        => YELLOW_CODE,
                Color::Blue          => BLUE_CODE,
                Color::Magenta       => MAGENTA_CODE,
                Color::Cyan          => CYAN_CODE,
                Color::White         => WHITE_CODE,
                Color::BrightBlack   => BRIGHT_BLACK_CODE,
                Color::BrightRed     => BRIGHT_RED_CODE,
                Color::BrightGreen   => BRIGHT_GREEN_CODE,
                Color::BrightYellow  => BRIGHT_YELLOW_CODE,
                Color::BrightBlue    => BRIGHT_BLUE_CODE,
                Color::BrightMagenta => BRIGHT_MAGENTA_CODE,
                Color::BrightCyan    => BRIGHT_CYAN_CODE,
                Color::BrightWhite   => BRIGHT_WHITE_CODE,
            }
        }
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(self.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn sixteen_colors() {
        assert_eq!(Color::COUNT, 16);
    }

    #[test]
    fn every_code_is_a_color_escape() {
        for color in Color::iter() {
            let code = color.code();
            assert!(code.starts_with("\x1b[3"), "{code:?}");
            assert!(code.ends_with('m'), "{code:?}");
        }
    }

    #[test]
    fn bright_codes_carry_bold_modifier() {
        let (normal, bright): (Vec<_>, Vec<_>) =
            Color::iter().partition(|color| !format!("{color:?}").starts_with("Bright"));
        for color in normal {
            assert!(!color.code().contains(";1"));
        }
        for color in bright {
            assert!(color.code().contains(";1"));
        }
    }

    #[test]
    fn display_writes_the_code() {
        assert_eq!(Color::Red.to_string(), RED_CODE);
        assert_eq!(Color::BrightWhite.to_string(), BRIGHT_WHITE_CODE);
    }
}
