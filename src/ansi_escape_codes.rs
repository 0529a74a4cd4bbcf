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

//! ANSI color escape codes, exported for convenience. These are rarely
//! necessary to use directly (use [crate::Color] and the constructor
//! functions instead), but might be for some custom formatting cases.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

/// Control sequence introducer. Every code in this module starts with it.
pub const CSI: &str = "\x1b[";

/// SGR: set graphics mode terminator.
pub const SGR: &str = "m";

pub const BLACK_CODE: &str = "\x1b[30m";
pub const RED_CODE: &str = "\x1b[31m";
pub const GREEN_CODE: &str = "\x1b[32m";
pub const YELLOW_CODE: &str = "\x1b[33m";
pub const BLUE_CODE: &str = "\x1b[34m";
pub const MAGENTA_CODE: &str = "\x1b[35m";
pub const CYAN_CODE: &str = "\x1b[36m";
pub const WHITE_CODE: &str = "\x1b[37m";

/// The bright variants reuse the 30-37 row with a `;1` bold modifier.
pub const BRIGHT_BLACK_CODE: &str = "\x1b[30;1m";
pub const BRIGHT_RED_CODE: &str = "\x1b[31;1m";
pub const BRIGHT_GREEN_CODE: &str = "\x1b[32;1m";
pub const BRIGHT_YELLOW_CODE: &str = "\x1b[33;1m";
pub const BRIGHT_BLUE_CODE: &str = "\x1b[34;1m";
pub const BRIGHT_MAGENTA_CODE: &str = "\x1b[35;1m";
pub const BRIGHT_CYAN_CODE: &str = "\x1b[36;1m";
pub const BRIGHT_WHITE_CODE: &str = "\x1b[37;1m";

/// Terminates any colorized span.
pub const RESET_CODE: &str = "\x1b[0m";
