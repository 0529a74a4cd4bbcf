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

//! # r3bl_colorize
//!
//! Colorize anything you format with [std::fmt], without writing escape
//! codes by hand. Wrap a value in one of the sixteen per-color constructor
//! functions and pass it anywhere a plain value is accepted:
//!
//! ```rust
//! use r3bl_colorize::*;
//!
//! println!("{} file not found", red("Error:"));
//! println!("{:>10.2}", bright_cyan(3.14159));
//! ```
//!
//! The wrapped value renders exactly as it would unwrapped — same flags,
//! width, precision, and verb — just bracketed by the color's ANSI escape
//! code and a reset code:
//!
//! ```rust
//! use r3bl_colorize::*;
//!
//! let wrapped = Color::BrightGreen.colorize_with_mode(42, ColorMode::Enabled);
//! assert_eq!(format!("{wrapped:5}"), "\x1b[32;1m   42\x1b[0m");
//! ```
//!
//! Coloring is on by default. To turn it off process-wide (eg: when output is
//! redirected to a non-terminal destination), set the global override, either
//! directly or from the environment/tty detection helper:
//!
//! ```rust
//! use r3bl_colorize::*;
//!
//! global_color_mode::set_override(examine_env_vars_to_determine_color_mode(
//!     Stream::Stdout,
//! ));
//! ```
//!
//! For callers writing their own `fmt` hooks, [FormatSpec] captures a live
//! [std::fmt::Formatter]'s flags/width/precision and renders the equivalent
//! canonical `{:...}` specifier string.

#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi_escape_codes;
pub mod color;
pub mod colorized;
pub mod detect_color_mode;
pub mod format_spec;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use colorized::*;
pub use detect_color_mode::*;
pub use format_spec::*;
