//! Cut a sheet of concatenated SVG icons into one file per icon.
//!
//! Each icon in the sheet is preceded by a comment naming its file,
//! `<!-- 24x24-plus.svg -->`, and runs from its `<svg` tag to the
//! matching `</svg>`.
pub mod config;
pub mod marker;
pub mod scanner;
pub mod sheet_file;
pub mod split;
