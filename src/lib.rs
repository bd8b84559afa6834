//! # t2 - Double Translation CLI
//!
//! `t2` translates text from a source language to a pivot language with an
//! online translation service, translates the result back, and prints a
//! diff against the original. Words that changed on the round trip are
//! often the ones a reader would misunderstand.
//!
//! ## Quick Start
//!
//! ```bash
//! # Round trip through French (the default pivot)
//! t2 "I will treat my wound."
//!
//! # Only the diff, through German, with Google
//! t2 -d -p DE -t google "I will treat my wound."
//!
//! # Translate the clipboard and copy the result back
//! t2 clipboard -c
//!
//! # Character quota of the DeepL account
//! t2 usage
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/t2/config.toml`:
//!
//! ```toml
//! [t2]
//! service = "deepl"
//! source = "EN-US"
//! pivot = "FR"
//!
//! [services.deepl]
//! endpoint = "https://api-free.deepl.com/v2/translate"
//! api_key_env = "DEEPL_API_KEY"
//!
//! [services.google]
//! endpoint = "https://translation.googleapis.com/language/translate/v2"
//! api_key_env = "GOOGLE_TRANSLATE_API_KEY"
//! ```

/// Translation service clients (DeepL, Google).
pub mod backend;

/// Command-line interface definitions and handlers.
pub mod cli;

/// System clipboard access.
pub mod clipboard;

/// Configuration file management and resolution.
pub mod config;

/// Rendering of original-vs-translated differences.
pub mod diff;

/// The double-translation workflow.
pub mod double;

/// Error kinds returned by the library.
pub mod error;

/// Input reading from arguments and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
