//! # nmt - Interactive Offline Translation Console
//!
//! `nmt` translates sentences typed at the console between two languages,
//! using CTranslate2 translation models and SentencePiece tokenizers on the
//! local machine.
//!
//! ## Quick Start
//!
//! ```bash
//! # Models in ./en-hu-f32 and ./hu-en-f32
//! nmt
//!
//! # Another pair, models elsewhere
//! nmt --models-dir ~/models --from de --to en
//! ```
//!
//! Inside a session, `/back` returns to the menu and `/cls` clears the screen.
//!
//! ## Settings
//!
//! The settings editor persists two flags to `config.ini`:
//!
//! ```ini
//! saveToFile=1
//! singleLineOutput=0
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Settings file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Console line input.
pub mod input;

/// Main menu and settings editor.
pub mod menu;

/// Global output configuration (quiet mode, stderr status messages).
pub mod output;

/// Interactive translation sessions.
pub mod session;

/// Translation engine traits, pipeline and backends.
pub mod translation;

/// Terminal UI components (spinner, colors, screen control).
pub mod ui;
