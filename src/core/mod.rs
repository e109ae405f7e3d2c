//! # Core Application Logic
//!
//! Everything the file manager knows that is not about the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │          CORE           │
//!                    │      (this module)      │
//!                    │                         │
//!                    │  • FileStore (fs ops)   │
//!                    │  • Menu (options, keys) │
//!                    │  • Messages (i18n)      │
//!                    │  • Config (TOML + env)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (crossterm)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`files`]: `FileStore`, the list/read/write/exists/remove wrappers
//! - [`menu`]: `MenuOption` list and the `MenuChoice` parser
//! - [`messages`]: per-language message catalogues
//! - [`config`]: `~/.fileman/config.toml` loading and resolution

pub mod config;
pub mod files;
pub mod menu;
pub mod messages;
