#![doc(
    html_logo_url = "https://raw.githubusercontent.com/grammar-lens/grammar-lens/main/assets/grammar-lens.svg",
    issue_tracker_base_url = "https://github.com/grammar-lens/grammar-lens/issues/"
)]

//! Correction service for grammar-lens.
//!
//! [`GrammarService`] runs an injected [`grammar_lens::Corrector`] and
//! explains its output: character edits, classified errors, and the
//! sentence-structure analysis of the original text, bundled into a
//! [`CheckReport`].
//!
//! ```
//! use grammar_lens::CollaboratorResult;
//! use grammar_lens_service::GrammarService;
//!
//! let service = GrammarService::builder()
//!     .corrector(|text: &str| -> CollaboratorResult<String> {
//!         Ok(text.replace("don't", "doesn't"))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let report = service.check("She don't like cats.").unwrap();
//! assert_eq!(report.corrected_text, "She doesn't like cats.");
//! assert_eq!(report.edits.len(), 1);
//! ```

mod config;
mod error;
mod service;

pub use config::ServiceConfig;
pub use error::{ConfigError, ServiceError, ServiceResult};
pub use service::{CheckReport, GrammarService, GrammarServiceBuilder};
