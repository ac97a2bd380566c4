//! Validation report builder and renderers.
//!
//! Validators append [`Section`]s to a [`Report`] in execution order; the
//! finished report is rendered once, as a self-contained HTML document
//! ([`render_html`]) or plain text ([`render_text`]).

pub mod document;
pub mod error;
pub mod html;
pub mod output;
pub mod report;
pub mod text;

pub use document::{DocumentInfo, ReportFormat};
pub use error::{ReportError, Result};
pub use html::{render_html, render_html_string};
pub use output::write_report;
pub use report::{Report, Section, Separator, Style};
pub use text::render_text;
