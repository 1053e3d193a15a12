//! Field-name cleaning for infobox fields.
//!
//! Raw infobox field names scraped from Wikipedia are noisy: mixed case,
//! stray markup, citation markers, plural qualifiers, trailing colons. This
//! crate normalizes them so that equivalent fields share a single label.
//!
//! # Modules
//!
//! - [`clean`]: The [`FieldCleaner`] and the [`clean()`](clean::clean) shortcut
//!
//! # Example
//!
//! ```rust
//! use wikimap_content::clean;
//!
//! assert_eq!(clean("Parent club(s)"), "parent club");
//! assert_eq!(clean("Women's coach"), "women's coach");
//! assert_eq!(clean("File: foo"), "File: foo");
//! ```

pub mod clean;

// Re-export commonly used items
pub use clean::{FieldCleaner, clean};
