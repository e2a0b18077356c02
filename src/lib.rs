//! Solvent physicochemical descriptor vectorizer.
//!
//! Maps exact solvent names onto rows of empirical descriptor values
//! (polarizability and permittivity forms, Kamlet-Taft and Katalan
//! parameters) drawn from an embedded 61-solvent reference table, with a
//! per-descriptor selection of which columns to emit.
//!
//! ```
//! use rusty_solvent::{SolventSelection, SolventVectorizer};
//!
//! let vectorizer = SolventVectorizer::new(SolventSelection::default())?;
//! let frame = vectorizer.transform(&["water", "methanol"])?;
//!
//! assert_eq!(frame.len(), 2);
//! assert_eq!(frame.columns().len(), vectorizer.feature_names().len());
//! # Ok::<(), rusty_solvent::SolventError>(())
//! ```

pub mod data;
pub mod error;
pub mod pipeline;
pub mod vectorizer;

pub use data::frame::FeatureFrame;
pub use data::table::{descriptor_row, solvent_count, solvent_names, DESCRIPTOR_COLUMNS};
pub use error::SolventError;
pub use pipeline::Featurizer;
pub use vectorizer::{SolventSelection, SolventVectorizer, SELECTABLE_DESCRIPTORS};
