use serde::{Deserialize, Serialize};

use crate::data::frame::FeatureFrame;
use crate::data::table::descriptor_row;
use crate::error::SolventError;

/// Number of independently selectable descriptor columns. The table stores
/// two further reserved columns that are never exposed through selection.
pub const SELECTABLE_DESCRIPTORS: usize = 13;

// ---------------------------------------------------------------------------
// SolventSelection – which descriptor columns to emit
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// Per-descriptor selection flags, all `true` by default.
///
/// Every field carries a serde default of `true`, so states persisted by
/// older versions with any (or all) flags absent restore as "select all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolventSelection {
    #[serde(default = "default_true")]
    pub polarizability_form1: bool,
    #[serde(default = "default_true")]
    pub polarizability_form2: bool,
    #[serde(default = "default_true")]
    pub permettivity_form1: bool,
    #[serde(default = "default_true")]
    pub permettivity_form2: bool,
    #[serde(default = "default_true")]
    pub permettivity_form3: bool,
    #[serde(default = "default_true")]
    pub permettivity_form4: bool,
    #[serde(default = "default_true")]
    pub permettivity_polarizability: bool,
    #[serde(default = "default_true")]
    pub alpha_kamlet_taft: bool,
    #[serde(default = "default_true")]
    pub beta_kamlet_taft: bool,
    #[serde(default = "default_true")]
    pub pi_kamlet_taft: bool,
    #[serde(default = "default_true")]
    pub spp_katalan: bool,
    #[serde(default = "default_true")]
    pub sb_katalan: bool,
    #[serde(default = "default_true")]
    pub sa_katalan: bool,
}

impl Default for SolventSelection {
    fn default() -> Self {
        SolventSelection {
            polarizability_form1: true,
            polarizability_form2: true,
            permettivity_form1: true,
            permettivity_form2: true,
            permettivity_form3: true,
            permettivity_form4: true,
            permettivity_polarizability: true,
            alpha_kamlet_taft: true,
            beta_kamlet_taft: true,
            pi_kamlet_taft: true,
            spp_katalan: true,
            sb_katalan: true,
            sa_katalan: true,
        }
    }
}

impl SolventSelection {
    /// Selection with every flag off. Not constructible into a vectorizer;
    /// a starting point for building sparse selections field by field.
    pub fn none() -> Self {
        SolventSelection {
            polarizability_form1: false,
            polarizability_form2: false,
            permettivity_form1: false,
            permettivity_form2: false,
            permettivity_form3: false,
            permettivity_form4: false,
            permettivity_polarizability: false,
            alpha_kamlet_taft: false,
            beta_kamlet_taft: false,
            pi_kamlet_taft: false,
            spp_katalan: false,
            sb_katalan: false,
            sa_katalan: false,
        }
    }

    /// The (label, flag) pairs in canonical column order. This array is the
    /// single source of truth for both column order and column labels.
    pub fn labelled_flags(&self) -> [(&'static str, bool); SELECTABLE_DESCRIPTORS] {
        [
            ("Polarizability (form1)", self.polarizability_form1),
            ("Polarizability (form2)", self.polarizability_form2),
            ("Permettivity (form1)", self.permettivity_form1),
            ("Permettivity (form2)", self.permettivity_form2),
            ("Permettivity (form3)", self.permettivity_form3),
            ("Permettivity (form4)", self.permettivity_form4),
            ("Permettivity-Polarizability", self.permettivity_polarizability),
            ("alpha Kamlet-Taft", self.alpha_kamlet_taft),
            ("beta Kamlet-Taft", self.beta_kamlet_taft),
            ("pi Kamlet-Taft", self.pi_kamlet_taft),
            ("SPP Katalan", self.spp_katalan),
            ("SB Katalan", self.sb_katalan),
            ("SA Katalan", self.sa_katalan),
        ]
    }

    /// Number of selected descriptors.
    pub fn selected_count(&self) -> usize {
        self.labelled_flags().iter().filter(|(_, on)| *on).count()
    }
}

// ---------------------------------------------------------------------------
// SolventVectorizer – name column → descriptor feature frame
// ---------------------------------------------------------------------------

/// Maps a column of solvent names onto the selected descriptor columns of
/// the embedded table.
///
/// The header (ordered labels of the selected descriptors) and the matching
/// positional mask are derived eagerly from the selection: at construction,
/// on every [`set_selection`](Self::set_selection), and on deserialization.
/// A failed update leaves the previous state intact.
///
/// The type is `Send + Sync`; updates take `&mut self`, so concurrent use
/// with reconfiguration needs external synchronization (e.g. an `RwLock`
/// around the whole vectorizer), which also makes an update and the
/// transforms that follow it atomic as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SolventSelection", into = "SolventSelection")]
pub struct SolventVectorizer {
    selection: SolventSelection,
    header: Vec<&'static str>,
    mask: [bool; SELECTABLE_DESCRIPTORS],
}

/// Derive (header, mask) from a selection, in canonical column order.
///
/// The mask always has one slot per selectable descriptor; the header holds
/// only the labels of the true slots, in the same relative order.
fn derive_header(
    selection: &SolventSelection,
) -> Result<(Vec<&'static str>, [bool; SELECTABLE_DESCRIPTORS]), SolventError> {
    let mut header = Vec::new();
    let mut mask = [false; SELECTABLE_DESCRIPTORS];

    for (slot, (label, on)) in selection.labelled_flags().into_iter().enumerate() {
        if on {
            header.push(label);
            mask[slot] = true;
        }
    }

    if header.is_empty() {
        return Err(SolventError::Configuration(
            "required at least one parameter".into(),
        ));
    }
    Ok((header, mask))
}

impl SolventVectorizer {
    /// Build a vectorizer for the given selection.
    ///
    /// Fails if every flag is off: an empty feature set is rejected here,
    /// never silently produced by `transform`.
    pub fn new(selection: SolventSelection) -> Result<Self, SolventError> {
        let (header, mask) = derive_header(&selection)?;
        log::debug!(
            "solvent vectorizer: {} of {SELECTABLE_DESCRIPTORS} descriptors selected",
            header.len()
        );
        Ok(SolventVectorizer {
            selection,
            header,
            mask,
        })
    }

    /// Current selection flags.
    pub fn selection(&self) -> &SolventSelection {
        &self.selection
    }

    /// Replace the selection, re-deriving the header before it can be
    /// observed. On error the previous selection and header stay in effect.
    pub fn set_selection(&mut self, selection: SolventSelection) -> Result<(), SolventError> {
        let (header, mask) = derive_header(&selection)?;
        log::debug!(
            "solvent vectorizer: selection updated, {} of {SELECTABLE_DESCRIPTORS} descriptors",
            header.len()
        );
        self.selection = selection;
        self.header = header;
        self.mask = mask;
        Ok(())
    }

    /// Apply a partial update to a copy of the current selection, then
    /// validate and commit it like [`set_selection`](Self::set_selection).
    pub fn update_selection<F>(&mut self, apply: F) -> Result<(), SolventError>
    where
        F: FnOnce(&mut SolventSelection),
    {
        let mut selection = self.selection.clone();
        apply(&mut selection);
        self.set_selection(selection)
    }

    /// Labels of the columns `transform` produces, in output order.
    pub fn feature_names(&self) -> &[&'static str] {
        &self.header
    }

    /// Vectorize a column of exact solvent names.
    ///
    /// One output row per input value, in input order, no deduplication.
    /// The first unknown name fails the whole call; no partial frame is
    /// returned. Lookup misses are not transient, so callers must not retry.
    pub fn transform<S: AsRef<str>>(&self, solvents: &[S]) -> Result<FeatureFrame, SolventError> {
        let mut rows = Vec::with_capacity(solvents.len());

        for solvent in solvents {
            let name = solvent.as_ref();
            let values = descriptor_row(name)
                .ok_or_else(|| SolventError::UnknownSolvent(name.to_string()))?;

            // The mask covers the selectable prefix; the reserved trailing
            // columns never reach the output.
            let row: Vec<f64> = values
                .iter()
                .zip(self.mask.iter())
                .filter(|(_, on)| **on)
                .map(|(value, _)| *value)
                .collect();
            rows.push(row);
        }

        let columns = self.header.iter().map(|label| label.to_string()).collect();
        Ok(FeatureFrame::new(columns, rows))
    }
}

impl Default for SolventVectorizer {
    fn default() -> Self {
        // All-true selection always yields a non-empty header.
        Self::new(SolventSelection::default()).expect("default selection is non-empty")
    }
}

// -- serde bridge: persist the flags only, re-derive on restore --

impl TryFrom<SolventSelection> for SolventVectorizer {
    type Error = SolventError;

    fn try_from(selection: SolventSelection) -> Result<Self, Self::Error> {
        SolventVectorizer::new(selection)
    }
}

impl From<SolventVectorizer> for SolventSelection {
    fn from(vectorizer: SolventVectorizer) -> Self {
        vectorizer.selection
    }
}
