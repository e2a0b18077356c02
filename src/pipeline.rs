use crate::data::frame::FeatureFrame;
use crate::error::SolventError;
use crate::vectorizer::SolventVectorizer;

// ---------------------------------------------------------------------------
// Featurizer – the transformer seam downstream stages consume
// ---------------------------------------------------------------------------

/// A feature generator that maps one column of categorical string values
/// onto a numeric [`FeatureFrame`].
///
/// Inputs are string-like per row; anything beyond that (shape and type
/// validation of the raw column) is the caller's contract.
pub trait Featurizer {
    /// Labels of the columns `transform` produces, in output order.
    fn feature_names(&self) -> Vec<String>;

    /// Vectorize one input column, one output row per input value.
    fn transform(&self, values: &[&str]) -> Result<FeatureFrame, SolventError>;
}

impl Featurizer for SolventVectorizer {
    fn feature_names(&self) -> Vec<String> {
        SolventVectorizer::feature_names(self)
            .iter()
            .map(|label| label.to_string())
            .collect()
    }

    fn transform(&self, values: &[&str]) -> Result<FeatureFrame, SolventError> {
        SolventVectorizer::transform(self, values)
    }
}
