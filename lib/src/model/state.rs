/// A marker type indicating that a model is **not yet fitted**.
///
/// Used as the state parameter of [`LinearModel`](super::linear::LinearModel):
/// - Fitting (`Trainer::fit`, `LinearRegression::fit`) requires an `Unfitted` model.
/// - Prediction is **not available** until the model becomes `Fitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unfitted;

/// A marker type indicating that a model has been **fitted**.
///
/// A `Fitted` model holds only inference parameters (slope, intercept and the
/// training domain). It implements [`InferenceModel`](super::InferenceModel) and
/// can be saved to or loaded from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fitted;
