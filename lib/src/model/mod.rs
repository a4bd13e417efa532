//! Regression models with compile-time fit state.
//!
//! Models carry their state as a type parameter ([`Unfitted`] or [`Fitted`]), so
//! calling `predict` on a model that was never fitted does not compile.

use crate::error::ModelIoError;
use crate::serialization::SerializableParams;
use log::trace;
use std::path::Path;

pub mod linear;
pub mod state;

pub use state::{Fitted, Unfitted};

/// Inference interface of a fitted model.
///
/// Besides prediction, a fitted model can hand out its parameters as a plain
/// serializable struct and be rebuilt from one, which is what the file helpers use.
pub trait InferenceModel {
    type InputSingle;
    type OutputSingle;
    type InputBatch: ?Sized;
    type OutputBatch;
    /// Plain-data representation of the learned parameters.
    type ParamsRepr: SerializableParams;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;

    fn extract_params(&self) -> Self::ParamsRepr;

    /// Rebuilds a fitted model, rejecting parameters it could not have learned.
    fn from_params(params: Self::ParamsRepr) -> Result<Self, ModelIoError>
    where
        Self: Sized;

    /// Save the fitted model to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelIoError> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(|e| ModelIoError::Serialization(e.to_string()))?;
        trace!("writing {} model bytes to {}", bytes.len(), path.as_ref().display());
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a fitted model from a file written by [`save_to_file`](Self::save_to_file).
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelIoError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path.as_ref())?;
        trace!("read {} model bytes from {}", bytes.len(), path.as_ref().display());
        let params = Self::ParamsRepr::from_bytes(&bytes)
            .map_err(|e| ModelIoError::Serialization(e.to_string()))?;
        Self::from_params(params)
    }
}
