//! Serialization of fitted model parameters.
//!
//! Fitted models expose their numbers as a plain parameter struct; this module turns
//! such structs into bytes and back without tying models to a particular format.

use std::error::Error;

/// A parameter representation that can be serialized to and from bytes.
///
/// Implementors should contain only plain numerical data (`f64`, small structs of them).
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Pair {
        a: f64,
        b: f64,
    }

    #[test]
    fn test_bytes_preserve_exact_bits() {
        let original = Pair {
            a: 0.1 + 0.2,
            b: -1234.5678,
        };
        let bytes = original.to_bytes().unwrap();
        let restored = Pair::from_bytes(&bytes).unwrap();
        assert_eq!(original.a.to_bits(), restored.a.to_bits());
        assert_eq!(original, restored);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = Pair { a: 1.0, b: 2.0 }.to_bytes().unwrap();
        assert!(Pair::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
