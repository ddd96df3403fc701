pub mod error;
pub mod random;

pub use error::Error;
pub use random::{RandomGenerator, RandomGeneratorSettings};

use tinyurl_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage and
/// hold no sequence state: the caller checks each candidate against the live
/// table and asks again on a collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;
    /// Generates a candidate short code.
    fn generate(&self) -> Self::Output;
}
