//! Gift suggestion service: the one external effect of the application.

mod client;
mod error;

use async_trait::async_trait;

use crate::form::FormInput;

pub use client::{GenerateResponse, HttpGiftService};
pub use error::ServiceError;

/// Outcome of one suggestion request.
pub type GiftOutcome = Result<String, ServiceError>;

/// Turns form input into a textual gift suggestion.
#[async_trait]
pub trait GiftService: Send + Sync {
    /// Short description for the header and logs.
    fn name(&self) -> &str;

    /// Submit `input` and wait for the single response.
    async fn generate(&self, input: &FormInput) -> GiftOutcome;
}
