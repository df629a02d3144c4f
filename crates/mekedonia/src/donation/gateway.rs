//! Payment collaborator seam for the donation flow.
//!
//! This module defines the request/response types crossing the async
//! boundary to the payment collaborator, and the traits the card flow
//! dispatches through: [`PaymentIntents`] for the backend that mints
//! payment intents, and [`PaymentSheet`] for the device-side sheet the
//! donor completes the payment in.

use thiserror::Error;

/// A request to create a payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRequest {
    /// Donation amount in minor currency units (cents).
    pub amount_minor: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Whether this is a recurring donation.
    pub recurring: bool,
}

/// The intent/customer/ephemeral-key triple minted by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    /// Client secret of the payment intent.
    pub client_secret: String,
    /// Ephemeral key secret scoped to the customer.
    pub ephemeral_key: String,
    /// Identifier of the customer the intent belongs to.
    pub customer_id: String,
}

/// Billing details attached to the payment sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingDetails {
    /// The donor's display name.
    pub name: String,
    /// The donor's email address.
    pub email: String,
}

/// Everything the payment sheet needs to be initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    /// Merchant name shown on the sheet.
    pub merchant_display_name: String,
    /// Customer the sheet is presented for.
    pub customer_id: String,
    /// Ephemeral key secret for the customer.
    pub ephemeral_key_secret: String,
    /// Client secret of the payment intent being confirmed.
    pub intent_client_secret: String,
    /// Billing details prefilled on the sheet.
    pub billing: BillingDetails,
}

/// Errors reported by the payment collaborator.
///
/// All variants are terminal for the current attempt; the donor has to
/// resubmit manually. No distinction is made between transient and
/// logical failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The payment backend rejected or failed the intent request.
    #[error("payment request failed: {0}")]
    Backend(String),

    /// The payment backend returned a response we could not understand.
    #[error("invalid response from payment service: {0}")]
    InvalidResponse(String),

    /// The payment sheet failed to initialize.
    #[error("payment sheet failed to initialize: {0}")]
    SheetInit(String),

    /// The payment sheet was presented but the payment did not complete.
    #[error("payment was not completed: {0}")]
    SheetPresent(String),
}

/// The payment-intent collaborator.
///
/// Implemented by the HTTP adapter against the charity backend and by the
/// in-process mock.
#[async_trait::async_trait]
pub trait PaymentIntents: Send + Sync {
    /// Create a payment intent for the given amount.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the intent cannot be created.
    async fn create_intent(
        &self,
        request: &IntentRequest,
    ) -> std::result::Result<PaymentIntent, PaymentError>;
}

/// The device-side payment sheet.
///
/// The sheet is initialized with merchant and billing details, then
/// presented for the donor to complete. Once presented it runs to
/// completion or failure; there is no cancellation.
#[async_trait::async_trait]
pub trait PaymentSheet: Send + Sync {
    /// Initialize the sheet for an intent.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if initialization fails.
    async fn init(&self, request: &SheetRequest) -> std::result::Result<(), PaymentError>;

    /// Present the initialized sheet and wait for the outcome.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the payment does not complete.
    async fn present(&self) -> std::result::Result<(), PaymentError>;
}
