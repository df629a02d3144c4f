//! The donation flow.
//!
//! A donation starts as a loosely-filled [`DonationDraft`], is validated
//! into a [`DonationRequest`] on submission, and is then dispatched by
//! payment method: card donations go through the payment collaborator
//! (intent, then sheet), while the wallet and crypto methods are explicit
//! not-yet-available branches. A failed attempt is terminal; there is no
//! retry, no idempotency key, and no cancellation once dispatch begins.

pub mod amount;
pub mod gateway;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::account::User;
use crate::config::PaymentConfig;
use crate::validation::ValidationError;

use amount::AmountSource;
use gateway::{
    BillingDetails, IntentRequest, PaymentError, PaymentIntents, PaymentSheet, SheetRequest,
};

/// How a donation is paid.
///
/// A closed set: adding a method means adding a variant and a dispatch arm,
/// not a stringly-typed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Card payment through the payment-sheet collaborator.
    Card,
    /// Mobile wallet payment. Not yet available.
    Wallet,
    /// Crypto-asset payment. Not yet available.
    Crypto,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Wallet => write!(f, "wallet"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

/// Errors terminating a donation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonationError {
    /// The submission failed validation; no collaborator was contacted.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The selected payment method is not available yet.
    #[error("{method} donations are coming soon")]
    ComingSoon {
        /// The unavailable method.
        method: PaymentMethod,
    },

    /// The payment collaborator reported a failure.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl DonationError {
    /// Check if this is the not-yet-available outcome.
    #[must_use]
    pub fn is_coming_soon(&self) -> bool {
        matches!(self, Self::ComingSoon { .. })
    }
}

/// A donation being assembled from user input.
///
/// Fields accumulate as the user interacts with the screen; nothing is
/// checked until [`DonationDraft::finalize`] runs the schema and produces
/// an immutable [`DonationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DonationDraft {
    amount: Option<AmountSource>,
    method: Option<PaymentMethod>,
    recurring: bool,
    campaign_id: Option<String>,
}

impl DonationDraft {
    /// Start an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the amount source.
    #[must_use]
    pub fn amount(mut self, source: AmountSource) -> Self {
        self.amount = Some(source);
        self
    }

    /// Set the payment method.
    #[must_use]
    pub fn method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the recurring flag.
    #[must_use]
    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Attach the campaign this donation is for.
    #[must_use]
    pub fn campaign(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = Some(campaign_id.into());
        self
    }

    /// Validate the draft into a [`DonationRequest`].
    ///
    /// Constraints are checked in field order and the first violation is
    /// returned. Validation is pure and re-runs in full on every call.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ValidationError`].
    pub fn finalize(&self) -> Result<DonationRequest, ValidationError> {
        let amount_minor = self
            .amount
            .as_ref()
            .ok_or(ValidationError::AmountNotNumeric)?
            .resolve()?;

        Ok(DonationRequest {
            amount_minor,
            method: self.method.unwrap_or(PaymentMethod::Card),
            recurring: self.recurring,
            campaign_id: self.campaign_id.clone(),
        })
    }
}

/// A validated donation request.
///
/// Constructed transiently per submission and never persisted locally.
/// Invariant: `amount_minor > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRequest {
    /// Donation amount in minor currency units.
    pub amount_minor: u64,
    /// Selected payment method.
    pub method: PaymentMethod,
    /// Whether the donation recurs.
    pub recurring: bool,
    /// Campaign the donation is earmarked for, if any.
    pub campaign_id: Option<String>,
}

/// Confirmation of a completed donation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationReceipt {
    /// Donated amount in minor currency units.
    pub amount_minor: u64,
    /// Currency of the donation.
    pub currency: String,
    /// Method the donation was paid with.
    pub method: PaymentMethod,
    /// Whether the donation recurs.
    pub recurring: bool,
    /// Campaign the donation was earmarked for, if any.
    pub campaign_id: Option<String>,
    /// When the payment completed.
    pub completed_at: DateTime<Utc>,
}

/// Orchestrator for the donation flow.
///
/// Validates the draft, then dispatches to the payment collaborators by
/// method. One instance is constructed at startup and shared by reference.
pub struct DonationFlow {
    intents: Arc<dyn PaymentIntents>,
    sheet: Arc<dyn PaymentSheet>,
    merchant_display_name: String,
    currency: String,
}

impl std::fmt::Debug for DonationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DonationFlow")
            .field("merchant_display_name", &self.merchant_display_name)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

impl DonationFlow {
    /// Create a flow over the given collaborators and payment settings.
    #[must_use]
    pub fn new(
        intents: Arc<dyn PaymentIntents>,
        sheet: Arc<dyn PaymentSheet>,
        payment: &PaymentConfig,
    ) -> Self {
        Self {
            intents,
            sheet,
            merchant_display_name: payment.merchant_display_name.clone(),
            currency: payment.currency.clone(),
        }
    }

    /// Run a donation attempt for a signed-in donor.
    ///
    /// Validation happens first and fails fast: no collaborator is
    /// contacted for an invalid draft. Once dispatched, the attempt runs
    /// to completion or failure; a failed attempt must be resubmitted by
    /// the donor.
    ///
    /// # Errors
    ///
    /// Returns a [`DonationError`] describing the first validation
    /// violation, the not-yet-available outcome, or the collaborator
    /// failure.
    pub async fn process(
        &self,
        donor: &User,
        draft: &DonationDraft,
    ) -> Result<DonationReceipt, DonationError> {
        let request = draft.finalize()?;
        debug!(
            "Dispatching {} donation of {} {} (recurring: {})",
            request.method, request.amount_minor, self.currency, request.recurring
        );

        match request.method {
            PaymentMethod::Card => self.process_card(donor, &request).await,
            PaymentMethod::Wallet | PaymentMethod::Crypto => {
                debug!("{} donations not yet available", request.method);
                Err(DonationError::ComingSoon {
                    method: request.method,
                })
            }
        }
    }

    async fn process_card(
        &self,
        donor: &User,
        request: &DonationRequest,
    ) -> Result<DonationReceipt, DonationError> {
        let intent = self
            .intents
            .create_intent(&IntentRequest {
                amount_minor: request.amount_minor,
                currency: self.currency.clone(),
                recurring: request.recurring,
            })
            .await
            .map_err(|e| {
                warn!("Payment intent failed: {e}");
                e
            })?;

        let sheet = SheetRequest {
            merchant_display_name: self.merchant_display_name.clone(),
            customer_id: intent.customer_id,
            ephemeral_key_secret: intent.ephemeral_key,
            intent_client_secret: intent.client_secret,
            billing: BillingDetails {
                name: donor.name.clone(),
                email: donor.email.clone(),
            },
        };
        self.sheet.init(&sheet).await?;
        self.sheet.present().await?;

        info!(
            "Donation of {} {} completed for {}",
            request.amount_minor, self.currency, donor.email
        );
        Ok(DonationReceipt {
            amount_minor: request.amount_minor,
            currency: self.currency.clone(),
            method: request.method,
            recurring: request.recurring,
            campaign_id: request.campaign_id.clone(),
            completed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Role;
    use crate::mock::MockBackend;

    fn donor() -> User {
        User {
            id: "1".to_string(),
            email: "donor@example.org".to_string(),
            name: "John Doe".to_string(),
            role: Role::User,
        }
    }

    fn flow_over(backend: &Arc<MockBackend>) -> DonationFlow {
        DonationFlow::new(
            backend.clone(),
            backend.clone(),
            &PaymentConfig::default(),
        )
    }

    fn valid_draft(method: PaymentMethod) -> DonationDraft {
        DonationDraft::new()
            .amount(AmountSource::Preset(2500))
            .method(method)
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::Card.to_string(), "card");
        assert_eq!(PaymentMethod::Wallet.to_string(), "wallet");
        assert_eq!(PaymentMethod::Crypto.to_string(), "crypto");
    }

    #[test]
    fn test_finalize_valid_draft() {
        let request = DonationDraft::new()
            .amount(AmountSource::Custom("25.50".to_string()))
            .method(PaymentMethod::Card)
            .recurring(true)
            .campaign("meals-2026")
            .finalize()
            .unwrap();

        assert_eq!(request.amount_minor, 2550);
        assert_eq!(request.method, PaymentMethod::Card);
        assert!(request.recurring);
        assert_eq!(request.campaign_id.as_deref(), Some("meals-2026"));
    }

    #[test]
    fn test_finalize_empty_draft_fails_on_amount() {
        let result = DonationDraft::new().finalize();
        assert_eq!(result, Err(ValidationError::AmountNotNumeric));
    }

    #[test]
    fn test_finalize_rejects_non_positive_amounts() {
        for text in ["0", "-5", "0.00"] {
            let result = DonationDraft::new()
                .amount(AmountSource::Custom(text.to_string()))
                .finalize();
            assert_eq!(result, Err(ValidationError::AmountNotPositive), "{text}");
        }
    }

    #[tokio::test]
    async fn test_invalid_amount_never_reaches_collaborators() {
        let backend = Arc::new(MockBackend::new());
        let flow = flow_over(&backend);

        for text in ["0", "-10", "", "abc"] {
            let draft = DonationDraft::new()
                .amount(AmountSource::Custom(text.to_string()))
                .method(PaymentMethod::Card);
            let result = flow.process(&donor(), &draft).await;
            assert!(matches!(result, Err(DonationError::Invalid(_))), "{text}");
        }

        assert_eq!(backend.intent_requests(), 0);
        assert_eq!(backend.sheet_presentations(), 0);
    }

    #[tokio::test]
    async fn test_card_donation_succeeds() {
        let backend = Arc::new(MockBackend::new());
        let flow = flow_over(&backend);

        let receipt = flow
            .process(&donor(), &valid_draft(PaymentMethod::Card))
            .await
            .unwrap();

        assert_eq!(receipt.amount_minor, 2500);
        assert_eq!(receipt.currency, "usd");
        assert_eq!(receipt.method, PaymentMethod::Card);
        assert_eq!(backend.intent_requests(), 1);
        assert_eq!(backend.sheet_presentations(), 1);
    }

    #[tokio::test]
    async fn test_wallet_and_crypto_always_coming_soon() {
        let backend = Arc::new(MockBackend::new());
        let flow = flow_over(&backend);

        for method in [PaymentMethod::Wallet, PaymentMethod::Crypto] {
            let result = flow.process(&donor(), &valid_draft(method)).await;
            match result {
                Err(DonationError::ComingSoon { method: m }) => assert_eq!(m, method),
                other => panic!("expected coming-soon for {method}, got {other:?}"),
            }
        }

        // The stub branches are terminal: no collaborator was contacted
        assert_eq!(backend.intent_requests(), 0);
        assert_eq!(backend.sheet_presentations(), 0);
    }

    #[tokio::test]
    async fn test_coming_soon_for_any_valid_amount() {
        let backend = Arc::new(MockBackend::new());
        let flow = flow_over(&backend);

        for cents in [1000, 2500, 5000, 10000] {
            let draft = DonationDraft::new()
                .amount(AmountSource::Preset(cents))
                .method(PaymentMethod::Crypto);
            let result = flow.process(&donor(), &draft).await;
            assert!(result.unwrap_err().is_coming_soon());
        }
    }

    #[tokio::test]
    async fn test_intent_failure_surfaces_as_payment_error() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_intent("backend down");
        let flow = flow_over(&backend);

        let result = flow
            .process(&donor(), &valid_draft(PaymentMethod::Card))
            .await;

        assert!(matches!(
            result,
            Err(DonationError::Payment(PaymentError::Backend(_)))
        ));
        assert_eq!(backend.sheet_presentations(), 0);
    }

    #[tokio::test]
    async fn test_sheet_init_failure_stops_before_presentation() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_sheet_init("bad publishable key");
        let flow = flow_over(&backend);

        let result = flow
            .process(&donor(), &valid_draft(PaymentMethod::Card))
            .await;

        assert!(matches!(
            result,
            Err(DonationError::Payment(PaymentError::SheetInit(_)))
        ));
        assert_eq!(backend.intent_requests(), 1);
        assert_eq!(backend.sheet_presentations(), 0);
    }

    #[tokio::test]
    async fn test_sheet_present_failure_surfaces() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_sheet_present("card declined");
        let flow = flow_over(&backend);

        let result = flow
            .process(&donor(), &valid_draft(PaymentMethod::Card))
            .await;

        assert!(matches!(
            result,
            Err(DonationError::Payment(PaymentError::SheetPresent(_)))
        ));
    }

    #[tokio::test]
    async fn test_sheet_receives_billing_details() {
        let backend = Arc::new(MockBackend::new());
        let flow = flow_over(&backend);

        flow.process(&donor(), &valid_draft(PaymentMethod::Card))
            .await
            .unwrap();

        let sheet = backend.last_sheet_request().unwrap();
        assert_eq!(sheet.merchant_display_name, "Mekedonia Charity");
        assert_eq!(sheet.billing.name, "John Doe");
        assert_eq!(sheet.billing.email, "donor@example.org");
    }

    #[test]
    fn test_coming_soon_message() {
        let err = DonationError::ComingSoon {
            method: PaymentMethod::Wallet,
        };
        assert_eq!(err.to_string(), "wallet donations are coming soon");
        assert!(err.is_coming_soon());
    }
}
