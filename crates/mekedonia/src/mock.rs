//! In-process mock collaborators.
//!
//! Every external collaborator — auth, payment intents, payment sheet,
//! volunteer desk, impact feed — is pending integration with the real
//! backend, so [`MockBackend`] stands in for all of them behind the same
//! traits. It synthesizes users client-side, mints fake intents, records
//! what it was asked to do (so tests can assert a collaborator was NOT
//! invoked), and can be told to fail any individual seam.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::account::{AuthError, AuthGateway, Role, User};
use crate::donation::gateway::{
    IntentRequest, PaymentError, PaymentIntent, PaymentIntents, PaymentSheet, SheetRequest,
};
use crate::impact::{DonationStats, FeedError, ImpactFeed, RecentDonation};
use crate::volunteer::{SubmitError, VolunteerApplication, VolunteerDesk};

/// Derive a stable user identifier from an email address.
///
/// The real backend issues identifiers server-side; until then the mock
/// hashes the normalized address so repeated sign-ins agree on the id.
#[must_use]
pub fn derive_user_id(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    blake3::hash(normalized.as_bytes()).to_hex()[..16].to_string()
}

/// The stand-in for every external collaborator.
pub struct MockBackend {
    latency: Duration,
    intent_calls: AtomicUsize,
    present_calls: AtomicUsize,
    applications: Mutex<Vec<VolunteerApplication>>,
    initialized_sheet: Mutex<Option<SheetRequest>>,
    auth_failure: Mutex<Option<String>>,
    intent_failure: Mutex<Option<String>>,
    sheet_init_failure: Mutex<Option<String>>,
    sheet_present_failure: Mutex<Option<String>>,
    submit_failure: Mutex<Option<String>>,
    feed_failure: Mutex<Option<String>>,
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("latency", &self.latency)
            .field("intent_calls", &self.intent_calls)
            .field("present_calls", &self.present_calls)
            .finish_non_exhaustive()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a mock backend that responds immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// Create a mock backend that sleeps for `latency` before responding,
    /// approximating a network round-trip.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            intent_calls: AtomicUsize::new(0),
            present_calls: AtomicUsize::new(0),
            applications: Mutex::new(Vec::new()),
            initialized_sheet: Mutex::new(None),
            auth_failure: Mutex::new(None),
            intent_failure: Mutex::new(None),
            sheet_init_failure: Mutex::new(None),
            sheet_present_failure: Mutex::new(None),
            submit_failure: Mutex::new(None),
            feed_failure: Mutex::new(None),
        }
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn set(slot: &Mutex<Option<String>>, message: &str) {
        *slot.lock().expect("mock lock poisoned") = Some(message.to_string());
    }

    fn failure(slot: &Mutex<Option<String>>) -> Option<String> {
        slot.lock().expect("mock lock poisoned").clone()
    }

    /// Make every auth call fail with the given message.
    pub fn fail_auth(&self, message: &str) {
        Self::set(&self.auth_failure, message);
    }

    /// Make intent creation fail with the given message.
    pub fn fail_intent(&self, message: &str) {
        Self::set(&self.intent_failure, message);
    }

    /// Make payment-sheet initialization fail with the given message.
    pub fn fail_sheet_init(&self, message: &str) {
        Self::set(&self.sheet_init_failure, message);
    }

    /// Make payment-sheet presentation fail with the given message.
    pub fn fail_sheet_present(&self, message: &str) {
        Self::set(&self.sheet_present_failure, message);
    }

    /// Make volunteer submission fail with the given message.
    pub fn fail_submit(&self, message: &str) {
        Self::set(&self.submit_failure, message);
    }

    /// Make impact-data fetches fail with the given message.
    pub fn fail_feed(&self, message: &str) {
        Self::set(&self.feed_failure, message);
    }

    /// Number of payment intents requested.
    #[must_use]
    pub fn intent_requests(&self) -> usize {
        self.intent_calls.load(Ordering::SeqCst)
    }

    /// Number of payment-sheet presentations.
    #[must_use]
    pub fn sheet_presentations(&self) -> usize {
        self.present_calls.load(Ordering::SeqCst)
    }

    /// Number of volunteer applications received.
    #[must_use]
    pub fn applications_received(&self) -> usize {
        self.applications.lock().expect("mock lock poisoned").len()
    }

    /// The most recently received volunteer application, if any.
    #[must_use]
    pub fn last_application(&self) -> Option<VolunteerApplication> {
        self.applications
            .lock()
            .expect("mock lock poisoned")
            .last()
            .cloned()
    }

    /// The most recently initialized payment sheet, if any.
    #[must_use]
    pub fn last_sheet_request(&self) -> Option<SheetRequest> {
        self.initialized_sheet
            .lock()
            .expect("mock lock poisoned")
            .clone()
    }
}

#[async_trait::async_trait]
impl AuthGateway for MockBackend {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.auth_failure) {
            return Err(AuthError::Unavailable(message));
        }

        // Placeholder: credentials are not checked anywhere yet
        debug!("Mock sign-in for {email}");
        Ok(User {
            id: derive_user_id(email),
            email: email.trim().to_string(),
            name: "John Doe".to_string(),
            role: Role::User,
        })
    }

    async fn sign_up(&self, email: &str, _password: &str, name: &str) -> Result<User, AuthError> {
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.auth_failure) {
            return Err(AuthError::Unavailable(message));
        }

        debug!("Mock sign-up for {email}");
        Ok(User {
            id: derive_user_id(email),
            email: email.trim().to_string(),
            name: name.trim().to_string(),
            role: Role::User,
        })
    }
}

#[async_trait::async_trait]
impl PaymentIntents for MockBackend {
    async fn create_intent(&self, request: &IntentRequest) -> Result<PaymentIntent, PaymentError> {
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.intent_failure) {
            return Err(PaymentError::Backend(message));
        }

        let serial = self.intent_calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Mock intent {serial} for {} {}",
            request.amount_minor, request.currency
        );
        Ok(PaymentIntent {
            client_secret: format!("pi_mock_{serial}_secret"),
            ephemeral_key: format!("ek_mock_{serial}"),
            customer_id: "cus_mock".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl PaymentSheet for MockBackend {
    async fn init(&self, request: &SheetRequest) -> Result<(), PaymentError> {
        if let Some(message) = Self::failure(&self.sheet_init_failure) {
            return Err(PaymentError::SheetInit(message));
        }
        *self.initialized_sheet.lock().expect("mock lock poisoned") = Some(request.clone());
        Ok(())
    }

    async fn present(&self) -> Result<(), PaymentError> {
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.sheet_present_failure) {
            return Err(PaymentError::SheetPresent(message));
        }
        if self
            .initialized_sheet
            .lock()
            .expect("mock lock poisoned")
            .is_none()
        {
            return Err(PaymentError::SheetPresent(
                "payment sheet was not initialized".to_string(),
            ));
        }

        self.present_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait::async_trait]
impl VolunteerDesk for MockBackend {
    async fn submit(&self, application: &VolunteerApplication) -> Result<(), SubmitError> {
        // Simulated fixed delay standing in for the real endpoint
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.submit_failure) {
            return Err(SubmitError::Backend(message));
        }

        debug!("Mock volunteer application from {}", application.email);
        self.applications
            .lock()
            .expect("mock lock poisoned")
            .push(application.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ImpactFeed for MockBackend {
    async fn stats(&self) -> Result<DonationStats, FeedError> {
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.feed_failure) {
            return Err(FeedError::Backend(message));
        }

        Ok(DonationStats {
            total_donations: 150_000,
            total_donors: 1200,
            people_helped: 500,
            meals_provided: 15_000,
        })
    }

    async fn recent_donations(&self) -> Result<Vec<RecentDonation>, FeedError> {
        self.simulate_round_trip().await;
        if let Some(message) = Self::failure(&self.feed_failure) {
            return Err(FeedError::Backend(message));
        }

        Ok(vec![
            RecentDonation {
                id: "1".to_string(),
                name: "John D.".to_string(),
                amount: 100,
                date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap_or_default(),
                is_anonymous: false,
            },
            RecentDonation {
                id: "2".to_string(),
                name: "Anonymous".to_string(),
                amount: 50,
                date: NaiveDate::from_ymd_opt(2024, 2, 19).unwrap_or_default(),
                is_anonymous: true,
            },
            RecentDonation {
                id: "3".to_string(),
                name: "Sarah M.".to_string(),
                amount: 200,
                date: NaiveDate::from_ymd_opt(2024, 2, 18).unwrap_or_default(),
                is_anonymous: false,
            },
        ])
    }
}
