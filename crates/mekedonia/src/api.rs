//! HTTP adapter for the charity backend.
//!
//! This adapter owns transport details only: request serialization, timeout
//! and HTTP error mapping, and JSON decoding into the domain types. It
//! implements the payment-intent, volunteer-desk and impact-feed seams
//! against the placeholder backend endpoints; the payment sheet stays
//! device-side and is not served over HTTP.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::donation::gateway::{IntentRequest, PaymentError, PaymentIntent, PaymentIntents};
use crate::impact::{DonationStats, FeedError, ImpactFeed, RecentDonation};
use crate::volunteer::{SubmitError, VolunteerApplication, VolunteerDesk};

/// Path for creating payment intents.
const CREATE_INTENT_PATH: &str = "/create-payment-intent";

/// Path for submitting volunteer applications.
const VOLUNTEER_PATH: &str = "/volunteer-applications";

/// Path for the aggregate donation statistics.
const STATS_PATH: &str = "/donation-stats";

/// Path for the recent donations list.
const RECENT_DONATIONS_PATH: &str = "/recent-donations";

/// Wire shape of an intent request.
#[derive(Debug, Serialize)]
struct IntentRequestDto {
    amount: u64,
    currency: String,
    recurring: bool,
}

/// Wire shape of an intent response.
#[derive(Debug, Deserialize)]
struct IntentResponseDto {
    #[serde(rename = "paymentIntent")]
    payment_intent: String,
    #[serde(rename = "ephemeralKey")]
    ephemeral_key: String,
    customer: String,
}

/// HTTP client for the charity backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given base URL with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<reqwest::Response, String> {
        let url = self.endpoint(path);
        debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request to {path} failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("{path} returned {status}"));
        }
        Ok(response)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> std::result::Result<T, String> {
        let url = self.endpoint(path);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("request to {path} failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("{path} returned {status}"));
        }
        response
            .json()
            .await
            .map_err(|e| format!("invalid response from {path}: {e}"))
    }
}

#[async_trait::async_trait]
impl PaymentIntents for ApiClient {
    async fn create_intent(&self, request: &IntentRequest) -> Result<PaymentIntent, PaymentError> {
        let body = IntentRequestDto {
            amount: request.amount_minor,
            currency: request.currency.clone(),
            recurring: request.recurring,
        };
        let response = self
            .post_json(CREATE_INTENT_PATH, &body)
            .await
            .map_err(PaymentError::Backend)?;

        let dto: IntentResponseDto = response
            .json()
            .await
            .map_err(|e| PaymentError::InvalidResponse(e.to_string()))?;

        Ok(PaymentIntent {
            client_secret: dto.payment_intent,
            ephemeral_key: dto.ephemeral_key,
            customer_id: dto.customer,
        })
    }
}

#[async_trait::async_trait]
impl VolunteerDesk for ApiClient {
    async fn submit(&self, application: &VolunteerApplication) -> Result<(), SubmitError> {
        self.post_json(VOLUNTEER_PATH, application)
            .await
            .map_err(SubmitError::Backend)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ImpactFeed for ApiClient {
    async fn stats(&self) -> Result<DonationStats, FeedError> {
        self.get_json(STATS_PATH).await.map_err(FeedError::Backend)
    }

    async fn recent_donations(&self) -> Result<Vec<RecentDonation>, FeedError> {
        self.get_json(RECENT_DONATIONS_PATH)
            .await
            .map_err(FeedError::Backend)
    }
}
