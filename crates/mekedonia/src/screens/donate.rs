//! The donate screen.
//!
//! Holds the amount selection, payment method and recurring flag, and maps
//! every outcome of the donation flow to an alert. Resubmission while a
//! request is outstanding is prevented by presentation (the submit control
//! is disabled while `is_busy`); this is advisory, not a hard lock.

use crate::account::SessionManager;
use crate::config::PaymentConfig;
use crate::donation::amount::{AmountPicker, CENTS_PER_DOLLAR};
use crate::donation::{DonationDraft, DonationError, DonationFlow, PaymentMethod};

use super::Alert;

/// Default preset selected when the screen opens, in whole dollars.
const DEFAULT_PRESET_DOLLARS: u64 = 25;

/// State of the donate screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonateScreen {
    picker: AmountPicker,
    method: PaymentMethod,
    recurring: bool,
    campaign_id: Option<String>,
    busy: bool,
}

impl DonateScreen {
    /// Create the screen over the configured preset amounts.
    ///
    /// The $25 preset starts selected when configured, matching the
    /// screen's default suggestion.
    #[must_use]
    pub fn new(payment: &PaymentConfig) -> Self {
        let mut picker = AmountPicker::new(&payment.preset_amounts);
        picker.select_preset(DEFAULT_PRESET_DOLLARS * CENTS_PER_DOLLAR);
        Self {
            picker,
            method: PaymentMethod::Card,
            recurring: false,
            campaign_id: None,
            busy: false,
        }
    }

    /// The amount picker.
    #[must_use]
    pub fn picker(&self) -> &AmountPicker {
        &self.picker
    }

    /// Select a preset amount in minor units.
    ///
    /// Returns `false` if the amount is not one of the presets.
    pub fn select_preset(&mut self, cents: u64) -> bool {
        self.picker.select_preset(cents)
    }

    /// Type into the custom amount field.
    pub fn set_custom_amount(&mut self, text: impl Into<String>) {
        self.picker.set_custom(text);
    }

    /// The selected payment method.
    #[must_use]
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Select the payment method.
    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    /// Whether the recurring toggle is on.
    #[must_use]
    pub fn recurring(&self) -> bool {
        self.recurring
    }

    /// Toggle the recurring donation flag.
    pub fn set_recurring(&mut self, recurring: bool) {
        self.recurring = recurring;
    }

    /// Earmark the donation for a campaign.
    pub fn set_campaign(&mut self, campaign_id: Option<String>) {
        self.campaign_id = campaign_id;
    }

    /// Whether a submission is outstanding.
    ///
    /// Presentation should disable the submit control while this is true.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit the donation.
    ///
    /// Requires a signed-in user; validation and dispatch follow the
    /// donation flow contract. The returned alert is what the user sees,
    /// whatever the outcome.
    pub async fn submit(&mut self, session: &SessionManager, flow: &DonationFlow) -> Alert {
        let Some(donor) = session.current_user() else {
            return Alert::new(
                "Please sign in",
                "You need to be signed in to make a donation",
            );
        };

        let mut draft = DonationDraft::new()
            .amount(self.picker.source())
            .method(self.method)
            .recurring(self.recurring);
        if let Some(campaign_id) = &self.campaign_id {
            draft = draft.campaign(campaign_id.clone());
        }

        self.busy = true;
        let result = flow.process(donor, &draft).await;
        self.busy = false;

        match result {
            Ok(_) => Alert::success("Thank you for your donation!"),
            Err(DonationError::Invalid(e)) => Alert::validation(e.to_string()),
            Err(err @ DonationError::ComingSoon { .. }) => {
                Alert::new("Coming soon", err.to_string())
            }
            Err(DonationError::Payment(e)) => Alert::error(e.to_string()),
        }
    }
}
