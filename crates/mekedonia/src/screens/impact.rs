//! The impact screen.
//!
//! Loads the aggregate statistics and recent donations from the impact
//! feed and exposes them as a view model with preformatted figures. The
//! data is display-only and never mutated locally.

use crate::impact::{format_usd, DonationStats, FeedError, ImpactFeed, RecentDonation};

/// Loaded impact data, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactView {
    /// Aggregate statistics.
    pub stats: DonationStats,
    /// Recent donations, newest first.
    pub recent: Vec<RecentDonation>,
}

impl ImpactView {
    /// Total donations, formatted as currency.
    #[must_use]
    pub fn total_donations_display(&self) -> String {
        format_usd(self.stats.total_donations)
    }

    /// A recent donation's amount, formatted as currency.
    #[must_use]
    pub fn amount_display(donation: &RecentDonation) -> String {
        format_usd(donation.amount)
    }
}

/// State of the impact screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactScreen {
    loading: bool,
}

impl ImpactScreen {
    /// Create the screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load the impact data.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] if either fetch fails; the screen then shows
    /// nothing and the user can retry by reopening it.
    pub async fn load(&mut self, feed: &dyn ImpactFeed) -> Result<ImpactView, FeedError> {
        self.loading = true;
        let stats = feed.stats().await;
        let recent = feed.recent_donations().await;
        self.loading = false;

        Ok(ImpactView {
            stats: stats?,
            recent: recent?,
        })
    }
}
