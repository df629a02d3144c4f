//! Impact statistics and recent donations.
//!
//! Read-only display data sourced from the charity backend (or its mock):
//! aggregate totals and a short list of past donations. Nothing here is
//! ever mutated locally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Aggregate donation statistics.
///
/// Monetary totals are whole dollars, matching the backend wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    /// Total amount donated, in whole dollars.
    pub total_donations: u64,
    /// Number of distinct donors.
    pub total_donors: u64,
    /// Number of people helped.
    pub people_helped: u64,
    /// Number of meals provided.
    pub meals_provided: u64,
}

/// A single past donation, as shown on the impact screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDonation {
    /// Backend identifier of the donation.
    pub id: String,
    /// Donor name as recorded by the backend.
    pub name: String,
    /// Donated amount in whole dollars.
    pub amount: u64,
    /// Date of the donation.
    pub date: NaiveDate,
    /// Whether the donor chose to stay anonymous.
    pub is_anonymous: bool,
}

impl RecentDonation {
    /// The name to display, masking anonymous donors.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            "Anonymous"
        } else {
            &self.name
        }
    }
}

/// Errors fetching impact data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The backend could not serve the data.
    #[error("failed to fetch impact data: {0}")]
    Backend(String),
}

/// The impact-data collaborator.
#[async_trait::async_trait]
pub trait ImpactFeed: Send + Sync {
    /// Fetch the aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] if the statistics cannot be fetched.
    async fn stats(&self) -> std::result::Result<DonationStats, FeedError>;

    /// Fetch the recent donations list.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] if the list cannot be fetched.
    async fn recent_donations(&self) -> std::result::Result<Vec<RecentDonation>, FeedError>;
}

/// Format a whole-dollar amount as a US currency string, e.g. `$150,000.00`.
#[must_use]
pub fn format_usd(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.00")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_donation(anonymous: bool) -> RecentDonation {
        RecentDonation {
            id: "1".to_string(),
            name: "John D.".to_string(),
            amount: 100,
            date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            is_anonymous: anonymous,
        }
    }

    #[test]
    fn test_display_name_masks_anonymous_donors() {
        assert_eq!(sample_donation(false).display_name(), "John D.");
        assert_eq!(sample_donation(true).display_name(), "Anonymous");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(100), "$100.00");
        assert_eq!(format_usd(1500), "$1,500.00");
        assert_eq!(format_usd(150_000), "$150,000.00");
        assert_eq!(format_usd(1_234_567), "$1,234,567.00");
    }

    #[test]
    fn test_stats_wire_shape_is_camel_case() {
        let stats = DonationStats {
            total_donations: 150_000,
            total_donors: 1200,
            people_helped: 500,
            meals_provided: 15_000,
        };
        let json = serde_json::to_string(&stats).unwrap();

        assert!(json.contains("\"totalDonations\":150000"));
        assert!(json.contains("\"mealsProvided\":15000"));
    }

    #[test]
    fn test_stats_deserialize_from_backend_shape() {
        let json = r#"{
            "totalDonations": 150000,
            "totalDonors": 1200,
            "peopleHelped": 500,
            "mealsProvided": 15000
        }"#;
        let stats: DonationStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.total_donations, 150_000);
        assert_eq!(stats.total_donors, 1200);
    }

    #[test]
    fn test_recent_donation_deserialize_from_backend_shape() {
        let json = r#"{
            "id": "2",
            "name": "Anonymous",
            "amount": 50,
            "date": "2024-02-19",
            "isAnonymous": true
        }"#;
        let donation: RecentDonation = serde_json::from_str(json).unwrap();

        assert_eq!(donation.amount, 50);
        assert!(donation.is_anonymous);
        assert_eq!(
            donation.date,
            NaiveDate::from_ymd_opt(2024, 2, 19).unwrap()
        );
    }

    #[test]
    fn test_feed_error_display() {
        let err = FeedError::Backend("timeout".to_string());
        assert!(err.to_string().contains("timeout"));
    }
}
