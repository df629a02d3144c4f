//! Donation amounts.
//!
//! Amounts are carried as integer minor currency units (cents) end to end;
//! user input is parsed from dollar strings without ever touching floating
//! point. The [`AmountPicker`] models the preset-or-custom selection on the
//! donate screen, where the two sources are mutually exclusive.

use crate::validation::ValidationError;

/// Number of minor units in one dollar.
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Where a submitted amount came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountSource {
    /// One of the predefined amounts, in minor units.
    Preset(u64),
    /// Free-text input from the custom amount field.
    Custom(String),
}

impl AmountSource {
    /// Resolve the source to an amount in minor units.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a custom value cannot be parsed or
    /// the resolved amount is not positive.
    pub fn resolve(&self) -> Result<u64, ValidationError> {
        let cents = match self {
            Self::Preset(cents) => *cents,
            Self::Custom(text) => parse_dollars(text)?,
        };
        if cents == 0 {
            return Err(ValidationError::AmountNotPositive);
        }
        Ok(cents)
    }
}

/// Parse a dollar string (e.g. `"25"`, `"25.50"`, `"$10"`) into minor units.
///
/// Accepts at most two fractional digits and an optional leading dollar
/// sign. Negative values parse but are rejected as not positive.
///
/// # Errors
///
/// Returns [`ValidationError::AmountNotNumeric`] for unparseable input and
/// [`ValidationError::AmountNotPositive`] for negative values.
pub fn parse_dollars(text: &str) -> Result<u64, ValidationError> {
    let trimmed = text.trim().trim_start_matches('$');
    if trimmed.is_empty() {
        return Err(ValidationError::AmountNotNumeric);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(ValidationError::AmountNotNumeric);
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::AmountNotNumeric);
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::AmountNotNumeric);
    }

    let dollars: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| ValidationError::AmountNotNumeric)?
    };

    let cents: u64 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{fraction:0<2}");
        padded
            .parse()
            .map_err(|_| ValidationError::AmountNotNumeric)?
    };

    let total = dollars
        .checked_mul(CENTS_PER_DOLLAR)
        .and_then(|d| d.checked_add(cents))
        .ok_or(ValidationError::AmountNotNumeric)?;

    if negative && total > 0 {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(total)
}

/// Format an amount in minor units as a dollar string (e.g. `"25"`,
/// `"25.50"`).
#[must_use]
pub fn format_dollars(cents: u64) -> String {
    let dollars = cents / CENTS_PER_DOLLAR;
    let remainder = cents % CENTS_PER_DOLLAR;
    if remainder == 0 {
        format!("{dollars}")
    } else {
        format!("{dollars}.{remainder:02}")
    }
}

/// The preset-or-custom amount selection on the donate screen.
///
/// The two sources are mutually exclusive: selecting a preset clears any
/// custom text, and typing a custom amount clears the preset selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountPicker {
    presets: Vec<u64>,
    selected_preset: Option<u64>,
    custom_text: String,
}

impl AmountPicker {
    /// Create a picker over the given preset amounts (whole dollars).
    #[must_use]
    pub fn new(preset_dollars: &[u64]) -> Self {
        Self {
            presets: preset_dollars
                .iter()
                .map(|d| d * CENTS_PER_DOLLAR)
                .collect(),
            selected_preset: None,
            custom_text: String::new(),
        }
    }

    /// The preset amounts in minor units.
    #[must_use]
    pub fn presets(&self) -> &[u64] {
        &self.presets
    }

    /// The currently selected preset, if any.
    #[must_use]
    pub fn selected_preset(&self) -> Option<u64> {
        self.selected_preset
    }

    /// The current custom-amount text.
    #[must_use]
    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// Select a preset amount (minor units), clearing any custom text.
    ///
    /// Returns `false` (and changes nothing) if the amount is not one of
    /// the configured presets.
    pub fn select_preset(&mut self, cents: u64) -> bool {
        if !self.presets.contains(&cents) {
            return false;
        }
        self.selected_preset = Some(cents);
        self.custom_text.clear();
        true
    }

    /// Set the custom amount text, clearing any preset selection.
    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.custom_text = text.into();
        self.selected_preset = None;
    }

    /// The amount source to submit.
    #[must_use]
    pub fn source(&self) -> AmountSource {
        match self.selected_preset {
            Some(cents) => AmountSource::Preset(cents),
            None => AmountSource::Custom(self.custom_text.clone()),
        }
    }

    /// Resolve the current selection to an amount in minor units.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if nothing valid is selected.
    pub fn amount(&self) -> Result<u64, ValidationError> {
        self.source().resolve()
    }
}
