//! Pricing tiers and currency formatting

use serde::{Deserialize, Serialize};

/// Monthly-total band used to weight facility cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingTier {
    /// Below $1,600/month
    BudgetFriendly,
    /// $1,600 to $1,750/month
    Moderate,
    /// $1,750/month and up
    Premium,
}

impl PricingTier {
    /// Band for a monthly total in dollars
    pub fn for_monthly(total_monthly: f64) -> Self {
        if total_monthly < 1600.0 {
            PricingTier::BudgetFriendly
        } else if total_monthly < 1750.0 {
            PricingTier::Moderate
        } else {
            PricingTier::Premium
        }
    }

    /// Human-readable band name
    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::BudgetFriendly => "Budget Friendly",
            PricingTier::Moderate => "Moderate",
            PricingTier::Premium => "Premium",
        }
    }

    /// Stable color token for the band
    pub fn color(&self) -> &'static str {
        match self {
            PricingTier::BudgetFriendly => "#4ade80",
            PricingTier::Moderate => "#facc15",
            PricingTier::Premium => "#f87171",
        }
    }
}

/// US-style dollar formatting with thousands grouping.
///
/// Two decimal places when `show_cents`, otherwise rounded to whole
/// dollars: `$1,234.56` / `$1,235`.
pub fn format_currency(amount: f64, show_cents: bool) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    if show_cents {
        let total_cents = (magnitude * 100.0).round() as u64;
        format!(
            "{}${}.{:02}",
            sign,
            group_thousands(total_cents / 100),
            total_cents % 100
        )
    } else {
        format!("{}${}", sign, group_thousands(magnitude.round() as u64))
    }
}

/// Insert a comma every three digits from the right
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
