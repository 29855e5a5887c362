//! Static brochure content served by the public site endpoints.
//!
//! These tables are compiled in; they have no lifecycle and are never written.

mod data;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::MembershipTier;
use crate::views::format::round2;

pub use data::{
    COMPANY_TIMELINE, FAQS, FINANCING_OPTIONS, JOB_OPENINGS, MEMBERSHIP_PLANS, REVIEWS, SERVICES,
    TESTIMONIALS,
};

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub starting_price: Option<u32>,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub author: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancingOption {
    pub name: &'static str,
    pub apr: &'static str,
    pub term_months: u16,
    pub minimum_purchase: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub tier: MembershipTier,
    pub name: &'static str,
    pub monthly_price: f64,
    pub visits_per_year: u8,
    pub repair_discount_percent: u8,
    pub priority_service: bool,
    pub perks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: &'static str,
    pub platform: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub average_rating: f64,
    pub count: usize,
    pub reviews: &'static [Review],
}

/// Reviews with their average rating, 0 when there are none.
pub fn review_summary(reviews: &'static [Review]) -> ReviewSummary {
    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        round2(f64::from(total) / reviews.len() as f64)
    };
    ReviewSummary {
        average_rating,
        count: reviews.len(),
        reviews,
    }
}

pub fn membership_plan(tier: MembershipTier) -> Option<&'static MembershipPlan> {
    MEMBERSHIP_PLANS.iter().find(|plan| plan.tier == tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_a_plan() {
        for tier in MembershipTier::ALL {
            assert!(membership_plan(tier).is_some(), "missing plan for {tier:?}");
        }
    }

    #[test]
    fn test_plans_get_pricier() {
        let prices: Vec<f64> = MEMBERSHIP_PLANS.iter().map(|p| p.monthly_price).collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_review_summary() {
        let summary = review_summary(REVIEWS);
        assert_eq!(summary.count, REVIEWS.len());
        assert!(summary.average_rating > 0.0 && summary.average_rating <= 5.0);
        assert_eq!(review_summary(&[]).average_rating, 0.0);
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn test_slugs_unique() {
        let mut slugs: Vec<&str> = SERVICES.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn test_timeline_is_chronological() {
        assert!(COMPANY_TIMELINE.windows(2).all(|w| w[0].year <= w[1].year));
        assert!(!FAQS.is_empty() && !JOB_OPENINGS.is_empty() && !FINANCING_OPTIONS.is_empty());
    }
}
