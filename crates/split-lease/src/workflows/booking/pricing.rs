use serde::Serialize;

use super::domain::PricingError;

/// Discount applied when a guest books every night of the week.
pub const FULL_WEEK_DISCOUNT_RATE: f64 = 0.13;
/// Platform markup applied to every quote after discounts.
pub const PLATFORM_MARKUP_RATE: f64 = 0.17;
/// Shortest weekly stay that can be quoted.
pub const MIN_QUOTED_NIGHTS: f64 = 2.0;
/// A full week; the only night count that earns the discount.
pub const FULL_WEEK_NIGHTS: f64 = 7.0;
/// Leases are billed in four-week cycles.
pub const WEEKS_PER_BILLING_CYCLE: f64 = 4.0;

/// Breakdown of a guest-facing quote for one week of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingQuote {
    pub base_price: f64,
    pub discount_amount: f64,
    pub markup_amount: f64,
    pub total_price: f64,
    pub price_per_night: f64,
}

/// Full quote for `nights_count` nights at the host's nightly rate.
///
/// The full-week discount applies only at exactly seven nights; the markup is
/// applied to every quote on the discounted amount. Fractional night counts
/// inside `2..=7` are accepted and priced linearly.
pub fn calculate_pricing_quote(
    host_nightly_rate: f64,
    nights_count: f64,
) -> Result<PricingQuote, PricingError> {
    validate_rate(host_nightly_rate)?;
    if !(MIN_QUOTED_NIGHTS..=FULL_WEEK_NIGHTS).contains(&nights_count) {
        return Err(PricingError::InvalidNightsCount {
            value: nights_count,
            min: MIN_QUOTED_NIGHTS,
            max: FULL_WEEK_NIGHTS,
        });
    }

    let base_price = host_nightly_rate * nights_count;
    let discount_amount = if nights_count == FULL_WEEK_NIGHTS {
        base_price * FULL_WEEK_DISCOUNT_RATE
    } else {
        0.0
    };
    let after_discount = base_price - discount_amount;
    let markup_amount = after_discount * PLATFORM_MARKUP_RATE;
    let total_price = after_discount + markup_amount;

    Ok(PricingQuote {
        base_price,
        discount_amount,
        markup_amount,
        total_price,
        price_per_night: total_price / nights_count,
    })
}

/// Guest-facing nightly price. Unrounded; display formatting is left to callers.
pub fn calculate_guest_facing_price(
    host_nightly_rate: f64,
    nights_count: f64,
) -> Result<f64, PricingError> {
    calculate_pricing_quote(host_nightly_rate, nights_count).map(|quote| quote.price_per_night)
}

/// Scale a four-week rent linearly to `total_weeks`.
pub fn calculate_reservation_total(
    four_week_rent: f64,
    total_weeks: f64,
) -> Result<f64, PricingError> {
    if !(four_week_rent.is_finite() && four_week_rent >= 0.0) {
        return Err(PricingError::InvalidRent {
            value: four_week_rent,
        });
    }
    if !(total_weeks.is_finite() && total_weeks > 0.0) {
        return Err(PricingError::InvalidWeeks { value: total_weeks });
    }

    Ok(four_week_rent * (total_weeks / WEEKS_PER_BILLING_CYCLE))
}

/// Price of one four-week billing cycle for a weekly pattern of
/// `nights_count` nights at `nightly_price`.
pub fn calculate_four_week_rent(nightly_price: f64, nights_count: f64) -> Result<f64, PricingError> {
    validate_rate(nightly_price)?;
    if !(1.0..=FULL_WEEK_NIGHTS).contains(&nights_count) {
        return Err(PricingError::InvalidNightsCount {
            value: nights_count,
            min: 1.0,
            max: FULL_WEEK_NIGHTS,
        });
    }

    Ok(nightly_price * nights_count * WEEKS_PER_BILLING_CYCLE)
}

fn validate_rate(rate: f64) -> Result<(), PricingError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidRate { value: rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn four_nights_carry_markup_only() {
        let quote = calculate_pricing_quote(100.0, 4.0).expect("valid quote");
        assert_close(quote.base_price, 400.0);
        assert_close(quote.discount_amount, 0.0);
        assert_close(quote.markup_amount, 68.0);
        assert_close(quote.total_price, 468.0);
        assert_close(quote.price_per_night, 117.0);
    }

    #[test]
    fn full_week_is_discounted_before_markup() {
        let price = calculate_guest_facing_price(100.0, 7.0).expect("valid quote");
        assert_close(price, 100.0 * 0.87 * 1.17);
        assert_eq!(format!("{price:.2}"), "101.79");
    }

    #[test]
    fn six_nights_get_no_partial_discount() {
        let quote = calculate_pricing_quote(100.0, 6.0).expect("valid quote");
        assert_eq!(quote.discount_amount, 0.0);
        assert_close(quote.price_per_night, 117.0);
    }

    #[test]
    fn fractional_nights_inside_range_are_priced() {
        let quote = calculate_pricing_quote(80.0, 2.5).expect("valid quote");
        assert_close(quote.base_price, 200.0);
        assert_close(quote.price_per_night, 93.6);
    }

    #[test]
    fn rejects_invalid_rates() {
        for rate in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    calculate_guest_facing_price(rate, 4.0),
                    Err(PricingError::InvalidRate { .. })
                ),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_night_counts_outside_two_to_seven() {
        for nights in [1.0, 1.99, 7.01, 8.0, f64::NAN] {
            assert!(
                matches!(
                    calculate_guest_facing_price(100.0, nights),
                    Err(PricingError::InvalidNightsCount { .. })
                ),
                "nights {nights} should be rejected"
            );
        }
    }

    #[test]
    fn reservation_total_scales_four_week_rent() {
        assert_eq!(calculate_reservation_total(1600.0, 13.0), Ok(5200.0));
        assert_eq!(calculate_reservation_total(1600.0, 26.0), Ok(10400.0));
        assert_eq!(calculate_reservation_total(1600.0, 2.0), Ok(800.0));
        assert_eq!(calculate_reservation_total(0.0, 8.0), Ok(0.0));
    }

    #[test]
    fn reservation_total_validates_input() {
        assert!(matches!(
            calculate_reservation_total(-1.0, 4.0),
            Err(PricingError::InvalidRent { .. })
        ));
        assert!(matches!(
            calculate_reservation_total(f64::NAN, 4.0),
            Err(PricingError::InvalidRent { .. })
        ));
        assert!(matches!(
            calculate_reservation_total(1600.0, 0.0),
            Err(PricingError::InvalidWeeks { .. })
        ));
        assert!(matches!(
            calculate_reservation_total(1600.0, -4.0),
            Err(PricingError::InvalidWeeks { .. })
        ));
    }

    #[test]
    fn four_week_rent_multiplies_weekly_nights() {
        assert_close(
            calculate_four_week_rent(117.0, 4.0).expect("valid rent"),
            1872.0,
        );
        assert!(matches!(
            calculate_four_week_rent(117.0, 0.0),
            Err(PricingError::InvalidNightsCount { .. })
        ));
    }
}
