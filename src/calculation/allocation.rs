//! Proportional allocation of a total by hours.
//!
//! This module provides [`allocate`], which splits a total between roster
//! members in proportion to the hours each one contributed.

use rust_decimal::Decimal;
use tracing::debug;

use super::round_currency;
use crate::models::Member;

/// Sums the hours of all members, counting "not entered" as zero.
///
/// The sum saturates at [`Decimal::MAX`] instead of overflowing.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::total_hours;
/// use split_engine::models::Member;
/// use rust_decimal::Decimal;
///
/// let mut a = Member::new();
/// a.hours = Some(Decimal::new(25, 1));
/// let b = Member::new();
///
/// assert_eq!(total_hours(&[a, b]), Decimal::new(25, 1));
/// ```
pub fn total_hours(members: &[Member]) -> Decimal {
    members
        .iter()
        .map(Member::hours_or_zero)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Computes every member's share of `total`.
///
/// Each member receives `total * hours / total_hours`, rounded to two
/// decimal places half away from zero. Members are rounded independently,
/// so the amounts may sum to a value up to one cent per member away from
/// `total`; that remainder is left as is.
///
/// When nobody has entered hours (or the slice is empty) every amount is
/// zero, whatever the total. The sign of `total` is not checked: a negative
/// total yields negative shares.
///
/// Arithmetic never overflows. If the hours are too large to add up, each
/// member's hours are first divided by the member count, which keeps the
/// proportions. If `total * hours` is too large, the member's fraction of
/// the hours is computed first and then applied to `total`.
///
/// The input is not modified; a new vector is returned in the same order.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::allocate;
/// use split_engine::models::Member;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let members: Vec<Member> = [2, 3, 5]
///     .into_iter()
///     .map(|h| {
///         let mut m = Member::new();
///         m.hours = Some(Decimal::from(h));
///         m
///     })
///     .collect();
///
/// let allocated = allocate(&members, Decimal::from(300));
/// let amounts: Vec<String> = allocated.iter().map(|m| m.amount.to_string()).collect();
/// assert_eq!(amounts, ["60.00", "90.00", "150.00"]);
/// ```
pub fn allocate(members: &[Member], total: Decimal) -> Vec<Member> {
    let (weights, total_weight) = weights(members);

    debug!(
        members = members.len(),
        total = %total,
        total_hours = %total_weight,
        "Allocating total by hours"
    );

    members
        .iter()
        .zip(weights)
        .map(|(member, weight)| Member {
            amount: share(total, weight, total_weight),
            ..member.clone()
        })
        .collect()
}

/// Returns each member's hours and their sum, scaled down by the member
/// count when the plain sum would overflow.
fn weights(members: &[Member]) -> (Vec<Decimal>, Decimal) {
    let hours: Vec<Decimal> = members.iter().map(Member::hours_or_zero).collect();

    let exact = hours
        .iter()
        .try_fold(Decimal::ZERO, |sum, h| sum.checked_add(*h));
    if let Some(sum) = exact {
        return (hours, sum);
    }

    let count = Decimal::from(hours.len());
    debug!(members = hours.len(), "Hours overflow their sum, scaling by member count");
    let scaled: Vec<Decimal> = hours
        .iter()
        .map(|h| h.checked_div(count).unwrap_or(*h))
        .collect();
    let sum = scaled.iter().fold(Decimal::ZERO, |sum, h| sum.saturating_add(*h));
    (scaled, sum)
}

fn share(total: Decimal, weight: Decimal, total_weight: Decimal) -> Decimal {
    if total_weight <= Decimal::ZERO {
        return round_currency(Decimal::ZERO);
    }

    let raw = total
        .checked_mul(weight)
        .and_then(|product| product.checked_div(total_weight))
        .or_else(|| {
            weight
                .checked_div(total_weight)
                .and_then(|fraction| total.checked_mul(fraction))
        })
        .unwrap_or_else(|| total.saturating_mul(weight));

    round_currency(raw)
}
