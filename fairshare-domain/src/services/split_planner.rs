use crate::model::{ExpenseId, ExpenseSplit, Money, UserId};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// How an expense is divided across its participants.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitMethod {
    /// Even shares at cent precision, remainder cents front-loaded.
    Equal,
    /// Caller-entered amounts, one per participant.
    Exact(Vec<Money>),
    /// Percentage shares, one per participant, summing to 100.
    Percentage(Vec<Decimal>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitPlanError {
    NoParticipants,
    NonPositiveAmount(Money),
    /// Equal splitting works in whole cents; the total must be representable.
    SubCentAmount(Money),
    ShareCountMismatch {
        expected: usize,
        actual: usize,
    },
    NegativeShare(Money),
    NegativePercent(Decimal),
    MismatchedTotal {
        expected: Money,
        actual: Money,
    },
    InvalidPercentTotal(Decimal),
}

/// Writer-side split computation. Planned splits always sum to the expense
/// amount (exactly for Equal and Percentage, within 0.01 for Exact), so
/// stored records satisfy the balance calculator's sum invariant.
pub struct SplitPlanner;

impl SplitPlanner {
    pub fn plan(
        &self,
        expense_id: &ExpenseId,
        amount: Money,
        participants: &[UserId],
        method: &SplitMethod,
    ) -> Result<Vec<ExpenseSplit>, SplitPlanError> {
        if participants.is_empty() {
            return Err(SplitPlanError::NoParticipants);
        }
        if amount <= Money::ZERO {
            return Err(SplitPlanError::NonPositiveAmount(amount));
        }

        let shares = match method {
            SplitMethod::Equal => Self::equal_shares(amount, participants.len())?,
            SplitMethod::Exact(shares) => {
                Self::validate_exact(amount, shares, participants.len())?;
                shares.clone()
            }
            SplitMethod::Percentage(percents) => {
                Self::percentage_shares(amount, percents, participants.len())?
            }
        };

        Ok(participants
            .iter()
            .zip(shares)
            .map(|(user_id, share)| ExpenseSplit {
                expense_id: expense_id.clone(),
                user_id: user_id.clone(),
                amount: share,
            })
            .collect())
    }

    fn equal_shares(amount: Money, count: usize) -> Result<Vec<Money>, SplitPlanError> {
        let units = amount.as_decimal() * Decimal::from(100);
        if units.fract() != Decimal::ZERO {
            return Err(SplitPlanError::SubCentAmount(amount));
        }
        let cents = units
            .to_i64()
            .ok_or(SplitPlanError::SubCentAmount(amount))?;

        let count_i64 = count as i64;
        let base = cents / count_i64;
        let remainder = (cents % count_i64) as usize;

        Ok((0..count)
            .map(|idx| {
                let mut share = base;
                if idx < remainder {
                    share += 1;
                }
                Money::new(share, 2)
            })
            .collect())
    }

    fn validate_exact(
        amount: Money,
        shares: &[Money],
        count: usize,
    ) -> Result<(), SplitPlanError> {
        if shares.len() != count {
            return Err(SplitPlanError::ShareCountMismatch {
                expected: count,
                actual: shares.len(),
            });
        }
        if let Some(share) = shares.iter().find(|share| **share < Money::ZERO) {
            return Err(SplitPlanError::NegativeShare(*share));
        }
        let total: Money = shares.iter().sum();
        if !(total - amount).is_settled() {
            return Err(SplitPlanError::MismatchedTotal {
                expected: amount,
                actual: total,
            });
        }
        Ok(())
    }

    fn percentage_shares(
        amount: Money,
        percents: &[Decimal],
        count: usize,
    ) -> Result<Vec<Money>, SplitPlanError> {
        if percents.len() != count {
            return Err(SplitPlanError::ShareCountMismatch {
                expected: count,
                actual: percents.len(),
            });
        }
        if let Some(percent) = percents.iter().find(|percent| **percent < Decimal::ZERO) {
            return Err(SplitPlanError::NegativePercent(*percent));
        }
        let percent_total: Decimal = percents.iter().sum();
        if (percent_total - Decimal::from(100)).abs() > Decimal::new(1, 2) {
            return Err(SplitPlanError::InvalidPercentTotal(percent_total));
        }

        let hundred = Decimal::from(100);
        let mut shares: Vec<Money> = percents
            .iter()
            .map(|percent| {
                Money::from_decimal(
                    (amount.as_decimal() * percent / hundred)
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                )
            })
            .collect();

        // Rounding drift is repaired against the largest shares so the plan
        // sums to the expense amount exactly. Negative residue is absorbed
        // only up to each share's value; a share never goes below zero.
        let assigned: Money = shares.iter().sum();
        let mut residual = amount - assigned;
        if !residual.is_zero() {
            let mut order: Vec<usize> = (0..shares.len()).collect();
            order.sort_by(|a, b| shares[*b].cmp(&shares[*a]));
            if residual > Money::ZERO {
                shares[order[0]] += residual;
            } else {
                for idx in order {
                    if residual.is_zero() {
                        break;
                    }
                    let take = shares[idx].min(residual.abs());
                    shares[idx] -= take;
                    residual += take;
                }
            }
        }

        Ok(shares)
    }
}
