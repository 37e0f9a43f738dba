use crate::model::{Balance, Money};

/// A single suggested transfer from the largest debtor to the largest
/// creditor. Advisory only; nothing is persisted until the caller records it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub from: Balance,
    pub to: Balance,
    pub amount: Money,
}

/// Greedy one-step settlement suggestion over a balance sequence.
pub struct SettlementRecommender;

impl SettlementRecommender {
    /// Picks the most negative balance as debtor and the most positive as
    /// creditor, ties broken by first occurrence in input order, and suggests
    /// `min(|debtor|, creditor)`.
    ///
    /// Returns `None` for an empty input, and whenever no one is actually in
    /// debt or no one is actually owed (all settled, or same-signed residue
    /// from upstream data issues) rather than fabricating a transfer. The
    /// amount is kept at full precision; display rounding happens in
    /// [`Money`]'s formatting.
    pub fn recommend(&self, balances: &[Balance]) -> Option<Recommendation> {
        let first = balances.first()?;
        let mut debtor = first;
        let mut creditor = first;
        for balance in &balances[1..] {
            if balance.amount < debtor.amount {
                debtor = balance;
            }
            if balance.amount > creditor.amount {
                creditor = balance;
            }
        }

        if debtor.amount >= Money::ZERO || creditor.amount <= Money::ZERO {
            return None;
        }

        let amount = debtor.amount.abs().min(creditor.amount);
        debug_assert!(amount > Money::ZERO);

        Some(Recommendation {
            from: debtor.clone(),
            to: creditor.clone(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use rstest::{fixture, rstest};

    #[fixture]
    fn recommender() -> SettlementRecommender {
        SettlementRecommender
    }

    fn bal(id: &str, cents: i64) -> Balance {
        Balance {
            user_id: UserId::from(id),
            name: id.to_uppercase(),
            amount: Money::new(cents, 2),
        }
    }

    #[rstest]
    #[case::empty(vec![], None)]
    #[case::all_zero(vec![bal("a", 0), bal("b", 0)], None)]
    #[case::only_creditors(vec![bal("a", 2_000), bal("b", 1_500)], None)]
    #[case::only_debtors(vec![bal("a", -2_000), bal("b", -1_500)], None)]
    #[case::creditor_caps_amount(
        vec![bal("a", 4_000), bal("b", -10_000)],
        Some(("b", "a", 4_000))
    )]
    #[case::debtor_caps_amount(
        vec![bal("a", 6_000), bal("b", -3_000), bal("c", -3_000)],
        Some(("b", "a", 3_000))
    )]
    #[case::debtor_tie_first_occurrence_wins(
        vec![bal("a", 6_000), bal("c", -3_000), bal("b", -3_000)],
        Some(("c", "a", 3_000))
    )]
    #[case::creditor_tie_first_occurrence_wins(
        vec![bal("b", 4_000), bal("a", 4_000), bal("c", -5_000)],
        Some(("c", "b", 4_000))
    )]
    fn recommend_cases(
        recommender: SettlementRecommender,
        #[case] balances: Vec<Balance>,
        #[case] expected: Option<(&str, &str, i64)>,
    ) {
        let recommendation = recommender.recommend(&balances);

        let actual = recommendation
            .as_ref()
            .map(|r| (r.from.user_id.0.as_str(), r.to.user_id.0.as_str(), r.amount));
        let expected =
            expected.map(|(from, to, cents)| (from, to, Money::new(cents, 2)));
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn amount_keeps_full_precision_and_rounds_for_display(
        recommender: SettlementRecommender,
    ) {
        let balances = vec![
            Balance {
                user_id: UserId::from("a"),
                name: "A".to_owned(),
                amount: Money::new(10_005, 3),
            },
            Balance {
                user_id: UserId::from("b"),
                name: "B".to_owned(),
                amount: Money::new(-10_005, 3),
            },
        ];

        let recommendation = recommender
            .recommend(&balances)
            .expect("one debtor and one creditor");

        assert_eq!(recommendation.amount, Money::new(10_005, 3));
        assert_eq!(recommendation.amount.to_string(), "10.01");
    }
}
