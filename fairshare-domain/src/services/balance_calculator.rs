use crate::model::{Expense, ExpenseId, ExpenseSplit, GroupBalances, Member, Money, Settlement};
use fxhash::FxHashMap;

/// Derives per-member net balances from a ledger snapshot.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Folds expenses, splits and settlements into a balance table seeded
    /// with every listed member at zero.
    ///
    /// Each expense credits its payer, each split debits its member, and each
    /// settlement credits the payer while debiting the receiver. User ids
    /// absent from the member list still get an entry (with an empty name)
    /// appended after the members, so no balance is dropped silently.
    ///
    /// Total over any well-typed input: malformed data degrades to zero or
    /// lazily created entries. Split-sum drift beyond the 0.01 tolerance is
    /// reported through `tracing::warn` without affecting the result.
    pub fn compute(
        &self,
        members: &[Member],
        expenses: &[Expense],
        splits: &[ExpenseSplit],
        settlements: &[Settlement],
    ) -> GroupBalances {
        let mut balances = GroupBalances::with_members(members);

        for expense in expenses {
            balances.credit(&expense.paid_by, expense.amount);
        }

        let mut split_totals: FxHashMap<ExpenseId, Money> = FxHashMap::default();
        for split in splits {
            balances.debit(&split.user_id, split.amount);
            *split_totals
                .entry(split.expense_id.clone())
                .or_insert(Money::ZERO) += split.amount;
        }

        for settlement in settlements {
            balances.credit(&settlement.from_user, settlement.amount);
            balances.debit(&settlement.to_user, settlement.amount);
        }

        for expense in expenses {
            let split_total = split_totals
                .get(&expense.id)
                .copied()
                .unwrap_or(Money::ZERO);
            if !(expense.amount - split_total).is_settled() {
                tracing::warn!(
                    expense_id = %expense.id,
                    expense_amount = %expense.amount,
                    split_total = %split_total,
                    "Expense splits do not sum to the expense amount"
                );
            }
        }

        balances
    }
}
