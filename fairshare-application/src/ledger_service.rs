use crate::{
    model::LedgerSnapshot,
    ports::{LedgerStore, StoreError},
};
use fairshare_domain::{Balance, ExpenseId, GroupId, Recommendation, SettlementRecommender};

/// Read-side use cases: snapshot assembly and balance derivation.
#[derive(Clone, Copy)]
pub struct LedgerService<'a> {
    store: &'a dyn LedgerStore,
}

impl<'a> LedgerService<'a> {
    pub fn new(store: &'a dyn LedgerStore) -> Self {
        Self { store }
    }

    /// Fetches every record the balance computation needs in one pass.
    pub fn load_snapshot(&self, group_id: &GroupId) -> Result<LedgerSnapshot, StoreError> {
        let members = self.store.list_group_members(group_id)?;
        let expenses = self.store.list_expenses(group_id)?;
        let expense_ids: Vec<ExpenseId> =
            expenses.iter().map(|expense| expense.id.clone()).collect();
        let splits = self.store.list_expense_splits(&expense_ids)?;
        let settlements = self.store.list_settlements(group_id)?;

        tracing::debug!(
            group_id = %group_id,
            member_count = members.len(),
            expense_count = expenses.len(),
            split_count = splits.len(),
            settlement_count = settlements.len(),
            "Loaded ledger snapshot"
        );

        Ok(LedgerSnapshot {
            members,
            expenses,
            splits,
            settlements,
        })
    }

    /// Visible balances for a group, freshly recomputed from a snapshot.
    pub fn balances(&self, group_id: &GroupId) -> Result<Vec<Balance>, StoreError> {
        Ok(self.load_snapshot(group_id)?.recompute().visible())
    }

    /// Current one-step settlement suggestion for a group, if any.
    pub fn recommendation(&self, group_id: &GroupId) -> Result<Option<Recommendation>, StoreError> {
        let balances = self.balances(group_id)?;
        Ok(SettlementRecommender.recommend(&balances))
    }
}
