use crate::model::{NewActivity, NewSettlement};
use fairshare_domain::{Expense, ExpenseId, ExpenseSplit, GroupId, Member, Settlement};

/// Error type for data-store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to reach data store: {0}")]
    Request(String),
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Port over the hosted data store. Implementations own connectivity,
/// retries and id assignment; callers only see plain records.
pub trait LedgerStore: Send + Sync {
    fn list_group_members(&self, group_id: &GroupId) -> Result<Vec<Member>, StoreError>;

    fn list_expenses(&self, group_id: &GroupId) -> Result<Vec<Expense>, StoreError>;

    fn list_expense_splits(
        &self,
        expense_ids: &[ExpenseId],
    ) -> Result<Vec<ExpenseSplit>, StoreError>;

    fn list_settlements(&self, group_id: &GroupId) -> Result<Vec<Settlement>, StoreError>;

    fn insert_settlement(&self, settlement: NewSettlement) -> Result<Settlement, StoreError>;

    fn insert_activity(&self, activity: NewActivity) -> Result<(), StoreError>;
}
