use crate::{
    model::{ActivityKind, NewActivity, NewSettlement, Session, SettlementRequest},
    ports::{LedgerStore, StoreError},
};
use fairshare_domain::{GroupId, Member, Money, Settlement, UserId};

#[derive(Debug, thiserror::Error)]
pub enum RecordSettlementError {
    #[error("Settlement amount must be positive (got {0})")]
    NonPositiveAmount(Money),
    #[error("Payer and receiver must be different members")]
    SelfSettlement,
    #[error("User {0} is not a member of group {1}")]
    UnknownMember(UserId, GroupId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Write-side use case for settlement recording: validate, persist the
/// settlement, append an activity entry.
///
/// Recording never touches balances; the caller recomputes from a fresh
/// snapshot afterwards.
///
/// The settlement and activity inserts are separate store writes. A
/// [`StoreError`] from the activity append is returned after the settlement
/// was already persisted; callers treating the error as "nothing recorded"
/// must check the store.
pub struct SettlementRecorder<'a> {
    store: &'a dyn LedgerStore,
}

impl<'a> SettlementRecorder<'a> {
    pub fn new(store: &'a dyn LedgerStore) -> Self {
        Self { store }
    }

    pub fn record(
        &self,
        session: &Session,
        request: SettlementRequest,
    ) -> Result<Settlement, RecordSettlementError> {
        if request.amount <= Money::ZERO {
            return Err(RecordSettlementError::NonPositiveAmount(request.amount));
        }
        if request.from_user == request.to_user {
            return Err(RecordSettlementError::SelfSettlement);
        }

        let members = self.store.list_group_members(&request.group_id)?;
        let from = Self::require_member(&members, &request.from_user, &request.group_id)?;
        let to = Self::require_member(&members, &request.to_user, &request.group_id)?;
        let description = format!("{} paid {} {}", from.name, to.name, request.amount);

        let settlement = self.store.insert_settlement(NewSettlement {
            group_id: request.group_id.clone(),
            from_user: request.from_user,
            to_user: request.to_user,
            amount: request.amount,
            method: request.method,
            note: request.note,
        })?;

        self.store.insert_activity(NewActivity {
            kind: ActivityKind::SettlementRecorded,
            actor: session.user_id.clone(),
            group_id: request.group_id,
            description,
        })?;

        tracing::info!(
            settlement_id = %settlement.id,
            group_id = %settlement.group_id,
            from_user = %settlement.from_user,
            to_user = %settlement.to_user,
            amount = %settlement.amount,
            "Recorded settlement"
        );

        Ok(settlement)
    }

    fn require_member<'m>(
        members: &'m [Member],
        user_id: &UserId,
        group_id: &GroupId,
    ) -> Result<&'m Member, RecordSettlementError> {
        members
            .iter()
            .find(|member| member.user_id == *user_id)
            .ok_or_else(|| {
                RecordSettlementError::UnknownMember(user_id.clone(), group_id.clone())
            })
    }
}
