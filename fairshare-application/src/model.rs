use fairshare_domain::{
    BalanceCalculator, Expense, ExpenseSplit, GroupBalances, GroupId, Member, Money, Settlement,
    UserId,
};

/// Identity of the user driving a use case. Always passed explicitly; there
/// is no ambient "current user".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

/// In-memory snapshot of one group's ledger records, fetched in one pass.
///
/// Balances are always derived from a full snapshot; there is no incremental
/// mutation path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
    pub splits: Vec<ExpenseSplit>,
    pub settlements: Vec<Settlement>,
}

impl LedgerSnapshot {
    /// The explicit recompute entry point: fresh balance table from the
    /// snapshot, every call.
    pub fn recompute(&self) -> GroupBalances {
        BalanceCalculator.compute(
            &self.members,
            &self.expenses,
            &self.splits,
            &self.settlements,
        )
    }
}

/// Activity feed entry kind, closed over the set the app emits. Unrecognized
/// tags survive in [`ActivityKind::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    ExpenseAdded,
    SettlementRecorded,
    GroupCreated,
    MemberJoined,
    Other(String),
}

impl ActivityKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "expense_added" => Self::ExpenseAdded,
            "settlement_added" => Self::SettlementRecorded,
            "group_created" => Self::GroupCreated,
            "member_joined" => Self::MemberJoined,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::ExpenseAdded => "expense_added",
            Self::SettlementRecorded => "settlement_added",
            Self::GroupCreated => "group_created",
            Self::MemberJoined => "member_joined",
            Self::Other(tag) => tag,
        }
    }
}

/// How a settlement was paid, closed over the settle-up form's options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Venmo,
    PayPal,
    Zelle,
    BankTransfer,
    CreditCard,
    Other(String),
}

impl PaymentMethod {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Cash" => Self::Cash,
            "Venmo" => Self::Venmo,
            "PayPal" => Self::PayPal,
            "Zelle" => Self::Zelle,
            "Bank Transfer" => Self::BankTransfer,
            "Credit Card" => Self::CreditCard,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Cash => "Cash",
            Self::Venmo => "Venmo",
            Self::PayPal => "PayPal",
            Self::Zelle => "Zelle",
            Self::BankTransfer => "Bank Transfer",
            Self::CreditCard => "Credit Card",
            Self::Other(label) => label,
        }
    }
}

/// A settlement the caller wants recorded, from the settle-up form or an
/// accepted recommendation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementRequest {
    pub group_id: GroupId,
    pub from_user: UserId,
    pub to_user: UserId,
    pub amount: Money,
    pub method: PaymentMethod,
    pub note: Option<String>,
}

/// Validated settlement handed to the store for persistence. The store owns
/// id assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSettlement {
    pub group_id: GroupId,
    pub from_user: UserId,
    pub to_user: UserId,
    pub amount: Money,
    pub method: PaymentMethod,
    pub note: Option<String>,
}

/// Activity feed entry handed to the store alongside a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub actor: UserId,
    pub group_id: GroupId,
    pub description: String,
}
