use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SettlementId(pub String);

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for SettlementId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Amount in decimal currency units.
///
/// In a balance, positive means the group owes the member, negative means the
/// member owes the group. Zero checks on computed sums go through
/// [`Money::is_settled`]; exact equality is reserved for stored amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// `Money::new(1234, 2)` is 12.34 currency units.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Within the 0.01 currency-unit tolerance of zero.
    pub fn is_settled(self) -> bool {
        self.0.abs() <= Self::tolerance()
    }

    /// Display-precision value: two decimal places, midpoint away from zero.
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    fn tolerance() -> Decimal {
        Decimal::new(1, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded().0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Expense category, closed over the set the app ships with.
///
/// Unrecognized labels are preserved in [`ExpenseCategory::Other`] so data
/// written by newer clients survives a round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpenseCategory {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Travel,
    Healthcare,
    Education,
    Other(String),
}

impl ExpenseCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Food & Dining" => Self::FoodAndDining,
            "Transportation" => Self::Transportation,
            "Shopping" => Self::Shopping,
            "Entertainment" => Self::Entertainment,
            "Bills & Utilities" => Self::BillsAndUtilities,
            "Travel" => Self::Travel,
            "Healthcare" => Self::Healthcare,
            "Education" => Self::Education,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Travel => "Travel",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other(label) => label,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub user_id: UserId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub group_id: GroupId,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: Money,
    pub paid_by: UserId,
}

/// The portion of one expense attributed to one member. Splits of an expense
/// should sum to the expense amount within 0.01; the calculator tolerates and
/// flags drift rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseSplit {
    pub expense_id: ExpenseId,
    pub user_id: UserId,
    pub amount: Money,
}

/// A recorded payment between two members: `from_user` paid `to_user`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub id: SettlementId,
    pub group_id: GroupId,
    pub from_user: UserId,
    pub to_user: UserId,
    pub amount: Money,
}

/// Derived per-member net amount. Never stored; recomputed from the full
/// record set on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub user_id: UserId,
    pub name: String,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct MemberEntry {
    name: String,
    amount: Money,
}

/// Balance table for one group, ordered by the member list with lazily
/// created entries for unknown user ids appended in first-appearance order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupBalances {
    entries: IndexMap<UserId, MemberEntry>,
}

impl GroupBalances {
    /// Every listed member starts at zero; the first occurrence of a
    /// duplicated member id wins the name.
    pub fn with_members(members: &[Member]) -> Self {
        let mut entries = IndexMap::with_capacity(members.len());
        for member in members {
            entries
                .entry(member.user_id.clone())
                .or_insert_with(|| MemberEntry {
                    name: member.name.clone(),
                    amount: Money::ZERO,
                });
        }
        Self { entries }
    }

    pub fn credit(&mut self, user_id: &UserId, amount: Money) {
        *self.slot(user_id) += amount;
    }

    pub fn debit(&mut self, user_id: &UserId, amount: Money) {
        *self.slot(user_id) -= amount;
    }

    fn slot(&mut self, user_id: &UserId) -> &mut Money {
        let entry = self
            .entries
            .entry(user_id.clone())
            .or_insert_with(|| MemberEntry {
                name: String::new(),
                amount: Money::ZERO,
            });
        &mut entry.amount
    }

    pub fn amount_of(&self, user_id: &UserId) -> Option<Money> {
        self.entries.get(user_id).map(|entry| entry.amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Money {
        self.entries.values().map(|entry| entry.amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = Balance> + '_ {
        self.entries.iter().map(|(user_id, entry)| Balance {
            user_id: user_id.clone(),
            name: entry.name.clone(),
            amount: entry.amount,
        })
    }

    /// Externally visible balances: members whose absolute balance exceeds
    /// the 0.01 tolerance, in table order. Exactly settled members are a
    /// valid terminal state and are omitted.
    pub fn visible(&self) -> Vec<Balance> {
        self.iter()
            .filter(|balance| !balance.amount.is_settled())
            .collect()
    }
}
