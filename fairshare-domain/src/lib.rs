#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, Expense, ExpenseCategory, ExpenseId, ExpenseSplit, GroupBalances, GroupId, Member,
    Money, Settlement, SettlementId, UserId,
};
pub use services::{
    BalanceCalculator, Recommendation, SettlementRecommender, SplitMethod, SplitPlanError,
    SplitPlanner,
};
