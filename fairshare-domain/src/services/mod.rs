pub mod balance_calculator;
pub mod settlement_recommender;
pub mod split_planner;

pub use balance_calculator::BalanceCalculator;
pub use settlement_recommender::{Recommendation, SettlementRecommender};
pub use split_planner::{SplitMethod, SplitPlanError, SplitPlanner};
