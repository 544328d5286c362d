pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::SelectorOptions;
pub use config::Strategy;

pub mod deposit;
pub use deposit::DepositValue;

pub mod pattern;
pub use pattern::SelectionPattern;

pub mod filter;
pub mod profit;
pub use profit::Recommendation;

pub mod selector;
pub use selector::MineSelector;
pub use selector::compute_max_profit_selections;

pub mod mine_type;
pub use mine_type::MineType;
