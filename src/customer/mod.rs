pub mod search;
pub mod storage;
pub mod types;

pub use search::search_by_name;
pub use storage::{load_customers, save_customers};
pub use types::{Assessment, Customer, RiskStatus};
