// サブモジュールの宣言
pub mod commands;
pub mod models;

pub use commands::get_categories;
pub use models::{all_categories, payment_method_for, Category, EXPENSE_CATEGORIES};
