/// 経費機能モジュール
///
/// このモジュールは経費管理に関連する機能を提供します：
/// - 経費入力のバリデーション
/// - 経費の作成・削除
/// - カテゴリからの支払方法導出と通貨コードの刻印
// サブモジュールの宣言
pub mod commands;
pub mod models;

// モデル
pub use models::{build_expense, validate_new_expense, Expense, NewExpenseInput};

// Tauriコマンドハンドラー
pub use commands::{create_expense, delete_expense, validate_expense_input};
