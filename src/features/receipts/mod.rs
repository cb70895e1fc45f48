/// 領収書機能モジュール
///
/// このモジュールは領収書に関連するすべての機能を提供します：
/// - ファイル種別の検証（PNG・JPEG・PDFのみ）
/// - キャンセル可能な非同期ファイル読み込みとdata URL化
/// - 経費への添付・複製添付・取り外し
/// - レポート内の領収書一覧の導出
// サブモジュールの宣言
pub mod commands;
pub mod models;
pub mod service;

// モデル
pub use models::{
    is_supported_mime_type, mime_type_for_filename, ReceiptRef, SUPPORTED_MIME_TYPES,
    UNSUPPORTED_FILE_MESSAGE,
};

// サービス
pub use service::{
    attach_receipt_to_expense, clone_receipt_to_expense, detach_receipt_from_expense,
    read_receipt_file, report_receipts, UPLOAD_CANCELED_MESSAGE,
};

// Tauriコマンドハンドラー
pub use commands::{
    attach_existing_receipt, attach_receipt, cancel_receipt_upload, list_report_receipts,
    remove_receipt, upload_receipt,
};
