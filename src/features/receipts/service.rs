//! 領収書ファイルの読み込みと派生ビュー
//!
//! ファイル読み込みは非同期で行い、キャンセルトークンと競合させる。
//! 種別チェックは読み込みの前に行い、不正な種別ではバイトを一切読まない。

use crate::features::receipts::models::{
    mime_type_for_filename, ReceiptRef, UNSUPPORTED_FILE_MESSAGE,
};
use crate::features::reports::models::Report;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::IdGenerator;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// キャンセル時のユーザー向けメッセージ
pub const UPLOAD_CANCELED_MESSAGE: &str = "Receipt upload canceled.";

/// 領収書ファイルを読み込んで参照を組み立てる
///
/// 拡張子から種別を判定し、非対応の種別は読み込み前に拒否する。
/// 読み込み中にトークンがキャンセルされたらCanceledで解決し、
/// 部分的な状態は残さない。
///
/// # 引数
/// * `path` - 読み込むファイルのパス
/// * `ids` - ID生成器
/// * `cancel` - 読み込みを中断するためのトークン
///
/// # 戻り値
/// 領収書参照、または失敗・キャンセル時はエラー
pub async fn read_receipt_file(
    path: &Path,
    ids: &IdGenerator,
    cancel: &CancellationToken,
) -> AppResult<ReceiptRef> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::validation(UNSUPPORTED_FILE_MESSAGE))?;

    let mime_type = mime_type_for_filename(&filename)
        .ok_or_else(|| AppError::validation(UNSUPPORTED_FILE_MESSAGE))?;

    let bytes = tokio::select! {
        // キャンセル済みのトークンは読み込みより常に優先する
        biased;
        _ = cancel.cancelled() => {
            log::info!("領収書の読み込みをキャンセルしました: {filename}");
            return Err(AppError::canceled(UPLOAD_CANCELED_MESSAGE));
        }
        result = tokio::fs::read(path) => result?,
    };

    let data_url = format!("data:{mime_type};base64,{}", STANDARD.encode(&bytes));
    log::info!(
        "領収書を読み込みました: {filename} ({} bytes)",
        bytes.len()
    );

    Ok(ReceiptRef {
        id: ids.next_id(),
        filename,
        mime_type: mime_type.to_string(),
        size: bytes.len() as u64,
        data_url,
    })
}

/// レポート内の領収書一覧を導出する
///
/// 領収書は経費に埋め込まれた参照が唯一の実体。この一覧は現在の
/// レポート状態から毎回計算し、別途保存しない。
pub fn report_receipts(report: &Report) -> Vec<ReceiptRef> {
    report
        .expenses
        .iter()
        .filter_map(|expense| expense.receipt.clone())
        .collect()
}

/// 領収書を経費に添付する
///
/// 既存の領収書があれば置き換える。
///
/// # 引数
/// * `report` - 対象のレポート
/// * `expense_id` - 対象の経費ID
/// * `receipt` - 添付する領収書参照
///
/// # 戻り値
/// 成功時はOk(())、経費が存在しない場合はエラー
pub fn attach_receipt_to_expense(
    report: &mut Report,
    expense_id: &str,
    receipt: ReceiptRef,
) -> AppResult<()> {
    let expense = report
        .find_expense_mut(expense_id)
        .ok_or_else(|| AppError::not_found("Expense"))?;
    expense.receipt = Some(receipt);
    Ok(())
}

/// レポート内の既存の領収書を別の経費へ複製して添付する
///
/// 参照の共有は行わず、新しいIDで内容を複製する。
///
/// # 引数
/// * `report` - 対象のレポート
/// * `expense_id` - 添付先の経費ID
/// * `source_receipt_id` - 複製元の領収書ID
/// * `new_id` - 複製に割り当てる新しいID
///
/// # 戻り値
/// 成功時はOk(())、複製元または経費が存在しない場合はエラー
pub fn clone_receipt_to_expense(
    report: &mut Report,
    expense_id: &str,
    source_receipt_id: &str,
    new_id: String,
) -> AppResult<()> {
    let copy = report
        .expenses
        .iter()
        .filter_map(|expense| expense.receipt.as_ref())
        .find(|receipt| receipt.id == source_receipt_id)
        .ok_or_else(|| AppError::not_found("Receipt"))?
        .duplicate_with_id(new_id);
    attach_receipt_to_expense(report, expense_id, copy)
}

/// 経費から領収書を外す
///
/// # 引数
/// * `report` - 対象のレポート
/// * `expense_id` - 対象の経費ID
///
/// # 戻り値
/// 成功時はOk(())、経費または領収書が存在しない場合はエラー
pub fn detach_receipt_from_expense(report: &mut Report, expense_id: &str) -> AppResult<()> {
    let expense = report
        .find_expense_mut(expense_id)
        .ok_or_else(|| AppError::not_found("Expense"))?;
    if expense.receipt.take().is_none() {
        return Err(AppError::not_found("Receipt"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn ids() -> IdGenerator {
        IdGenerator::with_seed(9000)
    }

    #[tokio::test]
    async fn test_read_receipt_file_builds_data_url() {
        let mut file = tempfile::Builder::new()
            .prefix("receipt")
            .suffix(".png")
            .tempfile()
            .unwrap();
        file.write_all(b"fake png bytes").unwrap();

        let receipt = read_receipt_file(file.path(), &ids(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(receipt.mime_type, "image/png");
        assert_eq!(receipt.size, 14);
        assert_eq!(
            receipt.data_url,
            format!("data:image/png;base64,{}", STANDARD.encode(b"fake png bytes"))
        );
        assert!(receipt.filename.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected_before_read() {
        // 存在しないパスでも種別チェックが先に走るため、I/Oエラーにはならない
        let result = read_receipt_file(
            Path::new("/nonexistent/notes.txt"),
            &ids(),
            &CancellationToken::new(),
        )
        .await;

        match result.unwrap_err() {
            AppError::Validation(msg) => assert_eq!(msg, UNSUPPORTED_FILE_MESSAGE),
            other => panic!("バリデーションエラーになるはず: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_supported_file_is_io_error() {
        let result = read_receipt_file(
            Path::new("/nonexistent/receipt.pdf"),
            &ids(),
            &CancellationToken::new(),
        )
        .await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_cancellation_resolves_to_canceled() {
        let mut file = tempfile::Builder::new()
            .prefix("receipt")
            .suffix(".jpg")
            .tempfile()
            .unwrap();
        file.write_all(b"fake jpeg bytes").unwrap();

        let token = CancellationToken::new();
        token.cancel();

        let result = read_receipt_file(file.path(), &ids(), &token).await;
        match result.unwrap_err() {
            AppError::Canceled(msg) => assert_eq!(msg, UPLOAD_CANCELED_MESSAGE),
            other => panic!("キャンセルになるはず: {other:?}"),
        }
    }

    #[test]
    fn test_report_receipts_is_derived_from_expenses() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let reports = crate::features::reports::seed::seed_reports(today);

        // 最新の下書きは経費ゼロなので領収書もゼロ
        assert!(report_receipts(&reports[0]).is_empty());

        // 過去のレポートは全経費に領収書が付いている
        let receipts = report_receipts(&reports[1]);
        assert_eq!(receipts.len(), reports[1].expenses.len());
        assert_eq!(receipts.len(), reports[1].receipt_count());
    }

    fn bare_report() -> Report {
        use crate::features::expenses::models::Expense;
        use crate::features::reports::models::ReportStatus;

        let expense = |id: &str| Expense {
            id: id.to_string(),
            category: "Travel".to_string(),
            date: "2026-01-05".to_string(),
            amount: 10.0,
            currency: "GBP".to_string(),
            payment_method: "Cash".to_string(),
            merchant: "Uber".to_string(),
            description: String::new(),
            receipt: None,
        };
        Report {
            id: "r1".to_string(),
            report_number: "B1".to_string(),
            purpose: "January 2026 expenses".to_string(),
            status: ReportStatus::Draft,
            expenses: vec![expense("e1"), expense("e2")],
        }
    }

    fn sample_receipt(id: &str) -> ReceiptRef {
        ReceiptRef {
            id: id.to_string(),
            filename: "uber-receipt.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 12,
            data_url: "data:application/pdf;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_attach_then_list_shows_receipt_once_under_its_expense() {
        let mut report = bare_report();
        attach_receipt_to_expense(&mut report, "e1", sample_receipt("5000")).unwrap();

        // 一覧には添付した領収書がちょうど1件だけ現れる
        let receipts = report_receipts(&report);
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].id, "5000");

        // 添付先の経費が所有し、他の経費には付かない
        assert_eq!(
            report.expenses[0].receipt.as_ref().unwrap().id,
            "5000"
        );
        assert!(report.expenses[1].receipt.is_none());
    }

    #[test]
    fn test_reattach_replaces_existing_receipt() {
        let mut report = bare_report();
        attach_receipt_to_expense(&mut report, "e1", sample_receipt("5000")).unwrap();
        attach_receipt_to_expense(&mut report, "e1", sample_receipt("5001")).unwrap();

        let receipts = report_receipts(&report);
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].id, "5001");
    }

    #[test]
    fn test_attach_to_missing_expense_is_not_found() {
        let mut report = bare_report();
        let result = attach_receipt_to_expense(&mut report, "missing", sample_receipt("5000"));
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
        assert!(report_receipts(&report).is_empty());
    }

    #[test]
    fn test_clone_attaches_fresh_id_with_same_content() {
        let mut report = bare_report();
        attach_receipt_to_expense(&mut report, "e1", sample_receipt("5000")).unwrap();
        clone_receipt_to_expense(&mut report, "e2", "5000", "6000".to_string()).unwrap();

        let receipts = report_receipts(&report);
        assert_eq!(receipts.len(), 2);

        // 複製元はそのまま、複製は新しいIDで内容が一致する
        let original = report.expenses[0].receipt.as_ref().unwrap();
        let copy = report.expenses[1].receipt.as_ref().unwrap();
        assert_eq!(original.id, "5000");
        assert_eq!(copy.id, "6000");
        assert_eq!(copy.filename, original.filename);
        assert_eq!(copy.data_url, original.data_url);
    }

    #[test]
    fn test_clone_from_missing_receipt_is_not_found() {
        let mut report = bare_report();
        let result = clone_receipt_to_expense(&mut report, "e1", "5000", "6000".to_string());
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[test]
    fn test_detach_removes_receipt_and_rejects_repeat() {
        let mut report = bare_report();
        attach_receipt_to_expense(&mut report, "e1", sample_receipt("5000")).unwrap();

        detach_receipt_from_expense(&mut report, "e1").unwrap();
        assert!(report_receipts(&report).is_empty());

        // 二度目は領収書がないのでエラー
        let result = detach_receipt_from_expense(&mut report, "e1");
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }
}
