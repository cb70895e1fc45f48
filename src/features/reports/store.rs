//! セッションストア
//!
//! セッション内のレポート一覧の唯一の正典。読み込み・保存・リセット・
//! シード・レポート番号の採番を提供する。保存形式はストレージキー
//! ひとつに対するJSON全量書き換え。

use crate::features::migrations::normalizer::normalize_reports;
use crate::features::reports::models::Report;
use crate::features::reports::seed::seed_reports;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::SessionStorage;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

/// レポート一覧を保持するストレージキー
pub const REPORTS_KEY: &str = "keihi-seisan-reports";

/// レポート番号のパターン（`B<数字>`）
static REPORT_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^B(\d+)$").expect("レポート番号パターンが不正です"));

/// 読み込み結果
///
/// 読み込みの縮退方針を呼び出し側に委ねるための明示的な結果型。
/// ストレージ自体の障害は`AppError`として別途伝播する。
#[derive(Debug)]
pub enum LoadOutcome {
    /// 保存済みデータを読み込んだ（正規化で書き換えた場合はmigrated=true）
    Loaded {
        reports: Vec<Report>,
        migrated: bool,
    },
    /// 初回セッションのためシードデータを生成・保存した
    Seeded(Vec<Report>),
    /// 保存データが解析できなかった（このセッションのデータは空として扱う）
    Corrupted,
}

impl LoadOutcome {
    /// レポート一覧として取り出す（Corruptedは空のリストに縮退）
    pub fn into_reports(self) -> Vec<Report> {
        match self {
            LoadOutcome::Loaded { reports, .. } => reports,
            LoadOutcome::Seeded(reports) => reports,
            LoadOutcome::Corrupted => Vec::new(),
        }
    }
}

/// レポート一覧を読み込む
///
/// ストレージが空なら`seed_session`でシードを生成・保存する。
/// 読み込んだデータには毎回正規化パスを適用し、変更があれば
/// 移行後の形で再保存する。
///
/// # 引数
/// * `storage` - セッションストレージ
///
/// # 戻り値
/// 読み込み結果、またはストレージ障害時はエラー
pub fn load_reports(storage: &dyn SessionStorage) -> AppResult<LoadOutcome> {
    let Some(raw) = storage.get(REPORTS_KEY)? else {
        // ストレージが空であることを確認できた場合のみシードする
        let mut seeded = seed_session(storage)?;
        // シードも他のデータと同様に正規化パスを通す（正準形なので変更なし）
        if normalize_reports(&mut seeded) {
            save_reports(storage, &seeded)?;
        }
        return Ok(LoadOutcome::Seeded(seeded));
    };

    let mut reports: Vec<Report> = match serde_json::from_str(&raw) {
        Ok(reports) => reports,
        Err(e) => {
            log::warn!("保存データの解析に失敗しました（空の一覧として扱います）: {e}");
            return Ok(LoadOutcome::Corrupted);
        }
    };

    let migrated = normalize_reports(&mut reports);
    if migrated {
        save_reports(storage, &reports)?;
        log::info!("レガシー形式のレポートデータを正規化して再保存しました");
    }

    Ok(LoadOutcome::Loaded { reports, migrated })
}

/// レポート一覧を保存する
///
/// 渡された全量をシリアライズして既存の状態を上書きする。
/// 同じ一覧を二度保存しても追加の効果はない。書き込み失敗は
/// 呼び出し側へ伝播し、画面でエラーとして扱われる。
///
/// # 引数
/// * `storage` - セッションストレージ
/// * `reports` - 保存するレポート一覧（全量）
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn save_reports(storage: &dyn SessionStorage, reports: &[Report]) -> AppResult<()> {
    let serialized = serde_json::to_string(reports)?;
    storage.set(REPORTS_KEY, &serialized)
}

/// シードデータを生成して保存する
///
/// ロードの副作用に隠さず、単独で呼び出せる初期化操作として公開する。
///
/// # 引数
/// * `storage` - セッションストレージ
///
/// # 戻り値
/// 生成したシードレポート一覧、または失敗時はエラー
pub fn seed_session(storage: &dyn SessionStorage) -> AppResult<Vec<Report>> {
    let reports = seed_reports(Local::now().date_naive());
    save_reports(storage, &reports)?;
    log::info!(
        "初回セッションのためシードデータを生成しました: {}件",
        reports.len()
    );
    Ok(reports)
}

/// セッションをリセットする
///
/// 保存済み状態を破棄し、直ちに再シードする。
///
/// # 引数
/// * `storage` - セッションストレージ
///
/// # 戻り値
/// 再シード後のレポート一覧、または失敗時はエラー
pub fn reset_session(storage: &dyn SessionStorage) -> AppResult<Vec<Report>> {
    storage.remove(REPORTS_KEY)?;
    log::info!("セッションをリセットしました");
    seed_session(storage)
}

/// 新しいレポート番号を採番する
///
/// 既存の`B<数字>`形式の番号から最大値を取り、その次の番号を返す。
/// 任意の削除が起きても衝突しない（固定基点からの連番方式は
/// 削除後に衝突しうるため廃止済み）。
///
/// # 引数
/// * `reports` - 現在のレポート一覧
///
/// # 戻り値
/// 一覧内で一意な新しいレポート番号
pub fn generate_report_number(reports: &[Report]) -> String {
    let max_number = reports
        .iter()
        .filter_map(|report| {
            REPORT_NUMBER_PATTERN
                .captures(&report.report_number)
                .and_then(|captures| captures[1].parse::<u64>().ok())
        })
        .max()
        .unwrap_or(0);
    format!("B{}", max_number + 1)
}

/// レポートをひとつ更新して保存する
///
/// 全量読み込み → メモリ上で変更 → 全量保存、という逐次実行前提の
/// 更新パス。単一スレッド・単一ユーザーのセッションでのみ安全。
///
/// # 引数
/// * `storage` - セッションストレージ
/// * `report_id` - 更新対象のレポートID
/// * `mutate` - レポートへ適用する変更
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラー
pub fn update_report<F>(
    storage: &dyn SessionStorage,
    report_id: &str,
    mutate: F,
) -> AppResult<Report>
where
    F: FnOnce(&mut Report) -> AppResult<()>,
{
    let mut reports = load_reports(storage)?.into_reports();
    let report = reports
        .iter_mut()
        .find(|report| report.id == report_id)
        .ok_or_else(|| AppError::not_found("Report"))?;

    mutate(report)?;
    let updated = report.clone();
    save_reports(storage, &reports)?;
    Ok(updated)
}
