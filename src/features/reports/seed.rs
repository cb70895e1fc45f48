//! 初回セッション用のシードデータ生成
//!
//! 直近5か月分のレポートを決定的に生成する。最新の1件は当月の空の
//! Draft、残り4件は経費と領収書入りのProcessed。レポート番号は新しい
//! ものから古いものへ単調減少する。

use crate::features::expenses::models::Expense;
use crate::features::receipts::models::ReceiptRef;
use crate::features::reports::models::{Report, ReportStatus};
use chrono::{Datelike, Months, NaiveDate};

/// シードのレポート番号の基点（最新レポートの番号）
const SEED_REPORT_NUMBER_BASE: u64 = 2_030_444_129;

/// シード経費IDの開始値
const SEED_EXPENSE_ID_BASE: u64 = 1000;

/// シード領収書IDの開始値
const SEED_RECEIPT_ID_BASE: u64 = 5000;

/// シード経費のテンプレート（日付は対象月の日のみ指定）
struct SeedExpense {
    day: u32,
    category: &'static str,
    amount: f64,
    merchant: &'static str,
    description: &'static str,
    receipt_filename: &'static str,
}

/// 月ごとのシード経費テンプレート（新しい月から並ぶ。先頭月は空のDraft）
const SEED_MONTHS: [&[SeedExpense]; 4] = [
    &[
        SeedExpense {
            day: 5,
            category: "Travel",
            amount: 34.50,
            merchant: "Uber",
            description: "Taxi to client office",
            receipt_filename: "uber-receipt-jan.pdf",
        },
        SeedExpense {
            day: 12,
            category: "Hotel",
            amount: 189.00,
            merchant: "Premier Inn",
            description: "Overnight stay – London",
            receipt_filename: "premier-inn-invoice.png",
        },
    ],
    &[
        SeedExpense {
            day: 3,
            category: "Travel",
            amount: 22.00,
            merchant: "Bolt",
            description: "Taxi to airport",
            receipt_filename: "bolt-ride-dec.png",
        },
        SeedExpense {
            day: 10,
            category: "Hardware",
            amount: 74.99,
            merchant: "Amazon",
            description: "USB-C hub for dev laptop",
            receipt_filename: "amazon-order-dec.pdf",
        },
        SeedExpense {
            day: 18,
            category: "Hotel",
            amount: 210.00,
            merchant: "Hilton",
            description: "Hotel – Manchester meeting",
            receipt_filename: "hilton-folio.pdf",
        },
    ],
    &[
        SeedExpense {
            day: 2,
            category: "Gift",
            amount: 45.00,
            merchant: "John Lewis",
            description: "Client gift basket",
            receipt_filename: "johnlewis-receipt.png",
        },
        SeedExpense {
            day: 8,
            category: "Travel",
            amount: 28.50,
            merchant: "Addison Lee",
            description: "Taxi to Reading office",
            receipt_filename: "addisonlee-nov.pdf",
        },
        SeedExpense {
            day: 15,
            category: "Hotel",
            amount: 175.00,
            merchant: "Travelodge",
            description: "Overnight stay – Birmingham",
            receipt_filename: "travelodge-confirmation.pdf",
        },
        SeedExpense {
            day: 22,
            category: "Hardware",
            amount: 59.99,
            merchant: "Currys",
            description: "Wireless mouse & keyboard",
            receipt_filename: "currys-receipt.png",
        },
    ],
    &[
        SeedExpense {
            day: 6,
            category: "Travel",
            amount: 41.00,
            merchant: "Uber",
            description: "Taxi to Heathrow",
            receipt_filename: "uber-heathrow-oct.pdf",
        },
        SeedExpense {
            day: 19,
            category: "Hotel",
            amount: 199.00,
            merchant: "Holiday Inn",
            description: "Hotel – Edinburgh trip",
            receipt_filename: "holidayinn-edinburgh.png",
        },
    ],
];

/// シードレポート一式を生成する
///
/// # 引数
/// * `today` - 基準日（当月の決定に使う。テストでは固定日を注入する）
///
/// # 戻り値
/// 新しい月から古い月の順に並んだ5件のレポート
pub fn seed_reports(today: NaiveDate) -> Vec<Report> {
    let mut expense_id = SEED_EXPENSE_ID_BASE;
    let mut receipt_id = SEED_RECEIPT_ID_BASE;
    let current_month_start = today
        .with_day(1)
        .expect("月初日は常に構築できる");

    let mut reports = Vec::with_capacity(SEED_MONTHS.len() + 1);
    for index in 0..=SEED_MONTHS.len() {
        let month_start = current_month_start
            .checked_sub_months(Months::new(index as u32))
            .expect("過去5か月は常に表現できる");
        let purpose = format!("{} expenses", month_start.format("%B %Y"));
        let report_number = format!("B{}", SEED_REPORT_NUMBER_BASE - index as u64);

        let expenses = if index == 0 {
            // 当月のレポートは空のDraftから始まる
            Vec::new()
        } else {
            SEED_MONTHS[index - 1]
                .iter()
                .map(|template| {
                    let expense =
                        seed_expense(template, month_start, expense_id, receipt_id);
                    expense_id += 1;
                    receipt_id += 1;
                    expense
                })
                .collect()
        };

        reports.push(Report {
            id: format!("seed-{}", index + 1),
            report_number,
            purpose,
            status: if index == 0 {
                ReportStatus::Draft
            } else {
                ReportStatus::Processed
            },
            expenses,
        });
    }

    reports
}

/// テンプレートからシード経費をひとつ組み立てる
fn seed_expense(
    template: &SeedExpense,
    month_start: NaiveDate,
    expense_id: u64,
    receipt_id: u64,
) -> Expense {
    let date = month_start
        .with_day(template.day)
        .expect("シードの日付は各月に存在する")
        .format("%Y-%m-%d")
        .to_string();

    Expense {
        id: expense_id.to_string(),
        category: template.category.to_string(),
        date,
        amount: template.amount,
        currency: "GBP".to_string(),
        payment_method: "Cash".to_string(),
        merchant: template.merchant.to_string(),
        description: template.description.to_string(),
        receipt: Some(seed_receipt(template.receipt_filename, receipt_id)),
    }
}

/// シード用の領収書参照を組み立てる（サイズ0・空のdata URL）
fn seed_receipt(filename: &str, receipt_id: u64) -> ReceiptRef {
    let mime_type = if filename.ends_with(".pdf") {
        "application/pdf"
    } else {
        "image/png"
    };
    ReceiptRef {
        id: receipt_id.to_string(),
        filename: filename.to_string(),
        mime_type: mime_type.to_string(),
        size: 0,
        data_url: String::new(),
    }
}
