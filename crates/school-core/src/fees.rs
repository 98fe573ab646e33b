//! Fee Ledger
//!
//! One charge line per student and the payment rule that moves it towards
//! `Paid`. Records are replaced wholesale; nothing is mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::FeeError;
use crate::money::Money;

/// Payment state of a fee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeStatus {
    Paid,
    Partial,
    Overdue,
    Pending,
}

impl FeeStatus {
    pub const ALL: [FeeStatus; 4] = [
        FeeStatus::Paid,
        FeeStatus::Partial,
        FeeStatus::Pending,
        FeeStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "Paid",
            FeeStatus::Partial => "Partial",
            FeeStatus::Overdue => "Overdue",
            FeeStatus::Pending => "Pending",
        }
    }

    /// Lower-case filter value (`"paid"`, `"overdue"`, ...)
    pub fn filter_value(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "paid",
            FeeStatus::Partial => "partial",
            FeeStatus::Overdue => "overdue",
            FeeStatus::Pending => "pending",
        }
    }
}

/// One tuition/activity charge with payment progress.
///
/// `balance == total_amount - paid_amount` holds for records produced by
/// [`apply_payment`], but seed data is taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub class: String,
    pub fee_type: String,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub balance: Money,
    pub due_date: NaiveDate,
    pub last_payment_date: Option<NaiveDate>,
    pub status: FeeStatus,
}

impl Entity for FeeRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FeeRecord {
    /// Only records with something left to pay offer the Pay action
    pub fn can_pay(&self) -> bool {
        self.balance.is_positive()
    }
}

/// Apply a payment to one record.
///
/// The amount must satisfy `0 < amount <= balance`. The new balance is
/// recomputed from the total, and the status becomes `Paid` when it is
/// exactly zero, otherwise `Partial`. Due dates are never consulted, so a
/// payment never produces `Overdue`.
pub fn apply_payment(
    record: &FeeRecord,
    amount: Money,
    today: NaiveDate,
) -> Result<FeeRecord, FeeError> {
    if !amount.is_positive() || amount > record.balance {
        return Err(FeeError::InvalidAmount);
    }

    let paid_amount = record.paid_amount + amount;
    let balance = record.total_amount - paid_amount;
    let status = if balance.is_zero() {
        FeeStatus::Paid
    } else {
        FeeStatus::Partial
    };

    Ok(FeeRecord {
        paid_amount,
        balance,
        last_payment_date: Some(today),
        status,
        ..record.clone()
    })
}

/// Parse the dialog's amount text and apply it to the record with `id`.
///
/// Returns the replacement array together with the updated record.
pub fn record_payment(
    records: &[FeeRecord],
    id: &str,
    amount_text: &str,
    today: NaiveDate,
) -> Result<(Vec<FeeRecord>, FeeRecord), FeeError> {
    let amount = Money::parse(amount_text)?;
    let current = records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| FeeError::NotFound(id.to_string()))?;
    let updated = apply_payment(current, amount, today)?;

    let replaced = records
        .iter()
        .map(|record| {
            if record.id == id {
                updated.clone()
            } else {
                record.clone()
            }
        })
        .collect();

    Ok((replaced, updated))
}

/// Status dropdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FeeStatus),
}

impl StatusFilter {
    /// Parse a dropdown value; anything unrecognised shows everything
    pub fn from_value(value: &str) -> Self {
        FeeStatus::ALL
            .into_iter()
            .find(|status| status.filter_value() == value)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.filter_value(),
        }
    }

    pub fn matches(&self, status: FeeStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Case-insensitive search on student name or class, combined with the
/// status filter
pub fn filter_records(records: &[FeeRecord], search: &str, status: StatusFilter) -> Vec<FeeRecord> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_search = record.student_name.to_lowercase().contains(&needle)
                || record.class.to_lowercase().contains(&needle);
            matches_search && status.matches(record.status)
        })
        .cloned()
        .collect()
}

/// Summary cards at the top of the fees page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeTotals {
    /// Sum of paid amounts
    pub collected: Money,
    /// Sum of balances
    pub pending: Money,
    /// Sum of balances on records marked overdue
    pub overdue: Money,
}

impl FeeTotals {
    pub fn from_records(records: &[FeeRecord]) -> Self {
        Self {
            collected: records.iter().map(|r| r.paid_amount).sum(),
            pending: records.iter().map(|r| r.balance).sum(),
            overdue: records
                .iter()
                .filter(|r| r.status == FeeStatus::Overdue)
                .map(|r| r.balance)
                .sum(),
        }
    }
}

/// Spreadsheet export of the given records
pub fn to_csv(records: &[FeeRecord]) -> String {
    let mut out = String::from(
        "Student ID,Student,Class,Fee Type,Total Amount,Paid Amount,Balance,Due Date,Last Payment,Status\n",
    );
    for record in records {
        let row = [
            csv_field(&record.student_id),
            csv_field(&record.student_name),
            csv_field(&record.class),
            csv_field(&record.fee_type),
            record.total_amount.to_input_string(),
            record.paid_amount.to_input_string(),
            record.balance.to_input_string(),
            record.due_date.to_string(),
            record
                .last_payment_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            record.status.as_str().to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub(crate) fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(total: i64, paid: i64, status: FeeStatus) -> FeeRecord {
        FeeRecord {
            id: "1".to_string(),
            student_id: "1".to_string(),
            student_name: "Alice Johnson".to_string(),
            class: "10A".to_string(),
            fee_type: "Tuition Fee".to_string(),
            total_amount: Money::from_dollars(total),
            paid_amount: Money::from_dollars(paid),
            balance: Money::from_dollars(total - paid),
            due_date: date(2024, 9, 1),
            last_payment_date: None,
            status,
        }
    }

    #[test]
    fn test_partial_payment() {
        let today = date(2024, 9, 3);
        let updated = apply_payment(&record(2500, 0, FeeStatus::Pending), Money::from_dollars(1000), today).unwrap();
        assert_eq!(updated.paid_amount, Money::from_dollars(1000));
        assert_eq!(updated.balance, Money::from_dollars(1500));
        assert_eq!(updated.status, FeeStatus::Partial);
        assert_eq!(updated.last_payment_date, Some(today));
    }

    #[test]
    fn test_overdue_record_paid_off() {
        let updated = apply_payment(&record(2500, 0, FeeStatus::Overdue), Money::from_dollars(2500), date(2024, 9, 3)).unwrap();
        assert_eq!(updated.status, FeeStatus::Paid);
        assert!(updated.balance.is_zero());
    }

    #[test]
    fn test_fractional_payments_reach_exact_zero() {
        let today = date(2024, 9, 3);
        let first = apply_payment(&record(2500, 1500, FeeStatus::Partial), Money::from_cents(99_990), today).unwrap();
        assert_eq!(first.status, FeeStatus::Partial);
        let second = apply_payment(&first, Money::from_cents(10), today).unwrap();
        assert_eq!(second.status, FeeStatus::Paid);
        assert_eq!(second.balance, Money::ZERO);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        let original = record(500, 0, FeeStatus::Pending);
        for cents in [0, -1, -50_000] {
            let result = apply_payment(&original, Money::from_cents(cents), date(2024, 9, 3));
            assert_eq!(result, Err(FeeError::InvalidAmount));
        }
    }

    #[test]
    fn test_record_payment_replaces_only_target() {
        let mut other = record(500, 0, FeeStatus::Pending);
        other.id = "2".to_string();
        let records = vec![record(2500, 0, FeeStatus::Pending), other.clone()];

        let (replaced, updated) = record_payment(&records, "1", "2500", date(2024, 9, 3)).unwrap();
        assert_eq!(replaced.len(), 2);
        assert_eq!(replaced[0], updated);
        assert_eq!(replaced[1], other);
    }

    #[test]
    fn test_record_payment_errors() {
        let records = vec![record(2500, 0, FeeStatus::Pending)];
        let today = date(2024, 9, 3);
        assert_eq!(record_payment(&records, "1", "abc", today), Err(FeeError::InvalidAmount));
        assert_eq!(record_payment(&records, "1", "", today), Err(FeeError::InvalidAmount));
        assert_eq!(
            record_payment(&records, "7", "10", today),
            Err(FeeError::NotFound("7".to_string()))
        );
    }

    #[test]
    fn test_status_filter_values() {
        assert_eq!(StatusFilter::from_value("all"), StatusFilter::All);
        assert_eq!(StatusFilter::from_value("overdue"), StatusFilter::Only(FeeStatus::Overdue));
        assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::Only(FeeStatus::Partial).value(), "partial");
    }

    #[test]
    fn test_filter_by_search_and_status() {
        let mut bob = record(2500, 1500, FeeStatus::Partial);
        bob.id = "2".to_string();
        bob.student_name = "Bob Smith".to_string();
        bob.class = "9B".to_string();
        let records = vec![record(2500, 2500, FeeStatus::Paid), bob];

        assert_eq!(filter_records(&records, "", StatusFilter::All).len(), 2);
        assert_eq!(filter_records(&records, "BOB", StatusFilter::All).len(), 1);
        assert_eq!(filter_records(&records, "9b", StatusFilter::All)[0].id, "2");
        assert!(filter_records(&records, "bob", StatusFilter::Only(FeeStatus::Paid)).is_empty());
    }

    #[test]
    fn test_csv_export_quotes_commas() {
        let mut row = record(2500, 0, FeeStatus::Pending);
        row.student_name = "Smith, Bob".to_string();
        let csv = to_csv(&[row]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Student ID,Student,"));
        assert_eq!(lines[1], "1,\"Smith, Bob\",10A,Tuition Fee,2500,0,2500,2024-09-01,,Pending");
    }
}
