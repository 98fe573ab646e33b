//! End-to-end scenarios over the seed data

use chrono::NaiveDate;

use crate::fees::{self, apply_payment, record_payment, FeeStatus, FeeTotals};
use crate::grade_entry::{submit_grades, GradeInput};
use crate::roster::{add_student, filter_roster, StudentForm};
use crate::{seed, FeeError, LetterGrade, Money};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 10).unwrap()
}

fn unpaid_tuition() -> fees::FeeRecord {
    seed::admin::fee_records()
        .into_iter()
        .find(|record| record.id == "3")
        .unwrap()
}

// ============================================================================
// Fee ledger
// ============================================================================

#[test]
fn test_paying_full_balance_settles_record() {
    let record = unpaid_tuition();
    let paid = apply_payment(&record, Money::from_dollars(2500), today()).unwrap();

    assert_eq!(paid.paid_amount, Money::from_dollars(2500));
    assert_eq!(paid.balance, Money::ZERO);
    assert_eq!(paid.status, FeeStatus::Paid);
    assert_eq!(paid.last_payment_date, Some(today()));
}

#[test]
fn test_overpayment_is_rejected_without_mutation() {
    let records = seed::admin::fee_records();
    let result = record_payment(&records, "3", "3000", today());

    assert_eq!(result, Err(FeeError::InvalidAmount));
    assert_eq!(records, seed::admin::fee_records());
}

#[test]
fn test_valid_payments_keep_ledger_consistent() {
    let record = unpaid_tuition();
    for dollars in [1, 250, 1000, 2499, 2500] {
        let amount = Money::from_dollars(dollars);
        let paid = apply_payment(&record, amount, today()).unwrap();
        assert_eq!(paid.balance, record.balance - amount);
        assert_eq!(paid.balance, paid.total_amount - paid.paid_amount);
        let expected = if paid.balance.is_zero() { FeeStatus::Paid } else { FeeStatus::Partial };
        assert_eq!(paid.status, expected);
    }
}

#[test]
fn test_invalid_amounts_are_rejected() {
    let records = seed::admin::fee_records();
    for text in ["0", "-5", "2500.01", "abc", ""] {
        assert_eq!(record_payment(&records, "3", text, today()), Err(FeeError::InvalidAmount), "{text}");
    }
}

#[test]
fn test_payment_never_marks_overdue() {
    // Carol's tuition is overdue in the seed; a partial payment does not keep it so.
    let (_, updated) = record_payment(&seed::admin::fee_records(), "3", "100", today()).unwrap();
    assert_eq!(updated.status, FeeStatus::Partial);
}

#[test]
fn test_unknown_record() {
    let result = record_payment(&seed::admin::fee_records(), "99", "10", today());
    assert_eq!(result, Err(FeeError::NotFound("99".to_string())));
}

#[test]
fn test_seed_fee_totals() {
    let totals = FeeTotals::from_records(&seed::admin::fee_records());
    assert_eq!(totals.collected, Money::from_dollars(4000));
    assert_eq!(totals.pending, Money::from_dollars(4000));
    assert_eq!(totals.overdue, Money::from_dollars(2500));
}

#[test]
fn test_totals_follow_payments() {
    let (records, _) = record_payment(&seed::admin::fee_records(), "2", "1000", today()).unwrap();
    let totals = FeeTotals::from_records(&records);
    assert_eq!(totals.collected, Money::from_dollars(5000));
    assert_eq!(totals.pending, Money::from_dollars(3000));
}

// ============================================================================
// Grades
// ============================================================================

#[test]
fn test_band_examples() {
    assert_eq!(LetterGrade::from_score(92.0), LetterGrade::APlus);
    assert_eq!(LetterGrade::from_score(80.0), LetterGrade::A);
    assert_eq!(LetterGrade::from_score(69.0), LetterGrade::B);
    assert_eq!(LetterGrade::from_score(39.0), LetterGrade::F);
}

#[test]
fn test_single_subject_entry() {
    let input = GradeInput::new().with("mathematics", "92");
    let (saved, card) = submit_grades(&[], "10A", "3", &input).unwrap();

    assert_eq!(saved.len(), 1);
    assert_eq!(card.grades[0].grade, "A+");
    assert_eq!(card.total_marks, 92);
    assert!((card.percentage - 92.0 / 600.0 * 100.0).abs() < 1e-9);
    assert_eq!(card.overall_grade, "F");
}

// ============================================================================
// Roster
// ============================================================================

#[test]
fn test_added_student_is_searchable() {
    let form = StudentForm {
        name: "Frank Moore".to_string(),
        class: "12A".to_string(),
        email: "Frank.Moore@email.com".to_string(),
        ..StudentForm::default()
    };
    let (students, added) = add_student(&seed::admin::students(), &form);

    assert_eq!(added.id, "5");
    let found = filter_roster(&students, "frank.moore", "all");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Frank Moore");
}
