//! My Fees

use leptos::prelude::*;
use school_core::seed::student::{self, PaymentHistoryEntry, PaymentState};
use school_core::{format, Role};

use crate::components::{DashboardLayout, ProgressBar, StatCard};
use crate::context::use_app;
use crate::export;

const TEXT: &str = "text/plain;charset=utf-8";

fn receipt_text(school: &str, payment: &PaymentHistoryEntry) -> Option<String> {
    match payment.state {
        PaymentState::Paid { paid_on, receipt } => Some(format!(
            "{}\nReceipt {}\n\n{}\nAmount: {}\nPaid: {}\n",
            school,
            receipt,
            payment.description,
            payment.amount.to_currency_string(),
            format::long_date(paid_on),
        )),
        PaymentState::Pending { .. } => None,
    }
}

#[component]
pub fn Fees() -> impl IntoView {
    let ctx = use_app();
    let summary = student::fee_summary();
    let percent = summary.paid_percentage();

    let download_receipt = move |payment: PaymentHistoryEntry| {
        let Some(text) = receipt_text(&ctx.school_name(), &payment) else {
            return;
        };
        let PaymentState::Paid { receipt, .. } = payment.state else {
            return;
        };
        if let Err(e) = export::download(&format!("receipt-{}.txt", receipt), TEXT, &text) {
            log::error!("[STUDENT] receipt {} export failed: {}", receipt, e);
        }
    };

    view! {
        <DashboardLayout role=Role::Student>
            <div class="page-header">
                <h1>"Fee Management"</h1>
                <p class="muted">"Track your fee payments and pending dues"</p>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Total Annual Fee" value=summary.total_annual.to_currency_string() tone="tone-primary" />
                <StatCard title="Amount Paid" value=summary.paid.to_currency_string() tone="tone-success" />
                <StatCard title="Pending Amount" value=summary.pending.to_currency_string() tone="tone-warning" />
                <StatCard title="Payment Progress" value=format!("{}%", percent.round()) tone="tone-info" />
            </div>

            <section class="card">
                <h3>"Payment Progress"</h3>
                <div class="list-row small">
                    <span>"Annual Fee Progress"</span>
                    <span>{format!("{} / {}", summary.paid.to_currency_string(), summary.total_annual.to_currency_string())}</span>
                </div>
                <ProgressBar percent=percent />
                <p class="tone-warning small">{format!("⚠ Next payment due: {}", format::long_date(summary.next_due))}</p>
            </section>

            <section class="card">
                <h3>"Upcoming Payments"</h3>
                <ul class="item-list">
                    {student::upcoming_fees().into_iter().map(|fee| view! {
                        <li class="list-row bordered padded">
                            <div>
                                <h4>{fee.description}</h4>
                                <p class="muted small">
                                    {format!("📅 Due: {} ", format::long_date(fee.due))}
                                    <span class="pill outline">{fee.category}</span>
                                </p>
                            </div>
                            <div class="align-end">
                                <p class="strong tone-warning">{fee.amount.to_currency_string()}</p>
                                <button class="btn primary small">"💳 Pay Now"</button>
                            </div>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="card">
                <h3>"Payment History"</h3>
                <ul class="item-list">
                    {student::payment_history().into_iter().map(|payment| {
                        let (when, receipt, badge, label) = match payment.state {
                            PaymentState::Paid { paid_on, receipt } => {
                                (format!("Paid: {}", format::long_date(paid_on)), Some(receipt), "chip-green", "Paid")
                            }
                            PaymentState::Pending { due } => {
                                (format!("Due: {}", format::long_date(due)), None, "chip-orange", "Pending")
                            }
                        };
                        view! {
                            <li class="list-row bordered padded">
                                <div>
                                    <h4>{payment.description}</h4>
                                    <p class="muted small">
                                        {format!("📅 {}", when)}
                                        {receipt.map(|receipt| format!("  Receipt: {}", receipt))}
                                    </p>
                                </div>
                                <div class="row-end">
                                    <div class="align-end">
                                        <p class="strong">{payment.amount.to_currency_string()}</p>
                                        <span class=format!("chip {}", badge)>{label}</span>
                                    </div>
                                    {receipt.map(|_| view! {
                                        <button class="btn outline small" on:click=move |_| download_receipt(payment)>"⬇ Receipt"</button>
                                    })}
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_only_for_settled_payments() {
        let history = student::payment_history();
        let text = receipt_text("Eastwood Academy", &history[0]).unwrap();
        assert!(text.starts_with("Eastwood Academy\nReceipt RCP001"));
        assert!(text.contains("Amount: $7,500.00"));
        assert!(text.contains("Paid: August 15, 2023"));
        assert_eq!(receipt_text("Eastwood Academy", &history[3]), None);
    }
}
