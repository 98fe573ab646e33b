//! Fees Management Page
//!
//! Ledger table with search/status filters, totals, CSV export and the
//! payment dialog. Every payment replaces the whole record list.

use leptos::prelude::*;
use school_core::fees::{filter_records, record_payment, to_csv};
use school_core::{format, seed, FeeRecord, FeeStatus, FeeTotals, StatusFilter};

use crate::components::{DashboardLayout, Modal, StatCard};
use crate::context::use_app;
use crate::export;
use crate::pages::today;

fn status_class(status: FeeStatus) -> &'static str {
    match status {
        FeeStatus::Paid => "badge paid",
        FeeStatus::Partial => "badge partial",
        FeeStatus::Overdue => "badge overdue",
        FeeStatus::Pending => "badge pending",
    }
}

fn status_icon(status: FeeStatus) -> &'static str {
    match status {
        FeeStatus::Paid => "✔",
        FeeStatus::Overdue => "⚠",
        _ => "📅",
    }
}

#[component]
pub fn Fees() -> impl IntoView {
    let ctx = use_app();
    let (records, set_records) = signal(seed::admin::fee_records());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (paying, set_paying) = signal::<Option<FeeRecord>>(None);
    let (amount, set_amount) = signal(String::new());

    let filtered = Memo::new(move |_| filter_records(&records.get(), &search.get(), status_filter.get()));
    let totals = Memo::new(move |_| records.with(|records| FeeTotals::from_records(records)));

    let open_payment = move |record: FeeRecord| {
        set_amount.set(record.balance.to_input_string());
        set_paying.set(Some(record));
    };

    let submit_payment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = paying.get_untracked() else {
            return;
        };
        let result = record_payment(&records.get_untracked(), &record.id, &amount.get_untracked(), today());
        match result {
            Ok((updated, paid)) => {
                let received = paid.paid_amount - record.paid_amount;
                log::info!(
                    "[FEES] payment recorded id={} amount={} status={}",
                    paid.id,
                    received,
                    paid.status.as_str()
                );
                set_records.set(updated);
                set_paying.set(None);
                set_amount.set(String::new());
                ctx.success(
                    "Payment Recorded",
                    format!("Payment of {} has been recorded for {}.", received, paid.student_name),
                );
            }
            Err(err) => {
                log::warn!("[FEES] payment rejected for {}: {}", record.id, err);
                ctx.error("Invalid Amount", err.to_string());
            }
        }
    };

    let export_csv = move |_| {
        let csv = filtered.with_untracked(|records| to_csv(records));
        match export::download("fee-records.csv", export::CSV, &csv) {
            Ok(()) => ctx.success("Export Started", "Fee records are being exported to Excel format."),
            Err(e) => log::error!("[FEES] export failed: {}", e),
        }
    };

    view! {
        <DashboardLayout title="Fees Management" description="Track payments, manage fee records, and generate reports">
            <div class="stat-grid three">
                <StatCard title="Total Collected" value=Signal::derive(move || totals.get().collected.to_string()) tone="tone-success" />
                <StatCard title="Total Pending" value=Signal::derive(move || totals.get().pending.to_string()) tone="tone-warning" />
                <StatCard title="Overdue Amount" value=Signal::derive(move || totals.get().overdue.to_string()) tone="tone-destructive" />
            </div>

            <section class="card">
                <div class="card-title-row">
                    <h3>{move || format!("Fee Records ({})", filtered.get().len())}</h3>
                    <button class="btn" on:click=export_csv>"⬇ Export to Excel"</button>
                </div>
                <div class="filter-row">
                    <input
                        type="search"
                        placeholder="Search by student name or class..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || status_filter.get().value()
                        on:change=move |ev| set_status_filter.set(StatusFilter::from_value(&event_target_value(&ev)))
                    >
                        <option value="all">"All Status"</option>
                        {FeeStatus::ALL.iter().map(|status| view! {
                            <option value=status.filter_value()>{status.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </section>

            <section class="card flush">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Class"</th>
                            <th>"Fee Type"</th>
                            <th>"Total Amount"</th>
                            <th>"Paid Amount"</th>
                            <th>"Balance"</th>
                            <th>"Due Date"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|record| (record.id.clone(), record.paid_amount, record.status)
                            children=move |record| {
                                let payable = record.can_pay().then(|| record.clone());
                                let balance_class = if record.balance.is_positive() { "tone-destructive strong" } else { "muted" };
                                view! {
                                    <tr>
                                        <td class="strong">{record.student_name}</td>
                                        <td>{record.class}</td>
                                        <td>{record.fee_type}</td>
                                        <td>{record.total_amount.to_string()}</td>
                                        <td class="tone-success">{record.paid_amount.to_string()}</td>
                                        <td class=balance_class>{record.balance.to_string()}</td>
                                        <td>{format!("{} {}", status_icon(record.status), format::short_date(record.due_date))}</td>
                                        <td><span class=status_class(record.status)>{record.status.as_str()}</span></td>
                                        <td class="actions">
                                            {payable.map(|record| view! {
                                                <button class="btn primary small" on:click=move |_| open_payment(record.clone())>"Pay"</button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <Modal
                open=Signal::derive(move || paying.get().is_some())
                on_close=move || set_paying.set(None)
                title="Record Payment"
            >
                {move || paying.get().map(|record| view! {
                    <form class="form-stack" on:submit=submit_payment>
                        <p class="muted">{format!("Enter payment details for {}", record.student_name)}</p>
                        <div class="tile-grid two">
                            <div>
                                <p class="muted small">"Total Amount"</p>
                                <p class="strong">{record.total_amount.to_string()}</p>
                            </div>
                            <div>
                                <p class="muted small">"Outstanding Balance"</p>
                                <p class="strong tone-destructive">{record.balance.to_string()}</p>
                            </div>
                        </div>
                        <label>"Payment Amount"
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                max=record.balance.to_input_string()
                                placeholder="Enter amount"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="button-row">
                            <button type="button" class="btn" on:click=move |_| set_paying.set(None)>"Cancel"</button>
                            <button type="submit" class="btn primary">"Record Payment"</button>
                        </div>
                    </form>
                })}
            </Modal>
        </DashboardLayout>
    }
}
