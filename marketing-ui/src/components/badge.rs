//! Status and Compliance Badges

use leptos::*;
use marketing_bot::compliance::ComplianceReport;
use marketing_bot::store::Status;

fn status_class(status: Status) -> &'static str {
    match status {
        Status::Draft => "bg-gray-600 text-gray-100",
        Status::Queued => "bg-blue-600 text-blue-50",
        Status::Approved => "bg-teal-600 text-teal-50",
        Status::Rejected => "bg-red-600 text-red-50",
        Status::Published => "bg-green-600 text-green-50",
    }
}

/// Lifecycle status pill
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 rounded text-xs font-medium {}", status_class(status))>
            {status.as_str()}
        </span>
    }
}

/// Pass/Fail pill for a compliance result
#[component]
pub fn ComplianceBadge(report: ComplianceReport) -> impl IntoView {
    let class = if report.pass() {
        "bg-green-700 text-green-50"
    } else {
        "bg-red-700 text-red-50"
    };

    view! {
        <span class=format!("px-2 py-1 rounded text-xs font-medium {}", class)>
            {report.label()}
        </span>
    }
}

/// Badge plus every issue found, or a note that there were none
///
/// Suggestions are listed separately; they never turn a pass into a fail.
#[component]
pub fn ComplianceDetail(report: ComplianceReport) -> impl IntoView {
    let suggestions = report.suggestion_messages();

    view! {
        <div class="space-y-2">
            <ComplianceBadge report=report.clone() />
            {if report.pass() {
                view! {
                    <p class="text-sm text-gray-400">"No compliance issues detected."</p>
                }
                .into_view()
            } else {
                view! {
                    <ul class="list-disc pl-5 text-sm text-red-300 space-y-1">
                        {report
                            .messages()
                            .into_iter()
                            .map(|m| view! { <li>{m}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
            {(!suggestions.is_empty()).then(|| view! {
                <ul class="list-disc pl-5 text-sm text-yellow-300 space-y-1">
                    {suggestions
                        .into_iter()
                        .map(|m| view! { <li>{m}</li> })
                        .collect_view()}
                </ul>
            })}
        </div>
    }
}
