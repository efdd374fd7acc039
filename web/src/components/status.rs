use apipilot_proto::prelude::RunStatus;
use dioxus::prelude::*;

/// 执行状态标签
#[component]
pub fn StatusBadge(status: RunStatus) -> Element {
    let class = match status {
        RunStatus::Passed => "bg-green-100 text-green-700",
        RunStatus::Failed | RunStatus::Error => "bg-red-100 text-red-700",
        RunStatus::Running | RunStatus::Pending => "bg-blue-100 text-blue-700",
        RunStatus::Skipped | RunStatus::Other(_) => "bg-gray-100 text-gray-600",
    };
    rsx! {
        span { class: "px-2 py-0.5 rounded text-xs font-medium {class}", "{status}" }
    }
}

/// 启用/停用标签
#[component]
pub fn ActiveBadge(active: bool) -> Element {
    rsx! {
        if active {
            span { class: "px-2 py-0.5 rounded text-xs bg-green-100 text-green-700", "启用" }
        } else {
            span { class: "px-2 py-0.5 rounded text-xs bg-gray-100 text-gray-500", "停用" }
        }
    }
}
