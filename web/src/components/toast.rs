use std::time::Duration;

use apipilot_client::notify::Notifier;
use dioxus::prelude::*;

use crate::components::icon::Icon;

/// 同时显示的最大提示条数
const MAX_TOASTS: usize = 4;

/// 提示自动关闭前的停留时间
pub const TOAST_TTL: Duration = Duration::from_millis(3_000);

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Bounded list of visible toasts, oldest first.
#[derive(Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast, evicting the oldest ones past [`MAX_TOASTS`]. Returns the new id.
    pub fn push(&mut self, message: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            message: message.to_string(),
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    /// No-op when the toast is already gone.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(ToastQueue::default);

/// Show `message` and close it again after [`TOAST_TTL`].
pub fn push_toast(message: &str) {
    let id = TOASTS.write().push(message);
    spawn(async move {
        async_std::task::sleep(TOAST_TTL).await;
        dismiss_toast(id);
    });
}

pub fn dismiss_toast(id: u64) {
    TOASTS.write().dismiss(id);
}

/// 拦截器的错误提示通道，写入全局提示列表
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn error(&self, message: &str) {
        push_toast(message);
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read().items().to_vec();
    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 space-y-2 w-80",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "flex items-start justify-between gap-3 px-4 py-3 rounded-lg shadow bg-red-50 border border-red-200 text-red-700 text-sm",
                    span { class: "break-all", "{toast.message}" }
                    button {
                        class: "text-red-400 hover:text-red-600",
                        onclick: move |_| dismiss_toast(toast.id),
                        Icon { icon: &icondata::AiCloseOutlined, class: "w-4 h-4" }
                    }
                }
            }
        }
    }
}
