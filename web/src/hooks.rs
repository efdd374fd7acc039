use std::future::Future;

use apipilot_client::{ApiClient, AppError, ProjectState, ProjectStore};
use dioxus::prelude::*;

/// API 调用状态
#[derive(Clone)]
pub struct ApiState<T: Clone + 'static> {
    pub loading: Signal<bool>,
    pub data: Signal<Option<Result<T, AppError>>>,
}

impl<T: Clone + 'static> ApiState<T> {
    /// 检查是否正在加载
    #[inline]
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }
}

/// 简单的 API 调用 hook（不自动执行）
pub fn use_api_simple<T: Clone + 'static>() -> ApiState<T> {
    ApiState {
        loading: use_signal(|| false),
        data: use_signal(|| None),
    }
}

/// 通用的 API 调用 hook（自动执行）
///
/// 组件挂载时执行一次；`fetch_fn` 同步部分读取的信号变化时重新执行。
///
/// # 示例
/// ```rust
/// let api = use_api_client();
/// let state = use_api(move || {
///     let api = api.clone();
///     async move { api.get_dashboard_stats().await }
/// });
/// ```
pub fn use_api<T, F, Fut>(mut fetch_fn: F) -> ApiState<T>
where
    T: Clone + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_api_simple::<T>();

    use_effect(move || {
        let mut loading = state.loading;
        let mut data = state.data;
        let result_future = fetch_fn();
        spawn(async move {
            *loading.write() = true;
            let result = result_future.await;
            *data.write() = Some(result);
            *loading.write() = false;
        });
    });

    state
}

/// 全局共享的项目状态仓库
pub fn use_store() -> ProjectStore {
    use_context::<ProjectStore>()
}

pub fn use_api_client() -> ApiClient {
    use_store().api().clone()
}

/// 将仓库的 watch 通道桥接为信号，状态每次变化都会触发重新渲染
pub fn use_project_state() -> Signal<ProjectState> {
    let store = use_store();
    let mut state = use_signal(|| store.snapshot());

    use_future(move || {
        let mut rx = store.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                state.set(snapshot);
            }
        }
    });

    state
}

/// 用于在增删改之后触发列表重新加载
#[derive(Clone, Copy, PartialEq)]
pub struct Reload(Signal<u32>);

impl Reload {
    /// 在 `use_api` 的闭包中调用以建立依赖
    pub fn track(&self) {
        let _ = self.0.read();
    }

    pub fn bump(&mut self) {
        *self.0.write() += 1;
    }
}

pub fn use_reload() -> Reload {
    Reload(use_signal(|| 0))
}
