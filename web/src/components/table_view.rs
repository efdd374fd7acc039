use dioxus::prelude::*;

/// 纯文本表格；提供 `on_row_click` 时行可点击
#[component]
pub fn TableView(
    headers: Vec<String>,
    data: Vec<Vec<String>>,
    #[props(optional)] on_row_click: Option<EventHandler<usize>>,
) -> Element {
    let row_class = if on_row_click.is_some() {
        "border-b border-gray-100 cursor-pointer hover:bg-blue-50"
    } else {
        "border-b border-gray-100"
    };

    rsx! {
        div {
            class: "w-full overflow-x-auto",
            table {
                class: "w-full text-sm table-auto",
                thead {
                    tr { class: "border-b border-gray-200 text-left text-gray-500",
                        for header in headers {
                            th { class: "px-3 py-2 font-medium whitespace-nowrap", "{header}" }
                        }
                    }
                }
                tbody {
                    for (row_idx, row) in data.into_iter().enumerate() {
                        tr {
                            key: "{row_idx}",
                            class: row_class,
                            onclick: move |_| {
                                if let Some(cb) = on_row_click {
                                    cb.call(row_idx);
                                }
                            },
                            for cell in row {
                                td { class: "px-3 py-2 text-gray-700", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
