use dioxus::prelude::*;
use icondata::Icon as IconData;

/// 渲染 icondata 图标为内联 svg
#[component]
pub fn Icon(icon: &'static IconData, class: Option<&'static str>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or("w-4 h-4"),
            view_box: icon.view_box.unwrap_or("0 0 1024 1024"),
            fill: icon.fill.unwrap_or("currentColor"),
            stroke: icon.stroke.unwrap_or("none"),
            stroke_width: icon.stroke_width,
            stroke_linecap: icon.stroke_linecap,
            stroke_linejoin: icon.stroke_linejoin,
            dangerous_inner_html: icon.data,
        }
    }
}

/// 路由元信息中的图标名到图标的映射
pub fn route_icon(name: &str) -> &'static IconData {
    match name {
        "HomeFilled" => &icondata::AiHomeFilled,
        "Folder" => &icondata::AiFolderOutlined,
        "Collection" => &icondata::AiAppstoreOutlined,
        "Clock" => &icondata::AiClockCircleOutlined,
        "Document" => &icondata::AiFileTextOutlined,
        _ => &icondata::AiApiOutlined,
    }
}
