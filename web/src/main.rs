mod app;
mod components;
mod hooks;
mod pages;

fn main() {
    dioxus::launch(app::App);
}
