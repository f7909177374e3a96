// src/main.rs — Activity signup page (Rust + Yew + WASM)

mod api;
mod app;
mod banner;
mod components;
mod config;
mod error;
mod model;
mod removal;
mod roster;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
