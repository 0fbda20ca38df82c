#[cfg(target = "wasm32")]
pub mod wasm;
