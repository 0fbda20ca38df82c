#[macro_use]
extern crate bitflags;

#[cfg(target = "wasm32")]
extern crate wasm_bindgen;

pub mod bindings;
pub mod devices;
