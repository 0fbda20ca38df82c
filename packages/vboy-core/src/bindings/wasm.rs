/// WASM front-end for the emulator core
use crate::devices::core::VirtualBoy;
use console_error_panic_hook;
use std::panic;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

#[wasm_bindgen]
pub struct VboyEmulator {
    vb: VirtualBoy,
}

#[wasm_bindgen]
impl VboyEmulator {
    #[wasm_bindgen(constructor)]
    pub fn new(buf: &[u8]) -> Result<VboyEmulator, JsValue> {
        let mut vb = VirtualBoy::new();
        vb.load_rom(buf).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(VboyEmulator { vb })
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.vb.reset();
    }

    #[wasm_bindgen]
    pub fn step_frame(&mut self) {
        self.vb.step_frame();
    }

    #[wasm_bindgen]
    pub fn rom_title(&self) -> String {
        self.vb.get_rom_title().to_string()
    }

    #[wasm_bindgen]
    pub fn save_state(&self) -> Vec<u8> {
        self.vb.save_state()
    }

    #[wasm_bindgen]
    pub fn load_state(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.vb.load_state(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Installs a global panic handler to make debugging easier
#[wasm_bindgen]
pub fn init_debug_hooks() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
}
