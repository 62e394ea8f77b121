use super::super::*;

impl Grid {
    // === Raw pointers for JS interop ===
    // JS builds Uint8Array / Uint32Array views over wasm memory with these.
    // Views must be rebuilt after any call that could grow memory.
    pub fn kinds_ptr(&self) -> *const ElementId {
        self.kinds.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn kinds_byte_len(&self) -> usize {
        self.kinds.len() * std::mem::size_of::<ElementId>()
    }

    pub fn colors_byte_len(&self) -> usize {
        self.colors.len() * std::mem::size_of::<u32>()
    }
}
