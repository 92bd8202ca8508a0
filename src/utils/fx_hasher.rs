//! A platform-independent FxHasher, so grid-key hashing is reproducible
//! across runs and targets.

const K: u32 = 0x9e3779b9;

/// The FxHasher from rustc_hash, with its internal state pinned to `u32`
/// instead of the pointer-sized word rustc_hash uses.
#[derive(Default)]
pub struct FxHasher32 {
    hash: u32,
}

impl FxHasher32 {
    #[inline]
    fn mix(&mut self, word: u32) {
        self.hash = (self.hash.rotate_left(5) ^ word).wrapping_mul(K);
    }
}

impl std::hash::Hasher for FxHasher32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(4);
        for chunk in &mut chunks {
            self.mix(u32::from_ne_bytes(chunk.try_into().unwrap()));
        }
        for &byte in chunks.remainder() {
            self.mix(byte as u32);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.mix(i as u32);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.mix(i as u32);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.mix(i);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.mix(i as u32);
        self.mix((i >> 32) as u32);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.mix(i as u32);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}
