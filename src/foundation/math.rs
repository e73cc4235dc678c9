#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Length-prefixed so adjacent strings cannot alias.
    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Source-over of a straight-alpha pixel onto an opaque straight-alpha destination.
pub(crate) fn blend_over_opaque(dst: &mut [u8], src: [u8; 4]) {
    let a = u16::from(src[3]);
    let inv = 255 - a;
    for c in 0..3 {
        dst[c] = mul_div255_u8(u16::from(src[c]), a)
            .saturating_add(mul_div255_u8(u16::from(dst[c]), inv));
    }
    dst[3] = 255;
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
