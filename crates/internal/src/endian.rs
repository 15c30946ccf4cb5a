//! Endianness utility functions

/// Convert a u64 from little-endian byte order to native byte order
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Load `8 * L` little-endian bytes into `L` little-endian 64-bit limbs
///
/// The caller guarantees `bytes.len() == 8 * L`.
#[inline]
pub fn load_le_limbs<const L: usize>(bytes: &[u8]) -> [u64; L] {
    debug_assert_eq!(bytes.len(), 8 * L);
    let mut limbs = [0u64; L];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        *limb = u64_from_le_bytes(chunk);
    }
    limbs
}

/// Store `L` little-endian limbs into `out` as `8 * L` little-endian bytes
#[inline]
pub fn store_le_limbs<const L: usize>(limbs: &[u64; L], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * L);
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
}
