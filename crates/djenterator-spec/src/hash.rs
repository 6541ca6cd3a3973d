//! BLAKE3 seed derivation and content hashing.
//!
//! A batch run takes one base seed; each file in the batch gets its own seed
//! derived from it so files are independent yet reproducible:
//!
//! ```text
//! file_seed = truncate_u32(BLAKE3(base_seed || file_index))
//! ```

/// Derives the seed for file `file_index` of a batch.
///
/// # Example
/// ```
/// use djenterator_spec::derive_file_seed;
///
/// assert_eq!(derive_file_seed(42, 0), derive_file_seed(42, 0));
/// assert_ne!(derive_file_seed(42, 0), derive_file_seed(42, 1));
/// ```
pub fn derive_file_seed(base_seed: u32, file_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&file_index.to_le_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}

/// Computes a BLAKE3 hash of arbitrary data as 64 lowercase hex characters.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
