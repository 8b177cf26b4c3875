//! Splitting padded data into Reed-Solomon blocks and interleaving the final codeword stream.

use crate::reed_solomon::ReedSolomonGenerator;
use crate::tables::BlockLayout;

/// Computes error correction for every block of `data` and writes the interleaved codeword
/// sequence into `result`.
///
/// `data` holds exactly [`BlockLayout::data_capacity_bytes`] padded data codewords. Blocks are
/// consecutive runs of `data`: the first `num_short_blocks` carry `short_data_len` bytes, the
/// rest one more. Output order is byte 0 of every block, byte 1 of every block, and so on, then
/// the extra byte of each long block, then the error correction bytes interleaved the same way.
/// Exactly [`BlockLayout::raw_codewords`] bytes of `result` are written.
///
/// # Panics
///
/// Panics if `data` is not exactly the layout's data capacity or `result` is shorter than
/// its raw codeword count.
pub fn add_ecc_and_interleave(data: &[u8], layout: BlockLayout, result: &mut [u8]) {
    let num_blocks = usize::from(layout.num_blocks);
    let num_short_blocks = layout.num_short_blocks();
    let short_data_len = layout.short_data_len();
    assert_eq!(data.len(), layout.data_capacity_bytes());
    assert!(result.len() >= layout.raw_codewords());

    let mut offset = 0;
    for i in 0..short_data_len {
        let mut index = i;
        let mut stride = short_data_len;
        for block in 0..num_blocks {
            result[offset] = data[index];
            offset += 1;
            // Long blocks start one byte further apart
            if block == num_short_blocks {
                stride += 1;
            }
            index += stride;
        }
    }

    let mut index = short_data_len * (num_short_blocks + 1);
    let mut stride = short_data_len;
    for block in 0..num_blocks - num_short_blocks {
        result[offset] = data[index];
        offset += 1;
        if block == 0 {
            stride += 1;
        }
        index += stride;
    }
    debug_assert_eq!(offset, data.len());

    let rs = ReedSolomonGenerator::new(layout.block_ecc_len());
    let mut rest = data;
    for block in 0..num_blocks {
        let len = short_data_len + usize::from(block >= num_short_blocks);
        let (block_data, tail) = rest.split_at(len);
        rs.compute_remainder_strided(block_data, &mut result[offset + block..], num_blocks);
        rest = tail;
    }
    debug_assert!(rest.is_empty());
}
