// velvet.rs - Empirical memory model for velvetg
//
// Ram required for velvetg = -109635 + 18977*ReadSize + 86326*GenomeSize
//                            + 233353*NumReads - 51092*K   (kilobytes)
// <http://seqanswers.com/forums/showthread.php?t=2101>

use serde::{Deserialize, Serialize};

use crate::error::{FormulaError, Result};

const INTERCEPT_KB: i64 = -109_635;
const READ_SIZE_KB: i64 = 18_977;
const GENOME_SIZE_KB: i64 = 86_326;
const NUM_READS_KB: i64 = 233_353;
const KMER_SIZE_KB: i64 = -51_092;

/// The model was fitted with velvet compiled for k-mers up to 31
pub const MAX_KMER_LENGTH: u32 = 31;

/// Inputs to the velvetg memory model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelvetParams {
    /// Read length in bases
    pub read_size: i64,
    /// Genome size in millions of bases (Mb)
    pub genome_size_mb: i64,
    /// Number of reads in millions
    pub num_reads_m: i64,
    /// K-mer hash length passed to velveth
    pub kmer_size: i64,
}

/// Memory estimate for one velvetg run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelvetEstimate {
    #[serde(flatten)]
    pub params: VelvetParams,
    pub ram_kb: i64,
    /// Estimate in bytes (the model counts 1000 bytes per kilobyte)
    pub bytes: i64,
}

/// Evaluate the linear velvetg memory model, in kilobytes.
///
/// Arguments are not checked for sign, so small or negative inputs can
/// produce a negative estimate. Only arithmetic overflow is reported.
pub fn estimate_assembly_memory(params: &VelvetParams) -> Result<VelvetEstimate> {
    let terms = [
        (READ_SIZE_KB, params.read_size),
        (GENOME_SIZE_KB, params.genome_size_mb),
        (NUM_READS_KB, params.num_reads_m),
        (KMER_SIZE_KB, params.kmer_size),
    ];

    let mut ram_kb = INTERCEPT_KB;
    for (coefficient, value) in terms {
        ram_kb = coefficient
            .checked_mul(value)
            .and_then(|term| ram_kb.checked_add(term))
            .ok_or_else(|| {
                FormulaError::InvalidArgument(format!(
                    "Memory estimate overflows for {:?}",
                    params
                ))
            })?;
    }

    let bytes = ram_kb.checked_mul(1000).ok_or_else(|| {
        FormulaError::InvalidArgument(format!(
            "Memory estimate of {} KB overflows when converted to bytes",
            ram_kb
        ))
    })?;

    tracing::debug!(?params, ram_kb, bytes, "velvet memory estimate");
    Ok(VelvetEstimate {
        params: *params,
        ram_kb,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(read_size: i64, genome_size_mb: i64, num_reads_m: i64, kmer_size: i64) -> VelvetParams {
        VelvetParams {
            read_size,
            genome_size_mb,
            num_reads_m,
            kmer_size,
        }
    }

    #[test]
    fn test_human_genome_estimate() {
        let estimate = estimate_assembly_memory(&params(100, 3000, 30, 31)).unwrap();
        let expected = -109635 + 18977 * 100 + 86326 * 3000 + 233353 * 30 - 51092 * 31;
        assert_eq!(estimate.ram_kb, expected);
        assert_eq!(estimate.ram_kb, 266_182_803);
        assert_eq!(estimate.bytes, 266_182_803_000);
    }

    #[test]
    fn test_zero_inputs_give_intercept() {
        let estimate = estimate_assembly_memory(&params(0, 0, 0, 0)).unwrap();
        assert_eq!(estimate.ram_kb, -109_635);
        assert!(estimate.bytes < 0);
    }

    #[test]
    fn test_larger_k_needs_less_memory() {
        let k21 = estimate_assembly_memory(&params(100, 5, 10, 21)).unwrap();
        let k31 = estimate_assembly_memory(&params(100, 5, 10, 31)).unwrap();
        assert_eq!(k21.ram_kb - k31.ram_kb, 51_092 * 10);
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = estimate_assembly_memory(&params(i64::MAX, 0, 0, 0));
        assert!(matches!(result, Err(FormulaError::InvalidArgument(_))));
    }

    #[test]
    fn test_byte_conversion_overflow_is_reported() {
        // Fits in kilobytes but not once scaled to bytes
        let result = estimate_assembly_memory(&params(100, 200_000_000_000, 30, 31));
        match result {
            Err(FormulaError::InvalidArgument(msg)) => assert!(msg.contains("bytes")),
            other => panic!("Expected overflow error, got {:?}", other),
        }

        let largest = estimate_assembly_memory(&params(0, 100_000_000_000, 0, 0)).unwrap();
        assert_eq!(largest.bytes, largest.ram_kb * 1000);
    }
}
