//! Built-in self-test run by `base32 test`.

use anyhow::{Context, ensure};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::base32::{RAW_BLOCK_LEN, decode, encode};

/// Number of random round trips; trial `i` uses `i * 5` bytes.
pub const FUZZ_TRIALS: usize = 10;

pub(crate) struct Vector {
    pub(crate) name: &'static str,
    pub(crate) raw: [u8; RAW_BLOCK_LEN],
    pub(crate) encoded: &'static str,
}

pub(crate) const VECTORS: &[Vector] = &[
    Vector {
        name: "all-ones",
        raw: [0xff, 0xff, 0xff, 0xff, 0xff],
        encoded: "66666666",
    },
    Vector {
        name: "all-zeros",
        raw: [0x00, 0x00, 0x00, 0x00, 0x00],
        encoded: "AAAAAAAA",
    },
    Vector {
        name: "ABCDEFGH",
        raw: [0x00, 0x44, 0x32, 0x14, 0xc7],
        encoded: "ABCDEFGH",
    },
    Vector {
        name: "HGFEDCBA",
        raw: [0x39, 0x8a, 0x41, 0x88, 0x20],
        encoded: "HGFEDCBA",
    },
];

/// Run the self-test with random input from the operating system.
pub fn run() -> anyhow::Result<()> {
    run_with(&mut OsRng)
}

/// Run the self-test. Stops at the first failing check.
pub fn run_with<R: RngCore>(rng: &mut R) -> anyhow::Result<()> {
    check(VECTORS, rng)
}

fn check<R: RngCore>(vectors: &[Vector], rng: &mut R) -> anyhow::Result<()> {
    for vector in vectors {
        let encoded = encode(vector.raw)
            .with_context(|| format!("encoding {} buffer", vector.name))?;
        ensure!(
            encoded == vector.encoded,
            "encoding {} buffer produced {encoded:?}, expected {:?}",
            vector.name,
            vector.encoded
        );
    }

    for vector in vectors {
        let decoded = decode(vector.encoded)
            .with_context(|| format!("decoding to {} buffer", vector.name))?;
        ensure!(
            decoded == vector.raw,
            "decoding {:?} produced {decoded:02x?}, expected {} buffer",
            vector.encoded,
            vector.name
        );
    }

    for trial in 0..FUZZ_TRIALS {
        let mut raw = vec![0u8; trial * RAW_BLOCK_LEN];
        rng.fill_bytes(&mut raw);

        let encoded = encode(&raw).with_context(|| format!("encoding {} random bytes", raw.len()))?;
        let decoded =
            decode(&encoded).with_context(|| format!("decoding {} random bytes", raw.len()))?;
        ensure!(
            decoded == raw,
            "round trip of {} random bytes changed the contents",
            raw.len()
        );
    }

    log::debug!(
        "self-test passed: {} vectors, {FUZZ_TRIALS} round trips",
        vectors.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct CountingRng {
        inner: StdRng,
        fills: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.fills += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fills += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    fn counting_rng() -> CountingRng {
        CountingRng {
            inner: StdRng::seed_from_u64(7),
            fills: 0,
        }
    }

    #[test]
    fn test_run_passes() {
        run().unwrap();
    }

    #[test]
    fn test_run_with_seeded_rng() {
        let mut rng = counting_rng();
        assert!(run_with(&mut rng).is_ok());
        assert_eq!(rng.fills, FUZZ_TRIALS);
    }

    #[test]
    fn test_vectors_cover_both_extremes() {
        assert!(VECTORS.iter().any(|v| v.raw == [0xff; 5]));
        assert!(VECTORS.iter().any(|v| v.raw == [0x00; 5]));
    }

    #[test]
    fn test_wrong_vector_stops_at_first_failure() {
        let vectors = [
            Vector {
                name: "broken-ones",
                raw: [0xff; 5],
                encoded: "AAAAAAAA",
            },
            Vector {
                name: "broken-zeros",
                raw: [0x00; 5],
                encoded: "66666666",
            },
        ];
        let mut rng = counting_rng();

        let message = check(&vectors, &mut rng).unwrap_err().to_string();
        assert!(message.contains("broken-ones"), "unexpected message: {message}");
        assert!(message.contains("\"66666666\""), "unexpected message: {message}");
        assert!(!message.contains("broken-zeros"));
        assert_eq!(rng.fills, 0, "round trips ran after a failed vector");
    }

    #[test]
    fn test_valid_vectors_reach_round_trips() {
        let mut rng = counting_rng();
        check(&VECTORS[..1], &mut rng).unwrap();
        assert_eq!(rng.fills, FUZZ_TRIALS);
    }
}
