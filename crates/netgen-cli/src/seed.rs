//! Entropy-derived run seeds for when `--seed` is not supplied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Each call advances by the splitmix64 stream increment so back-to-back
// seeds differ even when the clock does not tick between them.
const STREAM_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

static SEED_STREAM: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let step = SEED_STREAM.fetch_add(STREAM_STEP, Ordering::Relaxed);

    let state = step
        .wrapping_add(now_nanos as u64)
        .wrapping_add(((now_nanos >> 64) as u64).rotate_left(32))
        .wrapping_add(u64::from(std::process::id()).rotate_left(48));

    finalize(state)
}

fn finalize(mut value: u64) -> u64 {
    value ^= value >> 33;
    value = value.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    value ^= value >> 33;
    value = value.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    value ^ (value >> 33)
}
