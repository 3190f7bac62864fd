//! Secure random number generation.
//!
//! Uses the operating system's cryptographic random source via `rand`.

use rand::rngs::ThreadRng;

/// Handle to the thread-local CSPRNG, seeded and periodically reseeded
/// from the OS.
pub fn secure_rng() -> ThreadRng {
    rand::thread_rng()
}
