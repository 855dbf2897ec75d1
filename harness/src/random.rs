//! Randomized default stack.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use pancake_kernel::{PlateStack, StackError};

/// Plate count used when the caller asks for a random stack without a size.
pub const DEFAULT_RANDOM_SIZE: u32 = 10;

/// Shuffle plates `1..size` and put `size` at the bottom.
///
/// With `seed = Some(s)` the stack is reproducible; with `None` it is drawn
/// from OS entropy.
///
/// # Errors
///
/// Returns [`StackError::Empty`] for `size == 0`.
pub fn random_stack(size: u32, seed: Option<u64>) -> Result<PlateStack, StackError> {
    if size == 0 {
        return Err(StackError::Empty);
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut plates: Vec<u32> = (1..size).collect();
    plates.shuffle(&mut rng);
    plates.push(size);
    PlateStack::new(plates)
}
