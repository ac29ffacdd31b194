use rand::Rng;
use std::str::FromStr;

use crate::constants::ALL_MOVES;
use crate::{error::Error, moves::Move};

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> Result<String, Error> {
    let result: String = s
        .iter()
        .map(|m| Move::to_string(m))
        .fold("".to_string(), |acc, x| format!("{} {}", acc, x));
    Ok(result)
}

/// Generate a random scramble of the given length. Successive moves on the same
/// face or on the same axis in the wrong order are rejected, like in the search.
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut scramble: Vec<Move> = Vec::with_capacity(length);
    while scramble.len() < length {
        let m = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
        if let Some(&p) = scramble.last() {
            let diff = p as i8 / 3 - m as i8 / 3;
            if diff == 0 || diff == 3 {
                continue;
            }
        }
        scramble.push(m);
    }
    scramble
}
