use chrono::Datelike;
use rand::Rng;

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 4;

/// `CLM-<year>-XXXX` with a random uppercase alphanumeric suffix.
pub fn generate_claim_number() -> String {
    claim_number_for_year(chrono::Local::now().year(), &mut rand::rng())
}

pub fn claim_number_for_year<R: Rng + ?Sized>(year: i32, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("CLM-{}-{}", year, suffix)
}
