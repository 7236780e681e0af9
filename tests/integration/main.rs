#[path = "../common/mod.rs"]
mod common;

mod test_binary;
mod test_claim_submission;
