//! Numeric one-time code generation

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::otp_entry::CODE_LENGTH;

/// Number of distinct codes (10^CODE_LENGTH)
const CODE_SPACE: u32 = 1_000_000;

/// Source of one-time codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a zero-padded numeric code of [`CODE_LENGTH`] digits
    fn generate(&self) -> String;
}

/// Generator backed by the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureCodeGenerator;

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generate a uniformly distributed code in `000000..=999999`
///
/// `gen_range` rejects out-of-range samples, so there is no modulo bias.
pub fn generate_code() -> String {
    let code = OsRng.gen_range(0..CODE_SPACE);
    format!("{:0width$}", code, width = CODE_LENGTH)
}
