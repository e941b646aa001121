mod ecuador_cedula_checksum;

pub use crate::secondary_validation::ecuador_cedula_checksum::EcuadorCedulaChecksum;

pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// Checks a 10 digit Ecuadorian national ID (cédula) with its modulus-10 check digit.
///
/// Anything that is not exactly 10 ASCII digits is rejected, the same as a bad checksum.
/// Deciding whether such a value is an acceptable foreign document is up to the caller.
pub fn is_valid_national_id(input: &str) -> bool {
    EcuadorCedulaChecksum.is_valid(input)
}

/// Reduces a weighted digit product to a single digit, the same as summing its two digits.
#[inline]
fn reduce_product(value: u32) -> u32 {
    if value >= 10 {
        value - 9
    } else {
        value
    }
}
