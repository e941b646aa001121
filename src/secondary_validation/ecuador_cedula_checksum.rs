use crate::secondary_validation::{reduce_product, Validator};

pub struct EcuadorCedulaChecksum;

const CEDULA_LENGTH: usize = 10;
const COEFFICIENTS: &[u32] = &[2, 1, 2, 1, 2, 1, 2, 1, 2];
const MIN_PROVINCE_CODE: u32 = 1;
const MAX_PROVINCE_CODE: u32 = 24;

impl Validator for EcuadorCedulaChecksum {
    fn is_valid(&self, input: &str) -> bool {
        // A byte length of 10 with only ASCII digits is also 10 characters.
        if input.len() != CEDULA_LENGTH {
            return false;
        }

        let mut digits = [0u32; CEDULA_LENGTH];
        for (digit, byte) in digits.iter_mut().zip(input.bytes()) {
            if !byte.is_ascii_digit() {
                return false;
            }
            *digit = u32::from(byte - b'0');
        }

        let province_code = digits[0] * 10 + digits[1];
        if !(MIN_PROVINCE_CODE..=MAX_PROVINCE_CODE).contains(&province_code) {
            return false;
        }

        // only the first 9 digits are weighted, the zip stops at the end of COEFFICIENTS
        let sum: u32 = digits
            .iter()
            .zip(COEFFICIENTS)
            .map(|(digit, coefficient)| reduce_product(digit * coefficient))
            .sum();

        let expected_check_digit = (10 - (sum % 10)) % 10;
        expected_check_digit == digits[CEDULA_LENGTH - 1]
    }
}
