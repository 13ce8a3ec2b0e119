use crate::{FingerprintError, FingerprintResult};

/// Echo stream extraction: `residual[i] = denoised[i] - expected[i]`.
///
/// Output keeps the length and sample alignment of its inputs. Mismatched
/// lengths is a caller contract violation.
pub fn extract_residual(denoised: &[f64], expected: &[f64]) -> FingerprintResult<Vec<f64>> {
    if denoised.len() != expected.len() {
        return Err(FingerprintError::InputContract(format!(
            "residual inputs differ in length: {} denoised vs {} expected",
            denoised.len(),
            expected.len()
        )));
    }
    Ok(denoised
        .iter()
        .zip(expected.iter())
        .map(|(&d, &e)| d - e)
        .collect())
}
