use log::{debug, trace};
use num_traits::ToPrimitive;

use crate::error::StatsError;

/// Converts every element of `data` to `f64`.
///
/// Elements that are NaN or infinite, or that have no `f64` representation at
/// all, are rejected before an empty list is, so `[NaN]` and `[]` fail
/// differently.
pub(crate) fn checked_values<T: ToPrimitive>(data: &[T]) -> Result<Vec<f64>, StatsError> {
    let values = data
        .iter()
        .enumerate()
        .map(|(index, value)| match value.to_f64() {
            Some(value) if value.is_finite() => Ok(value),
            _ => {
                debug!("rejecting input: value at index {index} is not a finite number");
                Err(StatsError::InvalidValue { index })
            },
        })
        .collect::<Result<Vec<f64>, StatsError>>()?;

    if values.is_empty() {
        debug!("rejecting input: list is empty");
        return Err(StatsError::EmptyInput);
    }

    Ok(values)
}

/// `values` must be non-empty.
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divisor n) around `mean`. `values` must be non-empty.
pub(crate) fn variance_of(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|value| {
            let diff = value - mean;

            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Arithmetic mean of `data`.
///
/// Integer input still yields a float: `average(&[1, 2])` is `1.5`.
pub fn average<T: ToPrimitive>(data: &[T]) -> Result<f64, StatsError> {
    let values = checked_values(data)?;
    let result = mean_of(&values);

    trace!("average of {} values: {result}", values.len());
    Ok(result)
}

/// Population variance of `data`: the mean of squared deviations from the
/// mean, divided by the full count n. Callers that need the sample variance
/// (divisor n - 1) have to rescale the result themselves.
pub fn variance<T: ToPrimitive>(data: &[T]) -> Result<f64, StatsError> {
    let values = checked_values(data)?;
    let result = variance_of(&values, mean_of(&values));

    trace!("variance of {} values: {result}", values.len());
    Ok(result)
}

/// Population standard deviation, the principal square root of
/// [`variance`].
pub fn stdev<T: ToPrimitive>(data: &[T]) -> Result<f64, StatsError> {
    let values = checked_values(data)?;
    let result = variance_of(&values, mean_of(&values)).sqrt();

    trace!("stdev of {} values: {result}", values.len());
    Ok(result)
}
