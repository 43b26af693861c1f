use std::fmt::Display;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{error::StatsError, stats};

/// A single element of a mixed integer/float list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl ToPrimitive for Value {
    fn to_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            Value::Float(v) => v.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match *self {
            Value::Int(v) => v.to_u64(),
            Value::Float(v) => v.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => v.to_f64(),
            Value::Float(v) => Some(v),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v.into())
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

/// All three statistics of one list, computed from a single validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub variance: f64,
    pub stdev: f64,
}

impl Summary {
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self, StatsError> {
        let values = stats::checked_values(data)?;
        let average = stats::mean_of(&values);
        let variance = stats::variance_of(&values, average);

        Ok(Summary {
            count: values.len(),
            average,
            variance,
            stdev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::{Summary, Value};
    use crate::{average, error::StatsError, stdev, variance};

    #[test]
    fn test_average_mixed_types() {
        let data = [Value::from(3), Value::from(4.0)];
        assert_eq!(average(&data), Ok(3.5));
    }

    #[test]
    fn test_mixed_nan_is_rejected() {
        let data = [Value::Int(1), Value::Float(f64::NAN)];
        assert_eq!(variance(&data), Err(StatsError::InvalidValue { index: 1 }));
    }

    #[test]
    fn test_value_from_json() {
        let data: Vec<Value> = serde_json::from_str("[3, 4.0, -2]").unwrap();
        assert_eq!(data, vec![Value::Int(3), Value::Float(4.0), Value::Int(-2)]);
        assert_eq!(average(&data), Ok(5.0 / 3.0));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(4.0).to_string(), "4.0");
    }

    #[test]
    fn test_summary_matches_free_functions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let len = rng.gen_range(1..100);
            let data: Vec<Value> = (0..len)
                .map(|i| {
                    if i % 2 == 0 {
                        Value::Int(rng.gen_range(-1000..1000))
                    } else {
                        Value::Float(rng.gen_range(-1000.0..1000.0))
                    }
                })
                .collect();

            let summary = Summary::from_data(&data).unwrap();
            assert_eq!(summary.count, len);
            assert_eq!(Ok(summary.average), average(&data));
            assert_eq!(Ok(summary.variance), variance(&data));
            assert_eq!(Ok(summary.stdev), stdev(&data));
        }
    }

    #[test]
    fn test_summary_errors() {
        let empty: [i32; 0] = [];
        assert_eq!(Summary::from_data(&empty), Err(StatsError::EmptyInput));
        assert_eq!(
            Summary::from_data(&[f64::NAN]),
            Err(StatsError::InvalidValue { index: 0 })
        );
    }

    #[test]
    fn test_summary_serialize() {
        let summary = Summary::from_data(&[1, 5]).unwrap();
        let json = serde_json::to_value(summary).unwrap();

        assert_eq!(json["count"], 2);
        assert_eq!(json["average"], 3.0);
        assert_eq!(json["variance"], 4.0);
        assert_eq!(json["stdev"], 2.0);
    }
}
