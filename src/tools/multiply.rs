//! multiplication_tool - product of a list of numbers
//!
//! Integer inputs are multiplied exactly; the product falls back to `f64`
//! when any input is fractional or the exact product overflows `i128`.

use std::fmt;

use serde::Deserialize;
use serde_json::Number;

/// Parameters for multiplication_tool
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiplicationParams {
    pub numbers: Vec<Number>,
}

/// Result of a multiplication
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    Integer(i128),
    Float(f64),
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Multiplies a list of numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplicationTool;

impl MultiplicationTool {
    /// Product of all numbers; an empty list yields 1
    pub fn multiply(&self, params: &MultiplicationParams) -> Product {
        if let Some(product) = exact_product(&params.numbers) {
            return Product::Integer(product);
        }

        let product: f64 = params
            .numbers
            .iter()
            .map(|n| n.as_f64().unwrap_or(f64::NAN))
            .product();
        // -0.0 prints as "-0"
        Product::Float(if product == 0.0 { 0.0 } else { product })
    }
}

/// None if any number is fractional or the product overflows
fn exact_product(numbers: &[Number]) -> Option<i128> {
    numbers.iter().try_fold(1i128, |acc, n| {
        let n = n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))?;
        acc.checked_mul(n)
    })
}
