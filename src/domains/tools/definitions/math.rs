//! Math tools - arithmetic, integer math, and simple statistics.

use serde_json::{Value, json};

use super::common::{int_arg, num_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

fn two_operands(a: &str, b: &str) -> ParameterSchema {
    ParameterSchema::object()
        .required("a", PropertySchema::number(a))
        .required("b", PropertySchema::number(b))
}

/// All math tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "math_add",
            "Add two numbers",
            two_operands("First operand", "Second operand"),
            MathAdd,
        ),
        ToolDescriptor::new(
            "math_subtract",
            "Subtract the second number from the first",
            two_operands("First operand", "Second operand"),
            MathSubtract,
        ),
        ToolDescriptor::new(
            "math_multiply",
            "Multiply two numbers",
            two_operands("First operand", "Second operand"),
            MathMultiply,
        ),
        ToolDescriptor::new(
            "math_divide",
            "Divide the first number by the second",
            two_operands("Dividend", "Divisor"),
            MathDivide,
        ),
        ToolDescriptor::new(
            "math_power",
            "Raise a base to an exponent (base^exponent)",
            ParameterSchema::object()
                .required("base", PropertySchema::number("Base value"))
                .required("exponent", PropertySchema::number("Exponent")),
            MathPower,
        ),
        ToolDescriptor::new(
            "math_sqrt",
            "Square root of a number",
            ParameterSchema::object()
                .required("number", PropertySchema::number("Value to take the square root of")),
            MathSqrt,
        ),
        ToolDescriptor::new(
            "is_prime",
            "Check whether a number is prime",
            ParameterSchema::object()
                .required("number", PropertySchema::number("Number to check")),
            IsPrime,
        ),
        ToolDescriptor::new(
            "calculate_factorial",
            "Calculate the factorial of a number (n!)",
            ParameterSchema::object()
                .required("number", PropertySchema::number("Number to take the factorial of (0-170)")),
            CalculateFactorial,
        ),
        ToolDescriptor::new(
            "calculate_gcd",
            "Greatest common divisor of two integers",
            two_operands("First integer", "Second integer"),
            CalculateGcd,
        ),
        ToolDescriptor::new(
            "calculate_lcm",
            "Least common multiple of two integers",
            two_operands("First integer", "Second integer"),
            CalculateLcm,
        ),
        ToolDescriptor::new(
            "calculate_average",
            "Arithmetic mean of an array of numbers",
            numbers_param(),
            CalculateAverage,
        ),
        ToolDescriptor::new(
            "calculate_median",
            "Median of an array of numbers",
            numbers_param(),
            CalculateMedian,
        ),
        ToolDescriptor::new(
            "calculate_standard_deviation",
            "Sample standard deviation of an array of numbers (minimum 2)",
            numbers_param(),
            CalculateStandardDeviation,
        ),
        ToolDescriptor::new(
            "calculate_percentage",
            "Percentage of a value against a total",
            ParameterSchema::object()
                .required("value", PropertySchema::number("Value to express as a percentage"))
                .required("total", PropertySchema::number("Total the value is measured against")),
            CalculatePercentage,
        ),
    ]
}

fn numbers_param() -> ParameterSchema {
    ParameterSchema::object().required("numbers", PropertySchema::array("Array of numbers"))
}

/// Extract the `numbers` argument as an f64 list.
fn numbers_arg(arguments: &Value) -> Result<Vec<f64>, ToolError> {
    arguments
        .get("numbers")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .map(|v| {
                    v.as_f64().ok_or_else(|| {
                        ToolError::execution_failed("Numbers array must contain only numbers")
                    })
                })
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

struct MathAdd;

#[async_trait::async_trait]
impl ToolHandler for MathAdd {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let a = num_arg(&arguments, "a");
        let b = num_arg(&arguments, "b");
        Ok(json!({ "result": a + b }))
    }
}

struct MathSubtract;

#[async_trait::async_trait]
impl ToolHandler for MathSubtract {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let a = num_arg(&arguments, "a");
        let b = num_arg(&arguments, "b");
        Ok(json!({ "result": a - b }))
    }
}

struct MathMultiply;

#[async_trait::async_trait]
impl ToolHandler for MathMultiply {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let a = num_arg(&arguments, "a");
        let b = num_arg(&arguments, "b");
        Ok(json!({ "result": a * b }))
    }
}

struct MathDivide;

#[async_trait::async_trait]
impl ToolHandler for MathDivide {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let a = num_arg(&arguments, "a");
        let b = num_arg(&arguments, "b");

        if b == 0.0 {
            return Err(ToolError::execution_failed("Division by zero"));
        }

        Ok(json!({ "result": a / b }))
    }
}

struct MathPower;

#[async_trait::async_trait]
impl ToolHandler for MathPower {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let base = num_arg(&arguments, "base");
        let exponent = num_arg(&arguments, "exponent");
        Ok(json!({ "result": base.powf(exponent) }))
    }
}

struct MathSqrt;

#[async_trait::async_trait]
impl ToolHandler for MathSqrt {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let number = num_arg(&arguments, "number");

        if number < 0.0 {
            return Err(ToolError::execution_failed(
                "Cannot calculate square root of negative number",
            ));
        }

        Ok(json!({ "result": number.sqrt() }))
    }
}

struct IsPrime;

#[async_trait::async_trait]
impl ToolHandler for IsPrime {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let number = int_arg(&arguments, "number", 0);

        let is_prime = number >= 2 && {
            let limit = (number as f64).sqrt() as i64;
            (2..=limit).all(|i| number % i != 0)
        };

        Ok(json!({ "is_prime": is_prime, "number": number }))
    }
}

struct CalculateFactorial;

#[async_trait::async_trait]
impl ToolHandler for CalculateFactorial {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let number = int_arg(&arguments, "number", 0);

        if number < 0 {
            return Err(ToolError::execution_failed(
                "Factorial is not defined for negative numbers",
            ));
        }
        // 171! overflows f64
        if number > 170 {
            return Err(ToolError::execution_failed("Number too large (max: 170)"));
        }

        let factorial = (1..=number).map(|i| i as f64).product::<f64>();
        Ok(json!({ "factorial": factorial }))
    }
}

struct CalculateGcd;

#[async_trait::async_trait]
impl ToolHandler for CalculateGcd {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let a = int_arg(&arguments, "a", 0);
        let b = int_arg(&arguments, "b", 0);
        Ok(json!({ "gcd": gcd(a, b), "a": a, "b": b }))
    }
}

struct CalculateLcm;

#[async_trait::async_trait]
impl ToolHandler for CalculateLcm {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let a = int_arg(&arguments, "a", 0);
        let b = int_arg(&arguments, "b", 0);

        let lcm = if a == 0 || b == 0 {
            0
        } else {
            (a / gcd(a, b))
                .checked_mul(b)
                .map(i64::abs)
                .ok_or_else(|| ToolError::execution_failed("Value out of range"))?
        };

        Ok(json!({ "lcm": lcm, "a": a, "b": b }))
    }
}

struct CalculateAverage;

#[async_trait::async_trait]
impl ToolHandler for CalculateAverage {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let numbers = numbers_arg(&arguments)?;
        if numbers.is_empty() {
            return Err(ToolError::execution_failed("Numbers array cannot be empty"));
        }

        let average = numbers.iter().sum::<f64>() / numbers.len() as f64;
        Ok(json!({ "average": round2(average), "count": numbers.len() }))
    }
}

struct CalculateMedian;

#[async_trait::async_trait]
impl ToolHandler for CalculateMedian {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let mut numbers = numbers_arg(&arguments)?;
        if numbers.is_empty() {
            return Err(ToolError::execution_failed("Numbers array cannot be empty"));
        }

        numbers.sort_by(|a, b| a.total_cmp(b));
        let mid = numbers.len() / 2;
        let median = if numbers.len() % 2 == 0 {
            (numbers[mid - 1] + numbers[mid]) / 2.0
        } else {
            numbers[mid]
        };

        Ok(json!({ "median": round2(median), "count": numbers.len() }))
    }
}

struct CalculateStandardDeviation;

#[async_trait::async_trait]
impl ToolHandler for CalculateStandardDeviation {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let numbers = numbers_arg(&arguments)?;
        if numbers.len() < 2 {
            return Err(ToolError::execution_failed("Need at least 2 numbers"));
        }

        let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
        let variance = numbers.iter().map(|n| (n - mean).powi(2)).sum::<f64>()
            / (numbers.len() - 1) as f64;

        Ok(json!({
            "standard_deviation": round2(variance.sqrt()),
            "count": numbers.len(),
        }))
    }
}

struct CalculatePercentage;

#[async_trait::async_trait]
impl ToolHandler for CalculatePercentage {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let value = num_arg(&arguments, "value");
        let total = num_arg(&arguments, "total");

        if total == 0.0 {
            return Err(ToolError::execution_failed("Total cannot be zero"));
        }

        Ok(json!({ "percentage": round2(value / total * 100.0) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add() {
        let result = MathAdd.execute(json!({"a": 12, "b": 30})).await.unwrap();
        assert_eq!(result["result"], json!(42.0));
    }

    #[tokio::test]
    async fn test_subtract_and_multiply() {
        let result = MathSubtract.execute(json!({"a": 10, "b": 4})).await.unwrap();
        assert_eq!(result["result"], json!(6.0));

        let result = MathMultiply.execute(json!({"a": 6, "b": 7})).await.unwrap();
        assert_eq!(result["result"], json!(42.0));
    }

    #[tokio::test]
    async fn test_divide() {
        let result = MathDivide.execute(json!({"a": 9, "b": 2})).await.unwrap();
        assert_eq!(result["result"], json!(4.5));
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let err = MathDivide.execute(json!({"a": 5, "b": 0})).await.unwrap_err();
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[tokio::test]
    async fn test_power() {
        let result = MathPower
            .execute(json!({"base": 2, "exponent": 10}))
            .await
            .unwrap();
        assert_eq!(result["result"], json!(1024.0));
    }

    #[tokio::test]
    async fn test_sqrt() {
        let result = MathSqrt.execute(json!({"number": 144})).await.unwrap();
        assert_eq!(result["result"], json!(12.0));
    }

    #[tokio::test]
    async fn test_sqrt_negative() {
        let err = MathSqrt.execute(json!({"number": -1})).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot calculate square root of negative number"
        );
    }

    #[tokio::test]
    async fn test_is_prime() {
        for (n, expected) in [(2, true), (17, true), (1, false), (25, false), (-7, false)] {
            let result = IsPrime.execute(json!({"number": n})).await.unwrap();
            assert_eq!(result["is_prime"], expected, "n = {n}");
        }
    }

    #[tokio::test]
    async fn test_factorial() {
        let result = CalculateFactorial
            .execute(json!({"number": 5}))
            .await
            .unwrap();
        assert_eq!(result["factorial"], json!(120.0));

        let result = CalculateFactorial
            .execute(json!({"number": 0}))
            .await
            .unwrap();
        assert_eq!(result["factorial"], json!(1.0));
    }

    #[tokio::test]
    async fn test_factorial_bounds() {
        let err = CalculateFactorial
            .execute(json!({"number": -1}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Factorial is not defined for negative numbers");

        let err = CalculateFactorial
            .execute(json!({"number": 171}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Number too large (max: 170)");
    }

    #[tokio::test]
    async fn test_gcd_and_lcm() {
        let result = CalculateGcd.execute(json!({"a": 12, "b": 18})).await.unwrap();
        assert_eq!(result["gcd"], 6);

        let result = CalculateLcm.execute(json!({"a": 4, "b": 6})).await.unwrap();
        assert_eq!(result["lcm"], 12);

        let result = CalculateLcm.execute(json!({"a": 0, "b": 6})).await.unwrap();
        assert_eq!(result["lcm"], 0);
    }

    #[tokio::test]
    async fn test_average_and_median() {
        let result = CalculateAverage
            .execute(json!({"numbers": [1, 2, 3, 4]}))
            .await
            .unwrap();
        assert_eq!(result["average"], json!(2.5));
        assert_eq!(result["count"], 4);

        let result = CalculateMedian
            .execute(json!({"numbers": [7, 1, 3]}))
            .await
            .unwrap();
        assert_eq!(result["median"], json!(3.0));

        let result = CalculateMedian
            .execute(json!({"numbers": [4, 1, 3, 2]}))
            .await
            .unwrap();
        assert_eq!(result["median"], json!(2.5));
    }

    #[tokio::test]
    async fn test_average_empty_array() {
        let err = CalculateAverage
            .execute(json!({"numbers": []}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Numbers array cannot be empty");
    }

    #[tokio::test]
    async fn test_standard_deviation() {
        let result = CalculateStandardDeviation
            .execute(json!({"numbers": [2, 4, 4, 4, 5, 5, 7, 9]}))
            .await
            .unwrap();
        // Sample stdev of this set is ~2.14
        assert_eq!(result["standard_deviation"], json!(2.14));

        let err = CalculateStandardDeviation
            .execute(json!({"numbers": [1]}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Need at least 2 numbers");
    }

    #[tokio::test]
    async fn test_percentage() {
        let result = CalculatePercentage
            .execute(json!({"value": 30, "total": 120}))
            .await
            .unwrap();
        assert_eq!(result["percentage"], json!(25.0));

        let err = CalculatePercentage
            .execute(json!({"value": 1, "total": 0}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Total cannot be zero");
    }

    #[tokio::test]
    async fn test_numbers_array_rejects_mixed_entries() {
        let err = CalculateAverage
            .execute(json!({"numbers": [1, "two", 3]}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
    }

    #[test]
    fn test_descriptors() {
        let tools = tools();
        assert_eq!(tools.len(), 14);
        assert!(tools.iter().all(|t| t.handler().is_some()));
        assert_eq!(tools[0].name, "math_add");
    }
}
