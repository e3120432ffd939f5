//! Random tools - numbers, strings, coins, dice, and colors.

use rand::Rng;
use serde_json::{Value, json};

use super::common::{int_arg, opt_str_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

const ALPHABETIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMERIC: &str = "0123456789";
const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const MAX_STRING_LENGTH: i64 = 10_000;

/// All random tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "random_number",
            "Generate a random integer within an inclusive range",
            ParameterSchema::object()
                .required("min", PropertySchema::number("Minimum value"))
                .required("max", PropertySchema::number("Maximum value")),
            RandomNumber,
        ),
        ToolDescriptor::new(
            "random_string",
            "Generate a random string of a given length",
            ParameterSchema::object()
                .required("length", PropertySchema::number("Desired string length (max: 10000)"))
                .optional(
                    "type",
                    PropertySchema::string("Character set (default: alphanumeric)")
                        .with_enum(&["alphanumeric", "alphabetic", "numeric"]),
                ),
            RandomString,
        ),
        ToolDescriptor::new(
            "coin_flip",
            "Flip a virtual coin (heads or tails)",
            ParameterSchema::object(),
            CoinFlip,
        ),
        ToolDescriptor::new(
            "dice_roll",
            "Roll one or more virtual dice",
            ParameterSchema::object()
                .optional("sides", PropertySchema::number("Number of sides per die (default: 6)"))
                .optional("count", PropertySchema::number("Number of dice to roll (default: 1)")),
            DiceRoll,
        ),
        ToolDescriptor::new(
            "random_color",
            "Generate a random color as hex and RGB",
            ParameterSchema::object(),
            RandomColor,
        ),
    ]
}

struct RandomNumber;

#[async_trait::async_trait]
impl ToolHandler for RandomNumber {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let min = int_arg(&arguments, "min", 0);
        let max = int_arg(&arguments, "max", 0);

        if max < min {
            return Err(ToolError::execution_failed("max must be >= min"));
        }

        let result = rand::rng().random_range(min..=max);
        Ok(json!({ "result": result, "min": min, "max": max }))
    }
}

struct RandomString;

#[async_trait::async_trait]
impl ToolHandler for RandomString {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let length = int_arg(&arguments, "length", 0);
        let char_type = opt_str_arg(&arguments, "type")
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "alphanumeric".to_string());

        if !(0..=MAX_STRING_LENGTH).contains(&length) {
            return Err(ToolError::execution_failed(format!(
                "length must be between 0 and {MAX_STRING_LENGTH}"
            )));
        }

        let chars: Vec<char> = match char_type.as_str() {
            "numeric" => NUMERIC.chars().collect(),
            "alphabetic" => ALPHABETIC.chars().collect(),
            _ => ALPHANUMERIC.chars().collect(),
        };

        let mut rng = rand::rng();
        let result: String = (0..length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect();

        Ok(json!({ "result": result, "length": length, "type": char_type }))
    }
}

struct CoinFlip;

#[async_trait::async_trait]
impl ToolHandler for CoinFlip {
    async fn execute(&self, _arguments: Value) -> Result<Value, ToolError> {
        let result = if rand::rng().random_bool(0.5) {
            "heads"
        } else {
            "tails"
        };
        Ok(json!({ "result": result }))
    }
}

struct DiceRoll;

#[async_trait::async_trait]
impl ToolHandler for DiceRoll {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let sides = int_arg(&arguments, "sides", 6);
        let count = int_arg(&arguments, "count", 1);

        if sides < 1 {
            return Err(ToolError::execution_failed("sides must be >= 1"));
        }
        if !(0..=1000).contains(&count) {
            return Err(ToolError::execution_failed("count must be between 0 and 1000"));
        }

        let mut rng = rand::rng();
        let rolls: Vec<i64> = (0..count).map(|_| rng.random_range(1..=sides)).collect();
        let total: i64 = rolls.iter().sum();

        Ok(json!({ "rolls": rolls, "total": total, "sides": sides, "count": count }))
    }
}

struct RandomColor;

#[async_trait::async_trait]
impl ToolHandler for RandomColor {
    async fn execute(&self, _arguments: Value) -> Result<Value, ToolError> {
        let color: u32 = rand::rng().random_range(0..0x1000000);
        Ok(json!({
            "hex": format!("#{color:06x}"),
            "rgb": {
                "r": (color >> 16) & 0xFF,
                "g": (color >> 8) & 0xFF,
                "b": color & 0xFF,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_random_number_in_range() {
        for _ in 0..50 {
            let result = RandomNumber
                .execute(json!({"min": 3, "max": 7}))
                .await
                .unwrap();
            let n = result["result"].as_i64().unwrap();
            assert!((3..=7).contains(&n));
        }
    }

    #[tokio::test]
    async fn test_random_number_inverted_range() {
        let err = RandomNumber
            .execute(json!({"min": 7, "max": 3}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
    }

    #[tokio::test]
    async fn test_random_string_charsets() {
        let result = RandomString
            .execute(json!({"length": 32, "type": "numeric"}))
            .await
            .unwrap();
        let s = result["result"].as_str().unwrap();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_digit()));

        let result = RandomString.execute(json!({"length": 16})).await.unwrap();
        assert_eq!(result["type"], "alphanumeric");
        assert!(
            result["result"]
                .as_str()
                .unwrap()
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
    }

    #[tokio::test]
    async fn test_random_string_length_bounds() {
        let err = RandomString
            .execute(json!({"length": -1}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));

        let err = RandomString
            .execute(json!({"length": 1e18}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
    }

    #[tokio::test]
    async fn test_coin_flip() {
        let result = CoinFlip.execute(json!({})).await.unwrap();
        let face = result["result"].as_str().unwrap();
        assert!(face == "heads" || face == "tails");
    }

    #[tokio::test]
    async fn test_dice_roll_defaults() {
        let result = DiceRoll.execute(json!({})).await.unwrap();
        assert_eq!(result["sides"], 6);
        assert_eq!(result["count"], 1);
        assert_eq!(result["rolls"].as_array().unwrap().len(), 1);
        let total = result["total"].as_i64().unwrap();
        assert!((1..=6).contains(&total));
    }

    #[tokio::test]
    async fn test_dice_roll_totals_match() {
        let result = DiceRoll
            .execute(json!({"sides": 4, "count": 10}))
            .await
            .unwrap();
        let rolls = result["rolls"].as_array().unwrap();
        let sum: i64 = rolls.iter().map(|r| r.as_i64().unwrap()).sum();
        assert_eq!(result["total"].as_i64().unwrap(), sum);
        assert!(rolls.iter().all(|r| (1..=4).contains(&r.as_i64().unwrap())));
    }

    #[tokio::test]
    async fn test_random_color_shape() {
        let result = RandomColor.execute(json!({})).await.unwrap();
        let hex = result["hex"].as_str().unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(result["rgb"]["r"].as_u64().unwrap() <= 255);
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(tools().len(), 5);
    }
}
