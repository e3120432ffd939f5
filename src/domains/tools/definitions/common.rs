//! Argument extraction helpers shared across tool handlers.
//!
//! Handlers default their own optional arguments; required arguments have
//! already been checked for presence and type by the dispatcher.

use serde_json::Value;

/// Numeric argument, defaulting to 0.0 when absent or non-numeric.
pub fn num_arg(arguments: &Value, key: &str) -> f64 {
    arguments.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Integer argument with an explicit default.
pub fn int_arg(arguments: &Value, key: &str, default: i64) -> i64 {
    arguments
        .get(key)
        .and_then(Value::as_f64)
        .map(|n| n as i64)
        .unwrap_or(default)
}

/// String argument, defaulting to "" when absent.
pub fn str_arg(arguments: &Value, key: &str) -> String {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional string argument.
pub fn opt_str_arg(arguments: &Value, key: &str) -> Option<String> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_num_arg() {
        let args = json!({"a": 4.2, "b": 7});
        assert_eq!(num_arg(&args, "a"), 4.2);
        assert_eq!(num_arg(&args, "b"), 7.0);
        assert_eq!(num_arg(&args, "missing"), 0.0);
    }

    #[test]
    fn test_int_arg_defaults() {
        let args = json!({"sides": 20});
        assert_eq!(int_arg(&args, "sides", 6), 20);
        assert_eq!(int_arg(&args, "count", 1), 1);
    }

    #[test]
    fn test_str_arg() {
        let args = json!({"text": "hello"});
        assert_eq!(str_arg(&args, "text"), "hello");
        assert_eq!(str_arg(&args, "missing"), "");
        assert_eq!(opt_str_arg(&args, "missing"), None);
    }
}
