//! Converter tools - temperature, distance, and weight units.

use serde_json::{Value, json};
use tracing::debug;

use super::common::num_arg;
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

const KM_PER_MILE: f64 = 1.60934;
const MILES_PER_KM: f64 = 0.621371;
const POUNDS_PER_KG: f64 = 2.20462;
const KG_PER_POUND: f64 = 0.453592;

fn single_number(name: &str, description: &str) -> ParameterSchema {
    ParameterSchema::object().required(name, PropertySchema::number(description))
}

/// All converter tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "celsius_to_fahrenheit",
            "Convert a temperature from Celsius to Fahrenheit",
            single_number("celsius", "Temperature in Celsius"),
            CelsiusToFahrenheit,
        ),
        ToolDescriptor::new(
            "fahrenheit_to_celsius",
            "Convert a temperature from Fahrenheit to Celsius",
            single_number("fahrenheit", "Temperature in Fahrenheit"),
            FahrenheitToCelsius,
        ),
        ToolDescriptor::new(
            "km_to_miles",
            "Convert a distance from kilometers to miles",
            single_number("km", "Distance in kilometers"),
            KmToMiles,
        ),
        ToolDescriptor::new(
            "miles_to_km",
            "Convert a distance from miles to kilometers",
            single_number("miles", "Distance in miles"),
            MilesToKm,
        ),
        ToolDescriptor::new(
            "kg_to_pounds",
            "Convert a weight from kilograms to pounds",
            single_number("kg", "Weight in kilograms"),
            KgToPounds,
        ),
        ToolDescriptor::new(
            "pounds_to_kg",
            "Convert a weight from pounds to kilograms",
            single_number("pounds", "Weight in pounds"),
            PoundsToKg,
        ),
    ]
}

struct CelsiusToFahrenheit;

#[async_trait::async_trait]
impl ToolHandler for CelsiusToFahrenheit {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let celsius = num_arg(&arguments, "celsius");
        let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
        debug!("Converted {}C -> {}F", celsius, fahrenheit);
        Ok(json!({
            "celsius": celsius,
            "fahrenheit": fahrenheit,
            "kelvin": celsius + 273.15,
        }))
    }
}

struct FahrenheitToCelsius;

#[async_trait::async_trait]
impl ToolHandler for FahrenheitToCelsius {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let fahrenheit = num_arg(&arguments, "fahrenheit");
        let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
        Ok(json!({
            "fahrenheit": fahrenheit,
            "celsius": celsius,
            "kelvin": celsius + 273.15,
        }))
    }
}

struct KmToMiles;

#[async_trait::async_trait]
impl ToolHandler for KmToMiles {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let km = num_arg(&arguments, "km");
        Ok(json!({
            "km": km,
            "miles": km * MILES_PER_KM,
            "meters": km * 1000.0,
            "feet": km * 3280.84,
        }))
    }
}

struct MilesToKm;

#[async_trait::async_trait]
impl ToolHandler for MilesToKm {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let miles = num_arg(&arguments, "miles");
        Ok(json!({
            "miles": miles,
            "km": miles * KM_PER_MILE,
            "meters": miles * 1609.34,
            "feet": miles * 5280.0,
        }))
    }
}

struct KgToPounds;

#[async_trait::async_trait]
impl ToolHandler for KgToPounds {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let kg = num_arg(&arguments, "kg");
        Ok(json!({
            "kg": kg,
            "pounds": kg * POUNDS_PER_KG,
            "grams": kg * 1000.0,
            "ounces": kg * 35.274,
        }))
    }
}

struct PoundsToKg;

#[async_trait::async_trait]
impl ToolHandler for PoundsToKg {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let pounds = num_arg(&arguments, "pounds");
        Ok(json!({
            "pounds": pounds,
            "kg": pounds * KG_PER_POUND,
            "grams": pounds * 453.592,
            "ounces": pounds * 16.0,
        }))
    }
}
