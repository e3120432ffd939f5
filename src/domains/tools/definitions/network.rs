//! Network tools - IP validation/conversion, URL parsing, DNS lookup.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::Url;
use serde_json::{Value, json};

use super::common::{int_arg, opt_str_arg, str_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

const DNS_TIMEOUT: Duration = Duration::from_secs(5);

/// All network tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "validate_ip",
            "Validate and analyze an IP address (IPv4/IPv6)",
            ParameterSchema::object()
                .required("ip", PropertySchema::string("IP address to validate")),
            ValidateIp,
        ),
        ToolDescriptor::new(
            "ip_to_int",
            "Convert an IP address to its integer representation",
            ParameterSchema::object()
                .required("ip", PropertySchema::string("IP address to convert")),
            IpToInt,
        ),
        ToolDescriptor::new(
            "int_to_ip",
            "Convert an integer to an IP address",
            ParameterSchema::object()
                .required("number", PropertySchema::number("Integer value of the address"))
                .optional("version", PropertySchema::number("IP version: 4 or 6 (default: 4)")),
            IntToIp,
        ),
        ToolDescriptor::new(
            "parse_url",
            "Parse a URL into its components",
            ParameterSchema::object().required("url", PropertySchema::string("URL to parse")),
            ParseUrl,
        ),
        ToolDescriptor::new(
            "build_url",
            "Build a URL from its components",
            ParameterSchema::object()
                .required("hostname", PropertySchema::string("Host name"))
                .optional("scheme", PropertySchema::string("URL scheme (default: https)"))
                .optional("port", PropertySchema::number("Port number"))
                .optional("path", PropertySchema::string("Path component"))
                .optional("query", PropertySchema::string("Query string, without '?'"))
                .optional("fragment", PropertySchema::string("Fragment, without '#'")),
            BuildUrl,
        ),
        ToolDescriptor::new(
            "dns_lookup",
            "Resolve a hostname to its IP addresses",
            ParameterSchema::object()
                .required("hostname", PropertySchema::string("Hostname to resolve")),
            DnsLookup,
        ),
    ]
}

struct ValidateIp;

#[async_trait::async_trait]
impl ToolHandler for ValidateIp {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let ip = str_arg(&arguments, "ip");

        match ip.parse::<IpAddr>() {
            Ok(addr) => {
                let is_private = match addr {
                    IpAddr::V4(v4) => v4.is_private(),
                    // fc00::/7 unique local range
                    IpAddr::V6(v6) => (v6.segments()[0] & 0xfe00) == 0xfc00,
                };
                Ok(json!({
                    "valid": true,
                    "version": if addr.is_ipv4() { 4 } else { 6 },
                    "is_private": is_private,
                    "is_loopback": addr.is_loopback(),
                    "is_multicast": addr.is_multicast(),
                }))
            }
            Err(_) => Ok(json!({ "valid": false, "error": "Invalid IP address" })),
        }
    }
}

struct IpToInt;

#[async_trait::async_trait]
impl ToolHandler for IpToInt {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let ip = str_arg(&arguments, "ip");

        match ip.parse::<IpAddr>() {
            // IPv4 fits in a JSON number; IPv6 values can exceed 2^53 so
            // they are returned as a decimal string.
            Ok(IpAddr::V4(v4)) => Ok(json!({ "integer": u32::from(v4), "version": 4 })),
            Ok(IpAddr::V6(v6)) => Ok(json!({
                "integer": u128::from(v6).to_string(),
                "version": 6,
            })),
            Err(_) => Err(ToolError::execution_failed("Invalid IP address")),
        }
    }
}

struct IntToIp;

#[async_trait::async_trait]
impl ToolHandler for IntToIp {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let version = int_arg(&arguments, "version", 4);

        // Accept either a JSON number or a decimal string; IPv6 values
        // do not fit in a JSON number.
        let number: u128 = match arguments.get("number") {
            Some(Value::Number(n)) => n
                .as_u64()
                .map(u128::from)
                .ok_or_else(|| ToolError::execution_failed("Invalid integer value"))?,
            Some(Value::String(s)) => s
                .parse()
                .map_err(|_| ToolError::execution_failed("Invalid integer value"))?,
            _ => return Err(ToolError::execution_failed("Invalid integer value")),
        };

        let ip = match version {
            4 => {
                let v4: u32 = number
                    .try_into()
                    .map_err(|_| ToolError::execution_failed("Value out of range for IPv4"))?;
                IpAddr::from(std::net::Ipv4Addr::from(v4))
            }
            6 => IpAddr::from(std::net::Ipv6Addr::from(number)),
            _ => return Err(ToolError::execution_failed("version must be 4 or 6")),
        };

        Ok(json!({ "ip": ip.to_string() }))
    }
}

struct ParseUrl;

#[async_trait::async_trait]
impl ToolHandler for ParseUrl {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let url = str_arg(&arguments, "url");

        let parsed = Url::parse(&url).map_err(|_| ToolError::execution_failed("Invalid URL"))?;

        Ok(json!({
            "scheme": parsed.scheme(),
            "host": parsed.host_str(),
            "port": parsed.port(),
            "path": parsed.path(),
            "query": parsed.query(),
            "fragment": parsed.fragment(),
        }))
    }
}

struct BuildUrl;

#[async_trait::async_trait]
impl ToolHandler for BuildUrl {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let scheme = opt_str_arg(&arguments, "scheme").unwrap_or_else(|| "https".to_string());
        let hostname = str_arg(&arguments, "hostname");
        let path = str_arg(&arguments, "path");
        let query = opt_str_arg(&arguments, "query").filter(|q| !q.is_empty());
        let fragment = opt_str_arg(&arguments, "fragment").filter(|f| !f.is_empty());

        let mut url = format!("{scheme}://{hostname}");
        if let Some(port) = arguments.get("port").and_then(Value::as_u64) {
            url.push_str(&format!(":{port}"));
        }
        if !path.is_empty() && !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(&path);
        if let Some(query) = query {
            url.push_str(&format!("?{query}"));
        }
        if let Some(fragment) = fragment {
            url.push_str(&format!("#{fragment}"));
        }

        let parsed = Url::parse(&url).map_err(|_| ToolError::execution_failed("Invalid URL"))?;

        Ok(json!({ "url": parsed.to_string() }))
    }
}

struct DnsLookup;

#[async_trait::async_trait]
impl ToolHandler for DnsLookup {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let hostname = str_arg(&arguments, "hostname");

        // Resolution talks to an unreliable external; failures surface as
        // a structured record with a retry hint rather than an invocation
        // failure, leaving retry policy to the caller.
        let lookup = tokio::time::timeout(
            DNS_TIMEOUT,
            tokio::net::lookup_host((hostname.as_str(), 0u16)),
        )
        .await;

        let addrs = match lookup {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(e)) => {
                return Ok(json!({
                    "error": format!("DNS lookup failed: {e}"),
                    "retry_tool_call": true,
                }));
            }
            Err(_) => {
                return Ok(json!({
                    "error": "DNS lookup failed: timed out",
                    "retry_tool_call": true,
                }));
            }
        };

        let ips: Vec<String> = addrs.map(|addr| addr.ip().to_string()).collect();

        match ips.first() {
            Some(first) => Ok(json!({ "hostname": hostname, "ip": first, "ips": ips })),
            None => Ok(json!({
                "error": "DNS lookup failed: no addresses found",
                "retry_tool_call": true,
            })),
        }
    }
}
