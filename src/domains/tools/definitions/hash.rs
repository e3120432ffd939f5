//! Hash tools - digests, HMAC, and UUID generation.

use hmac::{Hmac, Mac};
use serde_json::{Value, json};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use uuid::Uuid;

use super::common::{int_arg, str_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

fn text_param() -> ParameterSchema {
    ParameterSchema::object().required("text", PropertySchema::string("Text to hash"))
}

/// All hash tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "md5_hash",
            "Compute the MD5 hash of a text",
            text_param(),
            Md5Hash,
        ),
        ToolDescriptor::new(
            "sha1_hash",
            "Compute the SHA-1 hash of a text",
            text_param(),
            Sha1Hash,
        ),
        ToolDescriptor::new(
            "sha256_hash",
            "Compute the SHA-256 hash of a text",
            text_param(),
            Sha256Hash,
        ),
        ToolDescriptor::new(
            "sha512_hash",
            "Compute the SHA-512 hash of a text",
            text_param(),
            Sha512Hash,
        ),
        ToolDescriptor::new(
            "hmac_sha256",
            "Compute the HMAC-SHA256 of a text with a secret key",
            ParameterSchema::object()
                .required("text", PropertySchema::string("Text to authenticate"))
                .required("key", PropertySchema::string("Secret key")),
            HmacSha256,
        ),
        ToolDescriptor::new(
            "generate_uuid",
            "Generate a random UUID",
            ParameterSchema::object()
                .optional("version", PropertySchema::number("UUID version (only 4 is supported)")),
            GenerateUuid,
        ),
    ]
}

struct Md5Hash;

#[async_trait::async_trait]
impl ToolHandler for Md5Hash {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        Ok(json!({ "hash": format!("{:x}", md5::compute(text.as_bytes())) }))
    }
}

struct Sha1Hash;

#[async_trait::async_trait]
impl ToolHandler for Sha1Hash {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let digest = Sha1::digest(text.as_bytes());
        Ok(json!({ "hash": hex::encode(digest) }))
    }
}

struct Sha256Hash;

#[async_trait::async_trait]
impl ToolHandler for Sha256Hash {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let digest = Sha256::digest(text.as_bytes());
        Ok(json!({ "hash": hex::encode(digest) }))
    }
}

struct Sha512Hash;

#[async_trait::async_trait]
impl ToolHandler for Sha512Hash {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let digest = Sha512::digest(text.as_bytes());
        Ok(json!({ "hash": hex::encode(digest) }))
    }
}

struct HmacSha256;

#[async_trait::async_trait]
impl ToolHandler for HmacSha256 {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let text = str_arg(&arguments, "text");
        let key = str_arg(&arguments, "key");

        let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes())
            .map_err(|e| ToolError::execution_failed(format!("Invalid HMAC key: {e}")))?;
        mac.update(text.as_bytes());

        Ok(json!({ "hash": hex::encode(mac.finalize().into_bytes()) }))
    }
}

struct GenerateUuid;

#[async_trait::async_trait]
impl ToolHandler for GenerateUuid {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        // Any requested version falls back to v4.
        let _requested = int_arg(&arguments, "version", 4);
        Ok(json!({ "uuid": Uuid::new_v4().to_string(), "version": 4 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_md5() {
        let result = Md5Hash.execute(json!({"text": "abc"})).await.unwrap();
        assert_eq!(result["hash"], "900150983cd24fb0d6963f7d28e17f72");
    }

    #[tokio::test]
    async fn test_sha256() {
        let result = Sha256Hash.execute(json!({"text": "abc"})).await.unwrap();
        assert_eq!(
            result["hash"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn test_sha1() {
        let result = Sha1Hash.execute(json!({"text": "abc"})).await.unwrap();
        assert_eq!(result["hash"], "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[tokio::test]
    async fn test_hmac_sha256() {
        let result = HmacSha256
            .execute(json!({
                "text": "The quick brown fox jumps over the lazy dog",
                "key": "key",
            }))
            .await
            .unwrap();
        assert_eq!(
            result["hash"],
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[tokio::test]
    async fn test_sha512_length() {
        let result = Sha512Hash.execute(json!({"text": "abc"})).await.unwrap();
        assert_eq!(result["hash"].as_str().unwrap().len(), 128);
    }

    #[tokio::test]
    async fn test_generate_uuid() {
        let result = GenerateUuid.execute(json!({})).await.unwrap();
        let uuid = result["uuid"].as_str().unwrap();
        assert!(Uuid::parse_str(uuid).is_ok());
        assert_eq!(result["version"], 4);

        // Unsupported versions fall back to v4
        let result = GenerateUuid.execute(json!({"version": 1})).await.unwrap();
        assert_eq!(result["version"], 4);
    }

    #[tokio::test]
    async fn test_uuids_are_unique() {
        let a = GenerateUuid.execute(json!({})).await.unwrap();
        let b = GenerateUuid.execute(json!({})).await.unwrap();
        assert_ne!(a["uuid"], b["uuid"]);
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(tools().len(), 6);
    }
}
