use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateZoneRequest {
    pub name: String,
    pub jump_start: bool,
}

/// Parameters for a new DNS record. `ttl == 0` and an empty `priority` leave
/// the field out of the request so the API applies its own defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DnsRecordParams {
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
    pub priority: String,
}

impl DnsRecordParams {
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl: 0,
            proxied: true,
            priority: String::new(),
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = proxied;
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateDnsRecordRequest {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub proxied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl From<&DnsRecordParams> for CreateDnsRecordRequest {
    fn from(params: &DnsRecordParams) -> Self {
        CreateDnsRecordRequest {
            record_type: params.record_type.clone(),
            name: params.name.clone(),
            content: params.content.clone(),
            proxied: params.proxied,
            ttl: (params.ttl > 0).then_some(params.ttl),
            priority: coerce_priority(&params.priority),
        }
    }
}

/// `""` and `"0"` count as no priority. Anything else is read as its leading
/// integer (clamped to the `i64` range), or 0 when it has none.
pub fn coerce_priority(raw: &str) -> Option<i64> {
    if raw.is_empty() || raw == "0" {
        return None;
    }
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return Some(0);
    }
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    // Out-of-range values clamp to the nearest bound.
    Some(signed.parse::<i64>().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PageRuleParams {
    pub targets: Vec<Value>,
    pub actions: Vec<Value>,
    pub priority: i64,
    pub status: String,
}

impl PageRuleParams {
    pub fn new(targets: Vec<Value>, actions: Vec<Value>) -> Self {
        Self {
            targets,
            actions,
            priority: 1,
            status: "active".to_string(),
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Zone settings exposed as get/change pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneSetting {
    CacheLevel,
    BrowserCacheTtl,
    AlwaysOnline,
    DevelopmentMode,
    AutomaticHttpsRewrites,
    AlwaysUseHttps,
}

impl ZoneSetting {
    pub fn id(self) -> &'static str {
        match self {
            ZoneSetting::CacheLevel => "cache_level",
            ZoneSetting::BrowserCacheTtl => "browser_cache_ttl",
            ZoneSetting::AlwaysOnline => "always_online",
            ZoneSetting::DevelopmentMode => "development_mode",
            ZoneSetting::AutomaticHttpsRewrites => "automatic_https_rewrites",
            ZoneSetting::AlwaysUseHttps => "always_use_https",
        }
    }

    /// Value sent by a change call when the caller gives none.
    pub fn default_value(self) -> Value {
        match self {
            ZoneSetting::CacheLevel => Value::from("aggressive"),
            ZoneSetting::BrowserCacheTtl => Value::from(14400),
            ZoneSetting::AlwaysOnline => Value::from("on"),
            ZoneSetting::DevelopmentMode
            | ZoneSetting::AutomaticHttpsRewrites
            | ZoneSetting::AlwaysUseHttps => Value::from("off"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SettingValueRequest {
    pub value: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

/// The standard `{success, errors, messages, result}` wrapper.
///
/// Requests return the raw decoded JSON; callers that care about the API's
/// own verdict parse it with [`Envelope::from_value`] and
/// [`Envelope::into_result`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T = Value> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    #[serde(default = "none")]
    pub result: Option<T>,
    #[serde(default)]
    pub result_info: Option<Value>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn from_value(value: Value) -> Result<Self> {
        let body = value.to_string();
        serde_json::from_value(value).map_err(|source| Error::Decode { source, body })
    }

    pub fn into_result(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.result)
        } else {
            Err(Error::Api {
                errors: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_dns_record_defaults_omit_optional_fields() {
        let params = DnsRecordParams::new("A", "host", "1.2.3.4");
        let body = serde_json::to_value(CreateDnsRecordRequest::from(&params)).unwrap();
        assert_eq!(
            body,
            json!({"type": "A", "name": "host", "content": "1.2.3.4", "proxied": true})
        );
    }

    #[test]
    fn test_dns_record_ttl_only_when_positive() {
        let params = DnsRecordParams::new("A", "host", "1.2.3.4").with_ttl(120);
        let req = CreateDnsRecordRequest::from(&params);
        assert_eq!(req.ttl, Some(120));

        let params = params.with_ttl(0);
        let req = CreateDnsRecordRequest::from(&params);
        assert_eq!(req.ttl, None);
    }

    #[test]
    fn test_dns_record_priority_is_integer() {
        let params = DnsRecordParams::new("MX", "example.com", "mx.example.com")
            .with_proxied(false)
            .with_priority("10");
        let body = serde_json::to_value(CreateDnsRecordRequest::from(&params)).unwrap();
        assert_eq!(body["priority"], json!(10));
        assert_eq!(body["proxied"], json!(false));
    }

    #[test]
    fn test_coerce_priority() {
        assert_eq!(coerce_priority(""), None);
        assert_eq!(coerce_priority("0"), None);
        assert_eq!(coerce_priority("5"), Some(5));
        assert_eq!(coerce_priority(" 20"), Some(20));
        assert_eq!(coerce_priority("-3"), Some(-3));
        assert_eq!(coerce_priority("15abc"), Some(15));
        assert_eq!(coerce_priority("abc"), Some(0));
    }

    #[test]
    fn test_coerce_priority_saturates() {
        assert_eq!(coerce_priority("99999999999999999999"), Some(i64::MAX));
        assert_eq!(coerce_priority("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(coerce_priority("9223372036854775807"), Some(i64::MAX));
        assert_eq!(coerce_priority("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_page_rule_defaults() {
        let params = PageRuleParams::new(vec![], vec![]);
        assert_eq!(params.priority, 1);
        assert_eq!(params.status, "active");
    }

    #[test]
    fn test_setting_defaults() {
        assert_eq!(ZoneSetting::CacheLevel.default_value(), json!("aggressive"));
        assert_eq!(ZoneSetting::BrowserCacheTtl.default_value(), json!(14400));
        assert_eq!(ZoneSetting::AlwaysOnline.default_value(), json!("on"));
        assert_eq!(ZoneSetting::DevelopmentMode.default_value(), json!("off"));
        assert_eq!(ZoneSetting::AutomaticHttpsRewrites.default_value(), json!("off"));
        assert_eq!(ZoneSetting::AlwaysUseHttps.default_value(), json!("off"));
    }

    #[test]
    fn test_envelope_success() {
        let value = json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": {"id": "zone1", "name": "example.com"}
        });
        let envelope: Envelope = Envelope::from_value(value).unwrap();
        let result = envelope.into_result().unwrap().unwrap();
        assert_eq!(result["id"], "zone1");
    }

    #[test]
    fn test_envelope_failure_becomes_api_error() {
        let value = json!({
            "success": false,
            "errors": [{"code": 9109, "message": "Invalid access token"}],
            "messages": [],
            "result": null
        });
        let envelope: Envelope = Envelope::from_value(value).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_matches!(err, Error::Api { errors } if errors[0].code == Some(9109));
    }

    #[test]
    fn test_envelope_rejects_non_envelope() {
        let err = Envelope::<Value>::from_value(json!([1, 2, 3])).unwrap_err();
        assert_matches!(err, Error::Decode { .. });
    }
}
