use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::Result;
use crate::transport::{ApiRequest, HttpMethod, HttpTransport, Transport};
use crate::types::{
    CreateDnsRecordRequest, CreateZoneRequest, DnsRecordParams, PageRuleParams,
    SettingValueRequest, ZoneSetting,
};

const ZONES_PER_PAGE: u32 = 50;

/// One method per supported v4 endpoint. Every call issues a single request
/// and hands back the decoded JSON, envelope included.
pub struct CloudflareClient<T: Transport = HttpTransport> {
    transport: T,
}

impl CloudflareClient<HttpTransport> {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

fn zone_path(zone_id: &str, rest: &str) -> String {
    format!("zones/{zone_id}/{rest}")
}

impl<T: Transport> CloudflareClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Raw access for endpoints without a dedicated method.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Map<String, Value>,
    ) -> Result<Value> {
        self.transport
            .execute(ApiRequest::new(method, path).with_fields(body))
            .await
    }

    pub async fn add_domain(&self, name: &str, jump_start: bool) -> Result<Value> {
        let body = CreateZoneRequest {
            name: name.to_string(),
            jump_start,
        };
        let request = ApiRequest::post("zones").with_json(&body)?;
        self.transport.execute(request).await
    }

    pub async fn list_domains(&self) -> Result<Value> {
        let path = format!("zones?per_page={ZONES_PER_PAGE}");
        self.transport.execute(ApiRequest::get(path)).await
    }

    pub async fn add_dns_record(&self, zone_id: &str, record: &DnsRecordParams) -> Result<Value> {
        let request = ApiRequest::post(zone_path(zone_id, "dns_records"))
            .with_json(&CreateDnsRecordRequest::from(record))?;
        self.transport.execute(request).await
    }

    pub async fn list_dns_records(&self, zone_id: &str) -> Result<Value> {
        self.transport
            .execute(ApiRequest::get(zone_path(zone_id, "dns_records")))
            .await
    }

    pub async fn add_page_rule(&self, zone_id: &str, rule: &PageRuleParams) -> Result<Value> {
        let request = ApiRequest::post(zone_path(zone_id, "pagerules")).with_json(rule)?;
        self.transport.execute(request).await
    }

    pub async fn list_page_rules(&self, zone_id: &str) -> Result<Value> {
        self.transport
            .execute(ApiRequest::get(zone_path(zone_id, "pagerules")))
            .await
    }

    pub async fn delete_page_rule(&self, zone_id: &str, page_rule_id: &str) -> Result<Value> {
        let path = zone_path(zone_id, &format!("pagerules/{page_rule_id}"));
        self.transport.execute(ApiRequest::delete(path)).await
    }

    pub async fn get_setting(&self, zone_id: &str, setting: ZoneSetting) -> Result<Value> {
        let path = zone_path(zone_id, &format!("settings/{}", setting.id()));
        self.transport.execute(ApiRequest::get(path)).await
    }

    /// Sets `setting` to `value`, or to the setting's default when `None`.
    pub async fn change_setting(
        &self,
        zone_id: &str,
        setting: ZoneSetting,
        value: Option<Value>,
    ) -> Result<Value> {
        let path = zone_path(zone_id, &format!("settings/{}", setting.id()));
        let body = SettingValueRequest {
            value: value.unwrap_or_else(|| setting.default_value()),
        };
        let request = ApiRequest::patch(path).with_json(&body)?;
        self.transport.execute(request).await
    }

    pub async fn get_cache_level(&self, zone_id: &str) -> Result<Value> {
        self.get_setting(zone_id, ZoneSetting::CacheLevel).await
    }

    pub async fn change_cache_level(&self, zone_id: &str, value: Option<&str>) -> Result<Value> {
        self.change_setting(zone_id, ZoneSetting::CacheLevel, value.map(Value::from))
            .await
    }

    pub async fn get_browser_cache_ttl(&self, zone_id: &str) -> Result<Value> {
        self.get_setting(zone_id, ZoneSetting::BrowserCacheTtl).await
    }

    pub async fn change_browser_cache_ttl(&self, zone_id: &str, value: Option<u32>) -> Result<Value> {
        self.change_setting(zone_id, ZoneSetting::BrowserCacheTtl, value.map(Value::from))
            .await
    }

    pub async fn get_always_online(&self, zone_id: &str) -> Result<Value> {
        self.get_setting(zone_id, ZoneSetting::AlwaysOnline).await
    }

    pub async fn change_always_online(&self, zone_id: &str, value: Option<&str>) -> Result<Value> {
        self.change_setting(zone_id, ZoneSetting::AlwaysOnline, value.map(Value::from))
            .await
    }

    pub async fn get_development_mode(&self, zone_id: &str) -> Result<Value> {
        self.get_setting(zone_id, ZoneSetting::DevelopmentMode).await
    }

    pub async fn change_development_mode(&self, zone_id: &str, value: Option<&str>) -> Result<Value> {
        self.change_setting(zone_id, ZoneSetting::DevelopmentMode, value.map(Value::from))
            .await
    }

    pub async fn get_automatic_https_rewrites(&self, zone_id: &str) -> Result<Value> {
        self.get_setting(zone_id, ZoneSetting::AutomaticHttpsRewrites)
            .await
    }

    pub async fn change_automatic_https_rewrites(
        &self,
        zone_id: &str,
        value: Option<&str>,
    ) -> Result<Value> {
        self.change_setting(
            zone_id,
            ZoneSetting::AutomaticHttpsRewrites,
            value.map(Value::from),
        )
        .await
    }

    pub async fn get_always_use_https(&self, zone_id: &str) -> Result<Value> {
        self.get_setting(zone_id, ZoneSetting::AlwaysUseHttps).await
    }

    pub async fn change_always_use_https(&self, zone_id: &str, value: Option<&str>) -> Result<Value> {
        self.change_setting(zone_id, ZoneSetting::AlwaysUseHttps, value.map(Value::from))
            .await
    }

    pub async fn get_ssl_verification(&self, zone_id: &str) -> Result<Value> {
        self.transport
            .execute(ApiRequest::get(zone_path(zone_id, "ssl/verification")))
            .await
    }

    pub async fn get_ssl_status(&self, zone_id: &str) -> Result<Value> {
        self.transport
            .execute(ApiRequest::get(zone_path(zone_id, "settings/ssl")))
            .await
    }
}
