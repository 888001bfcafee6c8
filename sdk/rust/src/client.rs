use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reply from the gateway: HTTP status plus decoded JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayReply {
    pub status: u16,
    pub request_id: Option<String>,
    pub body: Value,
}

impl GatewayReply {
    /// The `error` message of an error payload, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

pub struct GatewayClient {
    client: Client,
    gateway_url: String,
}

impl GatewayClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_else(|_| Client::new()),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the welcome payload.
    pub async fn home(&self) -> Result<GatewayReply, reqwest::Error> {
        let resp = self.client.get(format!("{}/", self.gateway_url)).send().await?;
        into_reply(resp).await
    }

    /// List employees, optionally paginated.
    pub async fn list_employees(
        &self,
        skip: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<GatewayReply, reqwest::Error> {
        let mut query = Vec::new();
        if let Some(skip) = skip {
            query.push(("skip", skip.to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("pageSize", page_size.to_string()));
        }

        let resp = self
            .client
            .get(format!("{}/employees", self.gateway_url))
            .query(&query)
            .send()
            .await?;
        into_reply(resp).await
    }

    /// List employees with a raw query string, e.g. `skip=abc`.
    pub async fn list_employees_raw(&self, query: &str) -> Result<GatewayReply, reqwest::Error> {
        let resp = self
            .client
            .get(format!("{}/employees?{}", self.gateway_url, query))
            .send()
            .await?;
        into_reply(resp).await
    }

    /// Create an employee from a JSON record.
    pub async fn create_employee(&self, employee: &Value) -> Result<GatewayReply, reqwest::Error> {
        let resp = self
            .client
            .post(format!("{}/employees", self.gateway_url))
            .json(employee)
            .send()
            .await?;
        into_reply(resp).await
    }

    /// Create an employee from a raw body, bypassing JSON encoding.
    pub async fn create_employee_raw(&self, body: &str) -> Result<GatewayReply, reqwest::Error> {
        let resp = self
            .client
            .post(format!("{}/employees", self.gateway_url))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?;
        into_reply(resp).await
    }
}

async fn into_reply(resp: Response) -> Result<GatewayReply, reqwest::Error> {
    let status = resp.status().as_u16();
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let text = resp.text().await?;
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

    Ok(GatewayReply {
        status,
        request_id,
        body,
    })
}
