//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` (fetch) 实现核心库的 [`HttpClient`] 特性。

use gloo_net::http::{Request, RequestBuilder};
use shopcart::error::{ClientError, ClientResult};
use shopcart::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// 使用 `window.fetch` 发送请求的客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn builder(url: &str, method: HttpMethod) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = Self::builder(&req.url, req.method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::network(format!("failed to build request: {}", e)))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::network(format!("failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
