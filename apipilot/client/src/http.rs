use std::sync::Arc;

use apipilot_proto::envelope::Envelope;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, TransportError};
use crate::interceptor::{EnvelopeInterceptor, Interceptor};
use crate::notify::Notifier;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// Configured HTTP client: base URL, timeout and the interceptor pipeline.
#[derive(Clone)]
pub struct HttpClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    interceptor: Arc<dyn Interceptor>,
}

impl HttpClient {
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        interceptor: Arc<dyn Interceptor>,
    ) -> Self {
        HttpClient {
            config: Arc::new(config),
            transport,
            interceptor,
        }
    }

    /// `reqwest` transport plus the default envelope pipeline reporting to `notifier`.
    pub fn with_notifier(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        let interceptor = EnvelopeInterceptor::new(notifier).with_token(config.token.clone());
        Self::new(
            config,
            Arc::new(ReqwestTransport::new()),
            Arc::new(interceptor),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<Envelope<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let query = serde_urlencoded::to_string(query)?;
        self.request(Method::GET, path, Some(query), None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.request(Method::POST, path, None, None).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, None, Some(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.request(Method::DELETE, path, None, None).await
    }

    /// Run one call through the whole pipeline and decode `data` as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<String>,
        body: Option<Value>,
    ) -> Result<Envelope<T>> {
        let mut url = self.config.endpoint(path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query);
        }

        let mut request = HttpRequest::new(method, url, self.config.timeout);
        request.body = body;
        let request = self.interceptor.on_request(request)?;

        log::debug!("{} {}", request.method, request.url);
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => return Err(self.interceptor.on_error(err)),
        };

        if !response.is_success() {
            let body = serde_json::from_str::<Value>(&response.body).ok();
            let err = TransportError::http(response.status, body);
            return Err(self.interceptor.on_error(err));
        }

        let body = serde_json::from_str::<Value>(&response.body)
            .unwrap_or(Value::String(response.body));
        let envelope = self.interceptor.on_response(body)?;

        let data = envelope
            .data
            .map(serde_json::from_value::<T>)
            .transpose()?;
        Ok(Envelope {
            code: envelope.code,
            message: envelope.message,
            data,
        })
    }
}
