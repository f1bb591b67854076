use std::{sync::Arc, time::Duration};

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    constants::{
        BACKOFF_MULTIPLIER, INITIAL_BACKOFF_MS, MAX_REQUEST_ATTEMPTS, REQUEST_TIMEOUT_SECS,
        RETRY_DELAY_MS,
    },
    logger::Logger,
    utils::pretty_sleep,
};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("server error status {0}")]
    Server(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request abandoned after {attempts} attempts, last failure: {last}")]
    Exhausted { attempts: u32, last: String },
}

pub struct RequestParams<'a, B: Serialize = ()> {
    pub url: &'a str,
    pub method: Method,
    pub body: Option<B>,
    pub headers: Option<HeaderMap>,
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_REQUEST_ATTEMPTS,
            initial_backoff: Duration::from_millis(INITIAL_BACKOFF_MS),
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
            ..Default::default()
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .mul_f64(BACKOFF_MULTIPLIER.powi(attempt as i32))
    }
}

// Anything below the 5xx range is handed back to the caller, 4xx included.
fn accepts(status: StatusCode) -> bool {
    !status.is_server_error()
}

// Exponential backoff is reserved for plain 500s; everything else waits the
// fixed delay.
fn wants_backoff(status: StatusCode) -> bool {
    status == StatusCode::INTERNAL_SERVER_ERROR
}

pub struct RequestHandler {
    client: Client,
    policy: RetryPolicy,
    logger: Arc<Logger>,
}

impl RequestHandler {
    pub fn new(logger: Arc<Logger>) -> eyre::Result<Self> {
        Self::with_policy(logger, RetryPolicy::default())
    }

    pub fn with_policy(logger: Arc<Logger>, policy: RetryPolicy) -> eyre::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(browser_headers())
            .build()?;

        Ok(Self {
            client,
            policy,
            logger,
        })
    }

    pub async fn execute<B: Serialize>(
        &self,
        params: RequestParams<'_, B>,
    ) -> Result<Response, RequestError> {
        let max = self.policy.max_attempts;
        let mut last_failure = String::new();

        for attempt in 0..max {
            let is_last = attempt + 1 == max;

            self.logger.verbose(format!(
                "Attempting request ({}/{}): {}",
                attempt + 1,
                max,
                params.url
            ));

            match self.send_once(&params).await {
                Ok(response) if accepts(response.status()) => {
                    self.logger
                        .verbose(format!("Request successful: {}", response.status()));
                    return Ok(response);
                }
                Ok(response) => {
                    let status = response.status();
                    last_failure = RequestError::Server(status).to_string();

                    if wants_backoff(status) {
                        self.logger.error_with(
                            format!("Server error ({})", status.as_u16()),
                            format!("attempt {}/{}", attempt + 1, max),
                        );

                        if is_last {
                            break;
                        }

                        let wait = self.policy.backoff_delay(attempt);
                        self.logger
                            .warn(format!("Waiting {:.1}s before retry...", wait.as_secs_f64()));
                        pretty_sleep(wait).await;
                        continue;
                    }

                    if is_last {
                        break;
                    }

                    self.logger.warn(format!(
                        "Request failed ({}), attempt {}/{}",
                        status,
                        attempt + 1,
                        max
                    ));
                    pretty_sleep(self.policy.retry_delay).await;
                }
                Err(e) => {
                    last_failure = e.to_string();

                    if is_last {
                        break;
                    }

                    self.logger.warn(format!(
                        "Request failed, attempt {}/{}: {}",
                        attempt + 1,
                        max,
                        e
                    ));
                    pretty_sleep(self.policy.retry_delay).await;
                }
            }
        }

        self.logger.error_with("Max retries reached", &last_failure);

        Err(RequestError::Exhausted {
            attempts: max,
            last: last_failure,
        })
    }

    async fn send_once<B: Serialize>(
        &self,
        params: &RequestParams<'_, B>,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self.client.request(params.method.clone(), params.url);

        if let Some(headers) = &params.headers {
            request = request.headers(headers.clone());
        }

        if let Some(body) = &params.body {
            request = request.json(body);
        }

        request.send().await
    }
}

pub async fn send_http_request<R, B>(
    handler: &RequestHandler,
    params: RequestParams<'_, B>,
) -> Result<R, RequestError>
where
    R: DeserializeOwned,
    B: Serialize,
{
    let response = handler.execute(params).await?;

    Ok(response.json::<R>().await?)
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        header::ACCEPT_ENCODING,
        HeaderValue::from_static("gzip, deflate, br"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(header::ORIGIN, HeaderValue::from_static("https://layeredge.io"));
    headers.insert(
        header::REFERER,
        HeaderValue::from_static("https://layeredge.io/"),
    );
    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("empty"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("cors"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-site"));
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        "sec-ch-ua",
        HeaderValue::from_static(
            "\"Not A(Brand\";v=\"99\", \"Google Chrome\";v=\"121\", \"Chromium\";v=\"121\"",
        ),
    );
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    headers.insert("sec-ch-ua-platform", HeaderValue::from_static("\"Windows\""));

    headers
}
