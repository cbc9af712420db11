use std::time::Duration;

use url::Url;

use crate::{AnalyzeRequest, AnalyzeResponse, ApiError, FailureKind, SongRequest, SongResponse};

/// Song style is fixed for this workflow.
pub const SONG_STYLE: &str = "kendrick";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_base_str(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self::with_base_url(base_url))
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            // Local analyze/song backend in the development setup.
            base_url: Url::parse("http://127.0.0.1:5000/").expect("static url"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait AnalyzeApi: Send + Sync {
    async fn analyze(&self, prompt: &str) -> Result<AnalyzeResponse, ApiError>;
}

#[async_trait::async_trait]
pub trait SongApi: Send + Sync {
    async fn generate_song(&self, prompt: &str, roast: &str) -> Result<SongResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.settings
            .base_url
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned + Send,
    {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json::<Resp>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl AnalyzeApi for ReqwestApiClient {
    async fn analyze(&self, prompt: &str) -> Result<AnalyzeResponse, ApiError> {
        self.post_json("analyze", &AnalyzeRequest { prompt }).await
    }
}

#[async_trait::async_trait]
impl SongApi for ReqwestApiClient {
    async fn generate_song(&self, prompt: &str, roast: &str) -> Result<SongResponse, ApiError> {
        let request = SongRequest {
            prompt,
            roast,
            style: SONG_STYLE,
        };
        self.post_json("song", &request).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::InvalidBody, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
