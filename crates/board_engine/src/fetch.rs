use board_logging::board_debug;

use crate::decode::decode_payload;
use crate::{FailureKind, FetchError, TicketRecord};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.quicksell.co/v1/internal/frontend-assignment".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait TicketFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TicketRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTicketFetcher {
    settings: FetchSettings,
}

impl ReqwestTicketFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl TicketFetcher for ReqwestTicketFetcher {
    // One request per session: no timeout, no retry. It resolves or rejects.
    async fn fetch(&self) -> Result<Vec<TicketRecord>, FetchError> {
        board_debug!("GET {}", self.settings.endpoint);

        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let response = client
            .get(&self.settings.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let records = decode_payload(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Shape, err.to_string()))?;
        board_debug!("fetched {} ticket records", records.len());
        Ok(records)
    }
}
