use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::{RepositoryError, ShiftRepository, ShiftsPage};

/// Live repository over the shifts endpoint: POST `{latitude, longitude}`
/// and deserialize the `data` envelope. No retries here — retrying is a
/// workflow decision.
pub struct HttpShiftRepository {
    http_client: reqwest::Client,
    url: String,
    api_key: Option<Secret<String>>,
}

#[derive(Serialize)]
struct ShiftsByLocationRequest {
    latitude: f64,
    longitude: f64,
}

impl HttpShiftRepository {
    pub fn new(
        http_client: reqwest::Client,
        url: String,
        api_key: Option<Secret<String>>,
    ) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl ShiftRepository for HttpShiftRepository {
    #[tracing::instrument(name = "Fetching shifts by location", skip(self))]
    async fn get_shifts_by_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ShiftsPage, RepositoryError> {
        let mut request = self.http_client.post(&self.url).json(
            &ShiftsByLocationRequest {
                latitude,
                longitude,
            },
        );
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Network(eyre!(
                "Shifts endpoint returned {status}"
            )));
        }

        let mut page: ShiftsPage = response
            .json()
            .await
            .map_err(|e| RepositoryError::Network(e.into()))?;
        page.status = status.as_u16();

        tracing::debug!(count = page.data.len(), "Fetched shifts");
        Ok(page)
    }
}
