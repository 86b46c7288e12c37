use async_trait::async_trait;
use indexmap::IndexMap;
use log::warn;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use snafu::{ResultExt, ensure};

use pivot_engine::models::bar::{DailyBar, DailySeries};

use crate::models::request::DailyBarsRequest;
use crate::providers::alpaca_rest::params::construct_params;
use crate::providers::alpaca_rest::response::{AlpacaBar, AlpacaResponse};
use crate::providers::{
    ApiSnafu, ClientBuildSnafu, DataProvider, InvalidApiKeySnafu, MissingEnvVarSnafu,
    ProviderError, ProviderInitError, ReqwestSnafu, ValidationSnafu,
};

const DEFAULT_BASE_URL: &str = "https://data.alpaca.markets/v2/stocks/bars";

pub struct AlpacaProvider {
    client: Client,
    base_url: String,
    _api_key: SecretString,
    _secret_key: SecretString,
}

impl AlpacaProvider {
    /// Creates a provider against the production Alpaca data API.
    ///
    /// Reads API keys from the `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY`
    /// environment variables.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Same as [`AlpacaProvider::new`] but against an alternate bars
    /// endpoint, e.g. a local stub while testing.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderInitError> {
        let api_key = SecretString::new(env_var("APCA_API_KEY_ID")?.into());
        let secret_key = SecretString::new(env_var("APCA_API_SECRET_KEY")?.into());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(api_key.expose_secret()).context(InvalidApiKeySnafu)?,
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(secret_key.expose_secret())
                .context(InvalidApiKeySnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            _api_key: api_key,
            _secret_key: secret_key,
        })
    }
}

fn env_var(name: &str) -> Result<String, ProviderInitError> {
    std::env::var(name).map_err(|_| MissingEnvVarSnafu { name }.build())
}

#[async_trait]
impl DataProvider for AlpacaProvider {
    async fn fetch_daily_bars(
        &self,
        request: DailyBarsRequest,
    ) -> Result<Vec<DailySeries>, ProviderError> {
        ensure!(
            !request.symbols.is_empty(),
            ValidationSnafu {
                message: "at least one symbol is required",
            }
        );
        ensure!(
            request.start <= request.end,
            ValidationSnafu {
                message: format!(
                    "start {} must not be after end {}",
                    request.start, request.end
                ),
            }
        );

        // Seed the requested symbols so one with no rows still yields an
        // (empty) series, which the caller surfaces as a no-data outcome.
        let mut all_bars: IndexMap<String, Vec<AlpacaBar>> = IndexMap::new();
        for symbol in &request.symbols {
            all_bars.entry(symbol.clone()).or_default();
        }

        let mut next_page_token: Option<String> = None;
        loop {
            let mut query = construct_params(&request);
            if let Some(token) = &next_page_token {
                query.push(("page_token".to_string(), token.clone()));
            }

            let response = self
                .client
                .get(&self.base_url)
                .query(&query)
                .send()
                .await
                .context(ReqwestSnafu)?;

            if !response.status().is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown API error".to_string());
                return ApiSnafu { message }.fail();
            }

            let page = response
                .json::<AlpacaResponse>()
                .await
                .context(ReqwestSnafu)?;

            for (symbol, bars) in page.bars {
                all_bars.entry(symbol).or_default().extend(bars);
            }

            match page.next_page_token {
                Some(token) => next_page_token = Some(token),
                None => break,
            }
        }

        Ok(all_bars
            .into_iter()
            .map(|(symbol, bars)| normalize(symbol, bars))
            .collect())
    }
}

/// Sorts ascending, drops duplicate dates and discards rows whose prices
/// are not internally coherent. The engine relies on this contract instead
/// of re-validating.
fn normalize(symbol: String, raw: Vec<AlpacaBar>) -> DailySeries {
    let mut bars: Vec<DailyBar> = raw.into_iter().map(AlpacaBar::into_daily_bar).collect();
    bars.sort_by_key(|bar| bar.date);
    bars.dedup_by_key(|bar| bar.date);
    bars.retain(|bar| {
        let coherent = bar.is_coherent();
        if !coherent {
            warn!("{symbol}: dropping incoherent bar on {}", bar.date);
        }
        coherent
    });
    DailySeries::new(symbol, bars)
}
