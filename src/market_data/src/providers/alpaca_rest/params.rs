use serde::{Deserialize, Serialize};

use crate::models::request::{DailyBarsRequest, ProviderParams};

/// Specifies the corporate action adjustment for stock data.
///
/// Lookback and target ranges must share one adjustment policy or the
/// computed levels would be discontinuous across the period boundary, so
/// requests default to [`Adjustment::All`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    Raw,
    Split,
    Dividend,
    #[default]
    All,
}

impl Adjustment {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Adjustment::Raw => "raw",
            Adjustment::Split => "split",
            Adjustment::Dividend => "dividend",
            Adjustment::All => "all",
        }
    }
}

/// Specifies the source feed for stock data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    #[default]
    Sip,
    Iex,
    Otc,
}

impl Feed {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Feed::Sip => "sip",
            Feed::Iex => "iex",
            Feed::Otc => "otc",
        }
    }
}

/// Alpaca-specific parameters for a daily bars request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct AlpacaBarsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Adjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Builds the query string for one `/v2/stocks/bars` page.
pub(super) fn construct_params(request: &DailyBarsRequest) -> Vec<(String, String)> {
    let alpaca = match &request.provider_specific {
        ProviderParams::Alpaca(params) => params.clone(),
        ProviderParams::None => AlpacaBarsParams::default(),
    };

    let mut query = vec![
        ("symbols".to_string(), request.symbols.join(",")),
        ("timeframe".to_string(), "1Day".to_string()),
        ("start".to_string(), request.start.to_string()),
        ("end".to_string(), request.end.to_string()),
        (
            "adjustment".to_string(),
            alpaca
                .adjustment
                .unwrap_or_default()
                .as_query_value()
                .to_string(),
        ),
    ];
    if let Some(feed) = alpaca.feed {
        query.push(("feed".to_string(), feed.as_query_value().to_string()));
    }
    if let Some(limit) = alpaca.limit {
        query.push(("limit".to_string(), limit.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> DailyBarsRequest {
        DailyBarsRequest::single(
            "QQQ",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
    }

    #[test]
    fn defaults_request_fully_adjusted_daily_bars() {
        let query = construct_params(&request());
        assert!(query.contains(&("symbols".to_string(), "QQQ".to_string())));
        assert!(query.contains(&("timeframe".to_string(), "1Day".to_string())));
        assert!(query.contains(&("start".to_string(), "2023-01-01".to_string())));
        assert!(query.contains(&("end".to_string(), "2024-12-31".to_string())));
        assert!(query.contains(&("adjustment".to_string(), "all".to_string())));
        assert!(!query.iter().any(|(key, _)| key == "feed" || key == "limit"));
    }

    #[test]
    fn explicit_alpaca_params_are_passed_through() {
        let mut request = request();
        request.provider_specific = ProviderParams::Alpaca(AlpacaBarsParams {
            adjustment: Some(Adjustment::Raw),
            feed: Some(Feed::Iex),
            limit: Some(5000),
        });
        let query = construct_params(&request);
        assert!(query.contains(&("adjustment".to_string(), "raw".to_string())));
        assert!(query.contains(&("feed".to_string(), "iex".to_string())));
        assert!(query.contains(&("limit".to_string(), "5000".to_string())));
    }
}
