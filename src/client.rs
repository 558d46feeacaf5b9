/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! High-level client for the TD Ameritrade API
//!
//! One method per brokerage resource, each delegating to the authenticated
//! transport; authentication and the single 401 retry are handled below this
//! layer. Every resource has a raw-JSON method and a `*_table` variant that
//! projects the response into a flat [`Frame`].

use crate::config::Config;
use crate::constants::{
    ACCOUNTS_PATH, DEFAULT_MOVERS_CHANGE_TYPE, DEFAULT_MOVERS_DIRECTION,
    DEFAULT_SEARCH_PROJECTION, FUNDAMENTAL_PROJECTION, INSTRUMENTS_PATH, OPTION_CHAIN_PATH,
    QUOTES_PATH,
};
use crate::error::AppError;
use crate::presentation::frame::Frame;
use crate::presentation::{
    accounts_frame, history_frame, instrument_frame, options_frame, quote_frame, search_frame,
    watchlists_frame,
};
use crate::session::token::TokenStore;
use crate::transport::client::AuthenticatedClient;
use crate::transport::http_client::{HttpResponse, HttpTransport, ReqwestTransport};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Client for the TD Ameritrade REST API
///
/// Construction performs no network I/O; the access token is obtained lazily
/// through the refresh grant the first time the API answers
/// `401 Unauthorized`.
pub struct TdClient<T: HttpTransport = ReqwestTransport> {
    client: AuthenticatedClient<T>,
    config: Arc<Config>,
}

impl TdClient<ReqwestTransport> {
    /// Creates a new client over the default reqwest transport
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials, account ids and API
    ///   settings
    #[must_use]
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let transport = Arc::new(ReqwestTransport::new(&config));
        Self::with_transport(config, transport)
    }
}

impl Default for TdClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<T: HttpTransport> TdClient<T> {
    /// Creates a new client over a custom transport
    pub fn with_transport(config: Arc<Config>, transport: Arc<T>) -> Self {
        let tokens = Arc::new(TokenStore::new(config.clone(), transport.clone()));
        Self {
            client: AuthenticatedClient::new(transport, tokens),
            config,
        }
    }

    /// Gets the token store backing this client
    pub fn tokens(&self) -> &Arc<TokenStore<T>> {
        self.client.tokens()
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.rest_api.base_url, path)
    }

    /// Fetches account records
    ///
    /// With configured account ids, one GET per id is issued and the results
    /// aggregated under those ids, in request order; the first non-200
    /// fails the whole call with [`AppError::Unexpected`] (fail-fast, any
    /// already-fetched records are discarded). With no configured ids, a
    /// single GET fetches every account visible to the credential, keyed by
    /// each record's `securitiesAccount.accountId` in response order.
    pub async fn accounts(&self) -> Result<Map<String, Value>, AppError> {
        let mut ret = Map::new();

        if self.config.account_ids.is_empty() {
            let records: Vec<Value> = match self
                .client
                .get_json(&self.url(ACCOUNTS_PATH), &[])
                .await?
            {
                Value::Array(records) => records,
                _ => {
                    return Err(AppError::Schema(String::from(
                        "accounts response is not an array",
                    )));
                }
            };

            for record in records {
                let id = account_id_of(&record)?;
                ret.insert(id, record);
            }
        } else {
            debug!("Fetching {} configured accounts", self.config.account_ids.len());
            for id in &self.config.account_ids {
                let url = self.url(&format!("{ACCOUNTS_PATH}/{id}"));
                let record = self.client.get_json(&url, &[]).await?;
                ret.insert(id.clone(), record);
            }
        }

        Ok(ret)
    }

    /// Searches instruments by symbol
    ///
    /// # Arguments
    /// * `symbol` - Symbol or search pattern
    /// * `projection` - Server-side query mode, e.g. `fundamental`; `None`
    ///   falls back to [`DEFAULT_SEARCH_PROJECTION`]
    ///
    /// # Returns
    /// Raw JSON mapping symbol → match record
    pub async fn search(
        &self,
        symbol: &str,
        projection: Option<&str>,
    ) -> Result<Value, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from("symbol must not be empty")));
        }

        let projection = projection.unwrap_or(DEFAULT_SEARCH_PROJECTION);
        let params = [
            ("symbol", symbol.to_string()),
            ("projection", projection.to_string()),
        ];
        self.client
            .get_json(&self.url(INSTRUMENTS_PATH), &params)
            .await
    }

    /// Fetches fundamental data for a symbol
    ///
    /// Shorthand for [`TdClient::search`] with the `fundamental` projection.
    pub async fn fundamental(&self, symbol: &str) -> Result<Value, AppError> {
        self.search(symbol, Some(FUNDAMENTAL_PROJECTION)).await
    }

    /// Looks up an instrument by CUSIP
    pub async fn instrument(&self, cusip: &str) -> Result<Value, AppError> {
        if cusip.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from("cusip must not be empty")));
        }

        self.client
            .get_json(&self.url(&format!("{INSTRUMENTS_PATH}/{cusip}")), &[])
            .await
    }

    /// Fetches quotes for a symbol
    ///
    /// The symbol is upper-cased to match exchange convention regardless of
    /// input case.
    ///
    /// # Returns
    /// Raw JSON mapping symbol → quote record
    pub async fn quote(&self, symbol: &str) -> Result<Value, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from("symbol must not be empty")));
        }

        let params = [("symbol", symbol.to_uppercase())];
        self.client.get_json(&self.url(QUOTES_PATH), &params).await
    }

    /// Fetches price history for a symbol
    ///
    /// # Returns
    /// Raw JSON containing a `candles` sequence
    pub async fn history(&self, symbol: &str) -> Result<Value, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from("symbol must not be empty")));
        }

        self.client
            .get_json(&self.url(&format!("/marketdata/{symbol}/pricehistory")), &[])
            .await
    }

    /// Fetches the option chain for a symbol (upper-cased)
    ///
    /// # Returns
    /// Raw JSON containing `callExpDateMap` and `putExpDateMap`
    pub async fn options(&self, symbol: &str) -> Result<Value, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from("symbol must not be empty")));
        }

        let params = [("symbol", symbol.to_uppercase())];
        self.client
            .get_json(&self.url(OPTION_CHAIN_PATH), &params)
            .await
    }

    /// Fetches movers for an index
    ///
    /// # Arguments
    /// * `index` - Index symbol, e.g. `$DJI`
    /// * `direction` - `up` or `down`; `None` falls back to
    ///   [`DEFAULT_MOVERS_DIRECTION`]
    /// * `change_type` - `percent` or `value`; `None` falls back to
    ///   [`DEFAULT_MOVERS_CHANGE_TYPE`]
    ///
    /// # Returns
    /// The raw [`HttpResponse`]; callers inspect the status themselves.
    pub async fn movers(
        &self,
        index: &str,
        direction: Option<&str>,
        change_type: Option<&str>,
    ) -> Result<HttpResponse, AppError> {
        let direction = direction.unwrap_or(DEFAULT_MOVERS_DIRECTION);
        let change_type = change_type.unwrap_or(DEFAULT_MOVERS_CHANGE_TYPE);
        let params = [
            ("direction", direction.to_string()),
            ("change_type", change_type.to_string()),
        ];
        self.client
            .get(&self.url(&format!("/marketdata/{index}/movers")), &params)
            .await
    }

    /// Fetches watchlists
    ///
    /// Both arguments absent fetches all watchlists for all accounts; with an
    /// account id, all watchlists for that account; with both, one watchlist.
    /// A watchlist id without an account id is rejected.
    pub async fn watchlists(
        &self,
        account_id: Option<&str>,
        watchlist_id: Option<&str>,
    ) -> Result<Value, AppError> {
        let path = match (account_id, watchlist_id) {
            (None, None) => format!("{ACCOUNTS_PATH}/watchlists"),
            (Some(acc), None) => format!("{ACCOUNTS_PATH}/{acc}/watchlists"),
            (Some(acc), Some(wl)) => format!("{ACCOUNTS_PATH}/{acc}/watchlists/{wl}"),
            (None, Some(_)) => {
                return Err(AppError::InvalidInput(String::from(
                    "watchlist id requires an account id",
                )));
            }
        };
        self.client.get_json(&self.url(&path), &[]).await
    }

    /// Fetches accounts and projects them into one row per account
    pub async fn accounts_table(&self) -> Result<Frame, AppError> {
        let accounts = self.accounts().await?;
        Ok(accounts_frame(&accounts))
    }

    /// Searches instruments and projects the matches into one row per symbol
    pub async fn search_table(
        &self,
        symbol: &str,
        projection: Option<&str>,
    ) -> Result<Frame, AppError> {
        let results = self.search(symbol, projection).await?;
        search_frame(&results)
    }

    /// Fetches fundamental data as a frame
    pub async fn fundamental_table(&self, symbol: &str) -> Result<Frame, AppError> {
        self.search_table(symbol, Some(FUNDAMENTAL_PROJECTION)).await
    }

    /// Looks up an instrument and projects it into a frame
    pub async fn instrument_table(&self, cusip: &str) -> Result<Frame, AppError> {
        let instrument = self.instrument(cusip).await?;
        instrument_frame(&instrument)
    }

    /// Fetches quotes and projects them into one row per symbol
    pub async fn quote_table(&self, symbol: &str) -> Result<Frame, AppError> {
        let quotes = self.quote(symbol).await?;
        quote_frame(&quotes)
    }

    /// Fetches price history and projects the candles into rows, with the
    /// `datetime` column converted from epoch milliseconds to UTC
    pub async fn history_table(&self, symbol: &str) -> Result<Frame, AppError> {
        let history = self.history(symbol).await?;
        history_frame(&history)
    }

    /// Fetches the option chain and flattens it into one row per contract,
    /// calls before puts, timestamp columns converted to UTC
    pub async fn options_table(&self, symbol: &str) -> Result<Frame, AppError> {
        let chain = self.options(symbol).await?;
        options_frame(&chain)
    }

    /// Fetches watchlists and projects them into a frame
    pub async fn watchlists_table(
        &self,
        account_id: Option<&str>,
        watchlist_id: Option<&str>,
    ) -> Result<Frame, AppError> {
        let watchlists = self.watchlists(account_id, watchlist_id).await?;
        watchlists_frame(&watchlists)
    }
}

/// Extracts `securitiesAccount.accountId` from an account record
///
/// The API reports the id as a string, but numeric ids appear in older
/// payloads; both are accepted.
fn account_id_of(record: &Value) -> Result<String, AppError> {
    let id = record.pointer("/securitiesAccount/accountId").ok_or_else(|| {
        AppError::Schema(String::from(
            "account record missing securitiesAccount.accountId",
        ))
    })?;

    match id {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(AppError::Schema(String::from(
            "securitiesAccount.accountId is neither a string nor a number",
        ))),
    }
}
