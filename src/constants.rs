/// Base URL for the TD Ameritrade REST API
pub const DEFAULT_BASE_URL: &str = "https://api.tdameritrade.com/v1";
/// Path of the OAuth token endpoint, relative to the base URL
pub const TOKEN_PATH: &str = "/oauth2/token";
/// Path of the accounts resource
pub const ACCOUNTS_PATH: &str = "/accounts";
/// Path of the instruments resource (search by query, lookup by CUSIP)
pub const INSTRUMENTS_PATH: &str = "/instruments";
/// Path of the quotes resource
pub const QUOTES_PATH: &str = "/marketdata/quotes";
/// Path of the option chain resource
pub const OPTION_CHAIN_PATH: &str = "/marketdata/chains";
/// Default projection for instrument searches
pub const DEFAULT_SEARCH_PROJECTION: &str = "symbol-search";
/// Projection used by fundamental lookups
pub const FUNDAMENTAL_PROJECTION: &str = "fundamental";
/// Default direction for movers requests
pub const DEFAULT_MOVERS_DIRECTION: &str = "up";
/// Default change type for movers requests
pub const DEFAULT_MOVERS_CHANGE_TYPE: &str = "percent";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the TD Ameritrade API
pub const USER_AGENT: &str = "td-client/0.1.0";
