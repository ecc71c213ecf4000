use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{FetchError, TimelineSource, Tweet};

const TOKEN_URL: &str = "https://api.twitter.com/oauth2/token";
const TIMELINE_URL: &str = "https://api.twitter.com/1.1/statuses/user_timeline.json";

/// Body of the application-only authentication response.
#[derive(Deserialize)]
struct TokenResponse {
	access_token: Option<String>,
}

/// Blocking Twitter client authenticated with an application bearer token.
pub struct TwitterClient {
	client: Client,
	token: String,
}

impl TwitterClient {
	/// Exchanges a consumer key and secret for a bearer token.
	///
	/// Every request made by the returned client times out after `timeout`.
	///
	/// # Errors
	/// Returns an error if the request fails or the response has no token.
	pub fn authenticate(key: &str, secret: &str, timeout: Duration) -> Result<Self, FetchError> {
		let client = Client::builder()
			.timeout(timeout)
			.build()?;

		let response: TokenResponse = client
			.post(TOKEN_URL)
			.query(&[("grant_type", "client_credentials")])
			.basic_auth(key, Some(secret))
			.send()?
			.error_for_status()?
			.json()?;

		match response.access_token {
			Some(token) if !token.is_empty() => Ok(Self { client, token }),
			_ => Err(FetchError::MissingToken),
		}
	}
}

impl TimelineSource for TwitterClient {
	/// Sends a GET request to the user timeline endpoint.
	fn timeline(&self, account: &str, count: usize) -> Result<Vec<Tweet>, FetchError> {
		debug!("fetching {count} posts of {account}");
		let tweets = self.client
			.get(TIMELINE_URL)
			.query(&[("screen_name", account.to_owned()), ("count", count.to_string())])
			.bearer_auth(&self.token)
			.send()?
			.error_for_status()?
			.json()?;

		Ok(tweets)
	}
}
