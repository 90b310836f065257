use crate::foundation::error::{InklineError, InklineResult};

/// Raw result of one remote fetch.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// `true` for status 200; anything else reads as "no image".
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Synchronous byte-fetch capability for remote resource URLs.
///
/// Implementations perform exactly one attempt per call; the loader never
/// retries. An `Err` covers transport failures that produced no status code
/// at all; protocol-level failures come back as a non-200
/// [`FetchResponse`].
pub trait RemoteFetch {
    /// Issue one GET for `url` and return the status plus raw body.
    fn get(&self, url: &str) -> InklineResult<FetchResponse>;
}

/// [`RemoteFetch`] backed by a blocking `reqwest` client.
///
/// The call suspends the composing thread until the round-trip completes.
#[derive(Debug)]
pub struct HttpFetch {
    client: reqwest::blocking::Client,
}

impl HttpFetch {
    /// Fetcher over a default client.
    pub fn new() -> InklineResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| InklineError::fetch(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

impl RemoteFetch for HttpFetch {
    fn get(&self, url: &str) -> InklineResult<FetchResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| InklineError::fetch(format!("GET {url}: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| InklineError::fetch(format!("read body of {url}: {e}")))?
            .to_vec();
        Ok(FetchResponse { status, body })
    }
}
