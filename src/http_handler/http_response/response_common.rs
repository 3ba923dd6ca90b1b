/// Uniform body the recipe service wraps every payload in. A `code` of
/// 200 marks success; anything else is a service-level failure, even
/// when the HTTP status says otherwise.
#[derive(serde::Deserialize, Debug)]
pub struct ApiEnvelope<T> {
    code: i32,
    message: String,
    #[serde(default)]
    data: T,
}

impl<T> ApiEnvelope<T> {
    const SUCCESS_CODE: i32 = 200;

    pub fn code(&self) -> i32 {
        self.code
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn data(&self) -> &T {
        &self.data
    }
    pub fn into_data(self) -> T {
        self.data
    }
    pub(crate) fn into_message(self) -> String {
        self.message
    }
    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS_CODE
    }
}

/// Marker for responses that arrive wrapped in the service envelope.
pub(crate) trait EnvelopeHTTPResponseType {
    /// Payload type carried in the envelope's `data` field.
    type Data: for<'de> serde::Deserialize<'de>;
}

impl<T> HTTPResponseType for T
where T: EnvelopeHTTPResponseType
{
    type ParsedResponseType = ApiEnvelope<T::Data>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        // Failed envelopes carry `data: null`, so the payload is only
        // decoded once the envelope code says there is one.
        let envelope = resp.json::<ApiEnvelope<serde_json::Value>>().await?;
        if !envelope.is_success() {
            let message = envelope.into_message();
            return if message.is_empty() {
                Err(ResponseError::Unknown)
            } else {
                Err(ResponseError::Api(message))
            };
        }
        let ApiEnvelope { code, message, data } = envelope;
        let data = serde_json::from_value::<T::Data>(data)
            .map_err(|e| ResponseError::Transport(e.to_string()))?;
        Ok(ApiEnvelope { code, message, data })
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Prefer the payload message, then the status reason.
        let fallback = status.canonical_reason().map(String::from);
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.into_message().or(fallback),
            Err(_) => fallback,
        };
        match message {
            Some(message) => Err(ResponseError::Api(message)),
            None => Err(ResponseError::Unknown),
        }
    }
}

/// Minimal error payload; only the message matters client-side.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiErrorBody {
    /// An empty message counts as absent so the normalization chain
    /// can fall through to the next source.
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.is_empty())
    }
}

#[derive(Debug)]
pub enum ResponseError {
    /// Failure message reported by the service itself.
    Api(String),
    /// The service answered 401; carries the normalized message. The
    /// stored session is cleared before this is raised.
    Unauthorized(String),
    NoConnection,
    Timeout,
    /// Transport-level failure, e.g. an unreadable body.
    Transport(String),
    /// Nothing usable in the response.
    Unknown,
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(message) | Self::Unauthorized(message) | Self::Transport(message) => {
                write!(f, "{message}")
            }
            Self::NoConnection => write!(f, "no connection to the recipe service"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Unknown => write!(f, "request failed"),
        }
    }
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Transport(value.to_string())
        }
    }
}
