//! LinkedIn posting client.

use crate::Publisher;
use chronicle_error::{ChronicleResult, HttpError, PublishError, PublishErrorKind};
use serde_json::json;
use tracing::{debug, info, instrument};

const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
const LINKEDIN_API_VERSION: &str = "202401";

/// Client for LinkedIn's ugcPosts endpoint.
///
/// Posts text-only shares with bearer-token auth. The post identifier comes
/// back in the `x-restli-id` response header on success.
#[derive(Debug, Clone)]
pub struct LinkedInClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
    author_urn: String,
}

impl LinkedInClient {
    /// Create a client for the given account.
    ///
    /// `author_id` may be a bare person id or a full `urn:li:person:` URN.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        author_id: impl Into<String>,
    ) -> ChronicleResult<Self> {
        let author_id = author_id.into();
        let author_urn = if author_id.starts_with("urn:li:person:") {
            author_id
        } else {
            format!("urn:li:person:{author_id}")
        };

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            access_token: access_token.into(),
            author_urn,
        })
    }

    fn share_body(&self, text: &str) -> serde_json::Value {
        json!({
            "author": self.author_urn,
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": { "text": text },
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": {
                "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
            }
        })
    }
}

#[async_trait::async_trait]
impl Publisher for LinkedInClient {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn publish(&self, text: &str) -> ChronicleResult<Option<String>> {
        let url = format!("{}/ugcPosts", self.base_url);

        debug!(url = %url, "Posting share");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .header("LinkedIn-Version", LINKEDIN_API_VERSION)
            .json(&self.share_body(text))
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Network(e.to_string())))?;

        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::Api {
                status: status.as_u16(),
                detail,
            })
            .into());
        }

        let post_id = response
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        info!(post_id = ?post_id, "Published share");

        Ok(post_id)
    }

    fn platform_name(&self) -> &'static str {
        "linkedin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_author_id_is_wrapped_in_a_person_urn() {
        let client = LinkedInClient::new("https://api.example.com/v2", "token", "abc123").unwrap();
        assert_eq!(client.author_urn, "urn:li:person:abc123");
    }

    #[test]
    fn full_urn_is_kept_as_is() {
        let client =
            LinkedInClient::new("https://api.example.com/v2", "token", "urn:li:person:abc123")
                .unwrap();
        assert_eq!(client.author_urn, "urn:li:person:abc123");
    }

    #[test]
    fn share_body_shape() {
        let client = LinkedInClient::new("https://api.example.com/v2", "token", "abc123").unwrap();
        let body = client.share_body("Hello network");

        assert_eq!(body["author"], "urn:li:person:abc123");
        assert_eq!(body["lifecycleState"], "PUBLISHED");
        assert_eq!(
            body["specificContent"]["com.linkedin.ugc.ShareContent"]["shareCommentary"]["text"],
            "Hello network"
        );
        assert_eq!(
            body["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"],
            "PUBLIC"
        );
    }
}
