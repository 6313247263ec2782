//! OAuth token acquisition, storage, and refresh.
//!
//! Installed-app flow: open the consent URL in the user's browser, catch the
//! redirect on a localhost listener, exchange the code, and persist the
//! token pair next to the credentials file.

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use url::Url;

use timesheet_core::error::{TimesheetError, TimesheetResult};
use timesheet_core::remote::AccountInfo;

use crate::config::{GoogleCredentials, config_dir};

const OAUTH_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

const REDIRECT_ADDR: &str = "127.0.0.1:8085";
const REDIRECT_URI: &str = "http://localhost:8085/callback";

const SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets \
                      https://www.googleapis.com/auth/drive \
                      https://www.googleapis.com/auth/userinfo.profile \
                      https://www.googleapis.com/auth/userinfo.email";

/// Refresh slightly before the server-side expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

const TOKEN_FILE: &str = "google-token.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
    refresh_token: String,
    expires_at: i64,
}

impl StoredToken {
    fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
}

#[derive(Deserialize)]
struct UserInfo {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

fn token_path() -> TimesheetResult<PathBuf> {
    Ok(config_dir()?.join(TOKEN_FILE))
}

/// Run the full consent flow and store the resulting token pair.
pub async fn sign_in(
    http: &reqwest::Client,
    creds: &GoogleCredentials,
) -> TimesheetResult<AccountInfo> {
    let listener = TcpListener::bind(REDIRECT_ADDR)
        .await
        .map_err(|e| TimesheetError::Auth(format!("Could not listen on {REDIRECT_ADDR}: {e}")))?;

    let consent = consent_url(&creds.client_id);
    if open::that(consent.as_str()).is_err() {
        eprintln!("Open this URL in your browser to authorize:\n{consent}");
    }

    let code = wait_for_code(&listener).await?;
    let token = exchange_code(http, creds, &code).await?;
    save_token(&token)?;

    let user = fetch_userinfo(http, &token.access_token).await?;
    Ok(AccountInfo {
        username: user.name,
        email: user.email,
    })
}

/// Delete the stored token pair.
pub fn sign_out() -> TimesheetResult<()> {
    let path = token_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// A valid access token, refreshing through the token endpoint if the
/// stored one has expired.
pub async fn access_token(
    http: &reqwest::Client,
    creds: &GoogleCredentials,
) -> TimesheetResult<String> {
    let path = token_path()?;
    let content = std::fs::read_to_string(&path).map_err(|_| {
        TimesheetError::Auth("Not signed in. Run `timesheet auth` first.".into())
    })?;
    let token: StoredToken = serde_json::from_str(&content)
        .map_err(|_| TimesheetError::Auth("Stored token is unreadable. Run `timesheet auth` again.".into()))?;

    if !token.is_expired(Utc::now().timestamp()) {
        return Ok(token.access_token);
    }

    let refreshed = refresh(http, creds, &token.refresh_token).await?;
    save_token(&refreshed)?;
    Ok(refreshed.access_token)
}

fn consent_url(client_id: &str) -> Url {
    // Unwrap safe: static base URL
    Url::parse_with_params(
        OAUTH_AUTH_URL,
        &[
            ("client_id", client_id),
            ("redirect_uri", REDIRECT_URI),
            ("response_type", "code"),
            ("scope", SCOPES),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .unwrap()
}

async fn wait_for_code(listener: &TcpListener) -> TimesheetResult<String> {
    let (stream, _) = listener
        .accept()
        .await
        .map_err(|e| TimesheetError::Auth(format!("Redirect listener failed: {e}")))?;

    let mut stream = BufReader::new(stream);
    let mut request_line = String::new();
    stream
        .read_line(&mut request_line)
        .await
        .map_err(|e| TimesheetError::Auth(format!("Could not read redirect: {e}")))?;

    let code = code_from_request_line(&request_line).ok_or_else(|| {
        TimesheetError::Auth("You have closed the authorization page before signing in".into())
    });

    let body = match &code {
        Ok(_) => "Signed in. You can close this tab and return to the terminal.",
        Err(_) => "Authorization failed. You can close this tab.",
    };
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = stream.get_mut().write_all(response.as_bytes()).await;

    code
}

/// Extract the `code` query parameter from `GET /callback?... HTTP/1.1`.
fn code_from_request_line(line: &str) -> Option<String> {
    let path = line.split_whitespace().nth(1)?;
    let url = Url::parse(&format!("http://localhost{path}")).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
}

async fn exchange_code(
    http: &reqwest::Client,
    creds: &GoogleCredentials,
    code: &str,
) -> TimesheetResult<StoredToken> {
    let params = [
        ("code", code),
        ("client_id", creds.client_id.as_str()),
        ("client_secret", creds.client_secret.as_str()),
        ("redirect_uri", REDIRECT_URI),
        ("grant_type", "authorization_code"),
    ];
    let response: TokenResponse = post_token_form(http, &params).await?;
    let refresh_token = response.refresh_token.ok_or_else(|| {
        TimesheetError::Auth("Google returned no refresh token; revoke access and retry".into())
    })?;
    Ok(stored_from(response.access_token, refresh_token, response.expires_in))
}

async fn refresh(
    http: &reqwest::Client,
    creds: &GoogleCredentials,
    refresh_token: &str,
) -> TimesheetResult<StoredToken> {
    let params = [
        ("client_id", creds.client_id.as_str()),
        ("client_secret", creds.client_secret.as_str()),
        ("refresh_token", refresh_token),
        ("grant_type", "refresh_token"),
    ];
    let response: TokenResponse = post_token_form(http, &params).await?;
    Ok(stored_from(
        response.access_token,
        response
            .refresh_token
            .unwrap_or_else(|| refresh_token.to_string()),
        response.expires_in,
    ))
}

async fn post_token_form(
    http: &reqwest::Client,
    params: &[(&str, &str)],
) -> TimesheetResult<TokenResponse> {
    http.post(OAUTH_TOKEN_URL)
        .form(params)
        .send()
        .await
        .map_err(|e| TimesheetError::Auth(e.to_string()))?
        .error_for_status()
        .map_err(|e| TimesheetError::Auth(e.to_string()))?
        .json()
        .await
        .map_err(|e| TimesheetError::Auth(e.to_string()))
}

async fn fetch_userinfo(http: &reqwest::Client, access_token: &str) -> TimesheetResult<UserInfo> {
    http.get(USERINFO_URL)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| TimesheetError::Auth(e.to_string()))?
        .error_for_status()
        .map_err(|e| TimesheetError::Auth(e.to_string()))?
        .json()
        .await
        .map_err(|e| TimesheetError::Auth(e.to_string()))
}

fn stored_from(access_token: String, refresh_token: String, expires_in: i64) -> StoredToken {
    StoredToken {
        access_token,
        refresh_token,
        expires_at: Utc::now().timestamp() + expires_in - EXPIRY_MARGIN_SECS,
    }
}

fn save_token(token: &StoredToken) -> TimesheetResult<()> {
    let path = token_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(token)
        .map_err(|e| TimesheetError::Serialization(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_code_from_redirect() {
        let line = "GET /callback?state=x&code=4%2FabcDEF&scope=drive HTTP/1.1\r\n";
        assert_eq!(code_from_request_line(line).as_deref(), Some("4/abcDEF"));
    }

    #[test]
    fn missing_code_is_none() {
        let line = "GET /callback?error=access_denied HTTP/1.1\r\n";
        assert_eq!(code_from_request_line(line), None);
        assert_eq!(code_from_request_line("garbage"), None);
    }

    #[test]
    fn expiry_honors_the_stored_timestamp() {
        let token = StoredToken {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: 1_000,
        };
        assert!(!token.is_expired(999));
        assert!(token.is_expired(1_000));
        assert!(token.is_expired(2_000));
    }

    #[test]
    fn consent_url_targets_the_callback() {
        let url = consent_url("client-1");
        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let pairs: Vec<_> = url.query_pairs().collect();
        assert!(pairs.iter().any(|(k, v)| k == "client_id" && v == "client-1"));
        assert!(
            pairs
                .iter()
                .any(|(k, v)| k == "redirect_uri" && v == REDIRECT_URI)
        );
        assert!(pairs.iter().any(|(k, _)| k == "scope"));
    }
}
