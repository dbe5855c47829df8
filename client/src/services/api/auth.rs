//! # Authentication Endpoints
//!
//! Registration, login, the registration confirmation email and the user
//! profile.

use reqwest::Url;
use shared::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};

use super::client::{decode_body, present_body, ApiClient};
use crate::core::error::{AppError, Result};
use crate::core::service::HttpRequest;

/// Register a new user.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<RegisterResponse> {
    tracing::info!("Registering user");

    let body = serde_json::to_value(request)
        .map_err(|e| AppError::malformed(format!("unserializable registration payload: {}", e)))?;
    let response = client
        .execute(HttpRequest::post(client.backend_url("/users/register"), body))
        .await?;

    decode_body(&response, "registration")
}

/// Ask the backend to send the "registration succeeded" email.
///
/// The address travels as one percent-encoded path segment.
pub async fn send_confirmation_email(client: &ApiClient, email: &str) -> Result<()> {
    let mut url = Url::parse(&client.backend_url("/nodemailer"))
        .map_err(|e| AppError::Config(format!("invalid backend URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Config("backend URL cannot carry a path".to_string()))?
        .push(email);

    let response = client.execute(HttpRequest::get(url.as_str())).await?;
    present_body(&response, "confirmation email")?;
    Ok(())
}

/// Log in with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse> {
    tracing::info!("Attempting login");

    let body = serde_json::to_value(request)
        .map_err(|e| AppError::malformed(format!("unserializable login payload: {}", e)))?;
    let response = client
        .execute(HttpRequest::post(client.backend_url("/users/login"), body))
        .await?;

    let login: LoginResponse = decode_body(&response, "login")?;
    if login.access_token.trim().is_empty() {
        return Err(AppError::malformed("login response has an empty access_token"));
    }

    tracing::info!("Login successful");
    Ok(login)
}

/// Fetch the logged-in user's profile.
pub async fn get_user(client: &ApiClient) -> Result<UserProfile> {
    let request = client.authorize(HttpRequest::get(client.backend_url("/users")))?;
    let response = client.execute(request).await?;
    decode_body(&response, "user profile")
}
