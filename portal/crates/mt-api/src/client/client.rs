use crate::client::responses::{
    MessageResponse, RoleResponse, SetRoleResponse, StatusResponse, SyncUserResponse,
};
use crate::{ApiClientResult, ClientError};

use mt_config::ApiConfig;
use mt_core::{
    CoreError, Identity, IntakeRecord, IntakeSubmission, Role, SessionToken, VerificationRequest,
    Visit, VisitRequest,
};

use std::time::Duration;

use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the backend REST services
pub struct Client {
    pub base_url: String,
    pub intake_base_url: String,
    client: ReqwestClient,
}

/// Which backend service a request targets
#[derive(Debug, Clone, Copy)]
enum Service {
    Users,
    Intake,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - User/visit service URL (e.g., "http://localhost:5001")
    /// * `intake_base_url` - Intake service URL
    /// * `timeout` - Bound on every request
    pub fn new(base_url: &str, intake_base_url: &str, timeout: Duration) -> ApiClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            intake_base_url: intake_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiClientResult<Self> {
        Self::new(&config.base_url, &config.intake_base_url, config.timeout())
    }

    /// Build a request carrying the provider-issued bearer token
    fn request(
        &self,
        service: Service,
        method: Method,
        path: &str,
        token: &SessionToken,
    ) -> reqwest::RequestBuilder {
        let base = match service {
            Service::Users => &self.base_url,
            Service::Intake => &self.intake_base_url,
        };
        let url = format!("{}{}", base, path);
        debug!("{} {}", method, url);

        self.client.request(method, &url).bearer_auth(token.expose())
    }

    /// Send the request and map non-success statuses to errors.
    ///
    /// Returns the raw body of a successful response.
    async fn send(&self, req: reqwest::RequestBuilder) -> ApiClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
        warn!("Backend returned {}: {}", status, message);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::unauthorized(status.as_u16(), message));
        }

        Err(ClientError::api_error(status.as_u16(), message))
    }

    /// Execute request and decode the JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ApiClientResult<T> {
        let body = self.send(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Create or update the backend user record for an identity
    pub async fn sync_user(
        &self,
        token: &SessionToken,
        identity: &Identity,
        role: Role,
    ) -> ApiClientResult<SyncUserResponse> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AddUserRequest<'a> {
            clerk_id: &'a str,
            email: Option<&'a str>,
            name: Option<&'a str>,
            role: Role,
        }

        let body = AddUserRequest {
            clerk_id: &identity.id,
            email: identity.email.as_deref(),
            name: identity.name.as_deref(),
            role,
        };
        let req = self
            .request(Service::Users, Method::POST, "/api/addUser", token)
            .json(&body);
        self.execute(req).await
    }

    /// Get the authoritative role for a user
    pub async fn get_role(&self, token: &SessionToken, user_id: &str) -> ApiClientResult<Role> {
        let req = self.request(
            Service::Users,
            Method::GET,
            &format!("/api/user/role/{}", user_id),
            token,
        );
        let response: RoleResponse = self.execute(req).await?;
        Ok(response.role)
    }

    /// Record the role the user picked on the role-selection page
    pub async fn set_role(
        &self,
        token: &SessionToken,
        identity: &Identity,
        role: Role,
    ) -> ApiClientResult<SetRoleResponse> {
        if !role.is_selectable() {
            let err = CoreError::validation("role", format!("Role '{}' cannot be selected", role));
            return Err(err.into());
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SetRoleRequest<'a> {
            role: Role,
            clerk_id: &'a str,
        }

        let body = SetRoleRequest {
            role,
            clerk_id: &identity.id,
        };
        let req = self
            .request(Service::Users, Method::POST, "/api/user/set-role", token)
            .json(&body);
        let response: SetRoleResponse = self.execute(req).await?;

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "Failed to update role".to_string());
            return Err(ClientError::api_error(StatusCode::OK.as_u16(), message));
        }

        Ok(response)
    }

    /// Submit the extended profile for verification
    pub async fn verify_profile(
        &self,
        token: &SessionToken,
        request: &VerificationRequest,
    ) -> ApiClientResult<MessageResponse> {
        let req = self
            .request(Service::Users, Method::POST, "/api/user/verify", token)
            .json(request);
        self.execute(req).await
    }

    /// Whether the backend has verified the signed-in user
    pub async fn get_status(&self, token: &SessionToken) -> ApiClientResult<bool> {
        let req = self.request(Service::Users, Method::GET, "/api/user/status", token);
        let response: StatusResponse = self.execute(req).await?;
        Ok(response.is_verified)
    }

    // =========================================================================
    // Visit Operations
    // =========================================================================

    /// List the signed-in user's visits
    pub async fn list_visits(&self, token: &SessionToken) -> ApiClientResult<Vec<Visit>> {
        let req = self.request(Service::Users, Method::GET, "/api/visits", token);
        self.execute(req).await
    }

    /// Request a visit, uploading the staged documents as multipart form data.
    ///
    /// The request is validated first; an invalid request never reaches the
    /// network.
    pub async fn create_visit(
        &self,
        token: &SessionToken,
        request: &VisitRequest,
    ) -> ApiClientResult<Visit> {
        request.validate()?;

        let document_type_map = serde_json::to_string(&request.document_type_map())?;

        let mut form = Form::new().text(
            "chief_complaint",
            request.chief_complaint.trim().to_string(),
        );
        for document in request.documents() {
            let mut part =
                Part::bytes(document.bytes.clone()).file_name(document.file_name.clone());
            if let Some(ref content_type) = document.content_type {
                part = part.mime_str(content_type)?;
            }
            form = form.part("medicalDocs", part);
        }
        form = form.text("documentTypeMap", document_type_map);

        let req = self
            .request(Service::Users, Method::POST, "/api/visits", token)
            .multipart(form);
        self.execute(req).await
    }

    // =========================================================================
    // Intake Operations
    // =========================================================================

    /// Fetch the stored intake record; `None` when the user has not submitted one
    pub async fn get_intake(&self, token: &SessionToken) -> ApiClientResult<Option<IntakeRecord>> {
        let req = self.request(Service::Intake, Method::GET, "/intake", token);

        match self.send(req).await {
            Ok(body) if body.trim().is_empty() => Ok(None),
            Ok(body) => Ok(serde_json::from_str::<Option<IntakeRecord>>(&body)?),
            Err(ClientError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                debug!("No existing intake data found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Submit the intake form
    pub async fn submit_intake(
        &self,
        token: &SessionToken,
        submission: &IntakeSubmission,
    ) -> ApiClientResult<Value> {
        let req = self
            .request(Service::Intake, Method::POST, "/intake/submit", token)
            .json(submission);
        self.execute(req).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// The user service reports `message`, the intake service `detail`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| match value.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Object(o)) => o.get("message").and_then(|m| m.as_str()).map(String::from),
            _ => None,
        })
}
