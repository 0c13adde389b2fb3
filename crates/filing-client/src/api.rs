use serde::de::DeserializeOwned;
use shared_types::{
    AppError, CaseIdsResponse, CaseStatusResponse, DraftResponse, PendingDocument,
    SaveStepRequest, SaveStepResponse, SubmitCaseRequest, UpdateCaseStatusRequest,
    UploadDocumentsResponse, GENERIC_ERROR_MESSAGE,
};

use crate::config::ClientConfig;

/// The six case endpoints of the portal backend.
///
/// A trait so the wizard can be driven against a fake in tests; the real
/// implementation is [`HttpCaseApi`].
#[allow(async_fn_in_trait)]
pub trait CaseApi {
    /// `GET /api/cases/draft`. `Ok(None)` means the user has no open draft.
    async fn fetch_draft(&self) -> Result<Option<DraftResponse>, AppError>;

    /// `POST /api/cases/save-step`.
    async fn save_step(&self, req: &SaveStepRequest) -> Result<SaveStepResponse, AppError>;

    /// `POST /api/cases/submit`. Without a `case_id` the backend finalizes
    /// the caller's most recent open draft.
    async fn submit_case(&self, case_id: Option<&str>) -> Result<CaseIdsResponse, AppError>;

    /// `POST /api/cases/new`.
    async fn start_new_case(&self) -> Result<CaseIdsResponse, AppError>;

    /// `POST /api/cases/upload-documents` (multipart). Per-file rejections
    /// come back in the response body, not as an error.
    async fn upload_documents(
        &self,
        case_id: &str,
        documents: &[PendingDocument],
    ) -> Result<UploadDocumentsResponse, AppError>;

    /// `PUT /api/cases/{caseId}/status`.
    async fn update_case_status(
        &self,
        case_id: &str,
        status: &str,
    ) -> Result<CaseStatusResponse, AppError>;
}

/// `reqwest`-backed [`CaseApi`] with bearer auth and a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpCaseApi {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpCaseApi {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        self.authorize(builder).send().await.map_err(|e| {
            tracing::warn!(error = %e, "portal request failed");
            AppError::internal(GENERIC_ERROR_MESSAGE)
        })
    }
}

/// Map a response to `T`, turning non-2xx statuses into [`AppError`] with
/// the server's message preserved when one is present.
async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(AppError::from_response_body(status.as_u16(), &body));
    }
    resp.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "malformed portal response");
        AppError::internal(GENERIC_ERROR_MESSAGE)
    })
}

impl CaseApi for HttpCaseApi {
    async fn fetch_draft(&self) -> Result<Option<DraftResponse>, AppError> {
        let resp = self.send(self.http.get(self.url("/api/cases/draft"))).await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::from_response_body(status.as_u16(), &body));
        }
        // An absent draft arrives as an empty or `null` body.
        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to read draft body");
            AppError::internal(GENERIC_ERROR_MESSAGE)
        })?;
        if body.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice::<Option<DraftResponse>>(&body).map_err(|e| {
            tracing::warn!(error = %e, "malformed draft response");
            AppError::internal(GENERIC_ERROR_MESSAGE)
        })
    }

    async fn save_step(&self, req: &SaveStepRequest) -> Result<SaveStepResponse, AppError> {
        let resp = self
            .send(self.http.post(self.url("/api/cases/save-step")).json(req))
            .await?;
        parse_json(resp).await
    }

    async fn submit_case(&self, case_id: Option<&str>) -> Result<CaseIdsResponse, AppError> {
        let body = SubmitCaseRequest {
            case_id: case_id.map(str::to_owned),
        };
        let resp = self
            .send(self.http.post(self.url("/api/cases/submit")).json(&body))
            .await?;
        parse_json(resp).await
    }

    async fn start_new_case(&self) -> Result<CaseIdsResponse, AppError> {
        let resp = self.send(self.http.post(self.url("/api/cases/new"))).await?;
        parse_json(resp).await
    }

    async fn upload_documents(
        &self,
        case_id: &str,
        documents: &[PendingDocument],
    ) -> Result<UploadDocumentsResponse, AppError> {
        let mut form = reqwest::multipart::Form::new().text("caseId", case_id.to_owned());
        for doc in documents {
            let part = reqwest::multipart::Part::bytes(doc.bytes.clone())
                .file_name(doc.file_name.clone())
                .mime_str(&doc.content_type)
                .map_err(|e| {
                    AppError::bad_request(format!("{}: invalid content type ({e})", doc.file_name))
                })?;
            form = form.part("documents", part);
        }
        let resp = self
            .send(
                self.http
                    .post(self.url("/api/cases/upload-documents"))
                    .multipart(form),
            )
            .await?;
        parse_json(resp).await
    }

    async fn update_case_status(
        &self,
        case_id: &str,
        status: &str,
    ) -> Result<CaseStatusResponse, AppError> {
        let body = UpdateCaseStatusRequest {
            status: status.to_owned(),
        };
        let resp = self
            .send(
                self.http
                    .put(self.url(&format!("/api/cases/{case_id}/status")))
                    .json(&body),
            )
            .await?;
        parse_json(resp).await
    }
}
