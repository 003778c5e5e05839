use serde::Deserialize;

use crate::app::SelectedFile;

/// Which remote classifier a trigger targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Svm,
    Vgg,
}

impl Model {
    pub fn label(self) -> &'static str {
        match self {
            Model::Svm => "SVM",
            Model::Vgg => "VGG",
        }
    }
}

/// Classification failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The service answered with a JSON body carrying an `error` field.
    Server(String),
    /// Transport failure, unreadable file, or unparseable response body.
    Other,
}

/// Body shape shared by both services: one of the fields is present.
#[derive(Deserialize)]
struct ResponseBody {
    prediction: Option<String>,
    error: Option<String>,
}

/// POST the selected file to `endpoint` as multipart form data and return
/// the predicted genre.
pub async fn classify(endpoint: &str, file: &SelectedFile) -> Result<String, ClassifyError> {
    let bytes = tokio::fs::read(&file.path).await.map_err(|e| {
        log::warn!("Failed to read {}: {e}", file.path.display());
        ClassifyError::Other
    })?;

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file.name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| {
            log::warn!("Bad content type {:?}: {e}", file.content_type);
            ClassifyError::Other
        })?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::new();
    let resp = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            log::warn!("Request to {endpoint} failed: {e}");
            ClassifyError::Other
        })?;

    let ok = resp.status().is_success();
    let body = resp.text().await.unwrap_or_default();
    interpret_response(ok, &body)
}

/// Map an HTTP outcome onto the prediction-or-error contract. A 2xx body
/// must carry `prediction`; anything else without a readable `error` field
/// collapses into the generic failure.
fn interpret_response(ok: bool, body: &str) -> Result<String, ClassifyError> {
    let parsed: Option<ResponseBody> = serde_json::from_str(body).ok();
    if ok {
        match parsed.and_then(|b| b.prediction) {
            Some(prediction) => Ok(prediction),
            None => Err(ClassifyError::Other),
        }
    } else {
        match parsed.and_then(|b| b.error) {
            Some(error) => Err(ClassifyError::Server(error)),
            None => Err(ClassifyError::Other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_yields_prediction() {
        let outcome = interpret_response(true, r#"{"prediction":"rock"}"#);
        assert_eq!(outcome, Ok("rock".to_string()));
    }

    #[test]
    fn success_body_may_carry_extra_fields() {
        let outcome =
            interpret_response(true, r#"{"prediction":"jazz","confidence":0.87}"#);
        assert_eq!(outcome, Ok("jazz".to_string()));
    }

    #[test]
    fn error_body_is_surfaced_verbatim() {
        let outcome = interpret_response(false, r#"{"error":"unsupported sample rate"}"#);
        assert_eq!(
            outcome,
            Err(ClassifyError::Server("unsupported sample rate".to_string()))
        );
    }

    #[test]
    fn unparseable_failure_body_is_generic() {
        assert_eq!(
            interpret_response(false, "<html>502 Bad Gateway</html>"),
            Err(ClassifyError::Other)
        );
        assert_eq!(interpret_response(false, ""), Err(ClassifyError::Other));
    }

    #[test]
    fn success_without_prediction_field_is_generic() {
        assert_eq!(interpret_response(true, "{}"), Err(ClassifyError::Other));
        assert_eq!(
            interpret_response(true, r#"{"error":"late failure"}"#),
            Err(ClassifyError::Other)
        );
    }
}
