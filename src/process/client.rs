//! Upload client for the watermark processing server
//!
//! One multipart POST per cycle: a single part named `file` carrying the
//! picked video's bytes, MIME type, and display name. The response body
//! is the processed video as raw binary. Single attempt, no retry.

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::error::ProcessError;
use super::types::PickedVideo;

pub(crate) async fn upload_for_processing(
    client: &Client,
    endpoint: &str,
    video: &PickedVideo,
) -> Result<Vec<u8>, ProcessError> {
    let bytes = tokio::fs::read(&video.path)
        .await
        .map_err(|e| ProcessError::Network(format!("Failed to read {}: {}", video.path, e)))?;

    let part = Part::bytes(bytes)
        .file_name(video.file_name.clone())
        .mime_str(&video.content_type)
        .map_err(|e| {
            ProcessError::Network(format!("Invalid content type {}: {}", video.content_type, e))
        })?;
    let form = Form::new().part("file", part);

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ProcessError::Network(format!("Upload request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(ProcessError::Network(format!(
            "Upload failed: {} - {}",
            status, text
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ProcessError::Network(format!("Failed to read response body: {}", e)))?;

    if body.is_empty() {
        return Err(ProcessError::Network(
            "Server returned an empty body".to_string(),
        ));
    }

    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::upload_for_processing;
    use crate::process::error::ProcessError;
    use crate::process::types::PickedVideo;
    use reqwest::Client;
    use std::io::Write;
    use std::path::Path;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn temp_video(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("clip")
            .suffix(".mp4")
            .tempfile()
            .unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn picked(path: &Path) -> PickedVideo {
        PickedVideo::from_path(path)
    }

    #[tokio::test]
    async fn successful_upload_returns_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"processed-bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let file = temp_video(b"raw-video");
        let video = picked(file.path());
        let client = Client::new();
        let endpoint = format!("{}/upload", server.uri());

        let body = upload_for_processing(&client, &endpoint, &video)
            .await
            .unwrap();
        assert_eq!(body, b"processed-bytes");
    }

    #[tokio::test]
    async fn request_body_is_multipart_with_file_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
            .mount(&server)
            .await;

        let file = temp_video(b"raw-video");
        let video = picked(file.path());
        let client = Client::new();
        let endpoint = format!("{}/upload", server.uri());

        upload_for_processing(&client, &endpoint, &video)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        let content_type = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"file\""));
        assert!(body.contains(&video.file_name));
        assert!(body.contains("video/mp4"));
        assert!(body.contains("raw-video"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let file = temp_video(b"raw-video");
        let video = picked(file.path());
        let client = Client::new();
        let endpoint = format!("{}/upload", server.uri());

        let err = upload_for_processing(&client, &endpoint, &video)
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Network(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn empty_response_body_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let file = temp_video(b"raw-video");
        let video = picked(file.path());
        let client = Client::new();
        let endpoint = format!("{}/upload", server.uri());

        let err = upload_for_processing(&client, &endpoint, &video)
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Network(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        // Bind then drop a listener so the port is known to be closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let file = temp_video(b"raw-video");
        let video = picked(file.path());
        let client = Client::new();
        let endpoint = format!("http://127.0.0.1:{}/upload", port);

        let err = upload_for_processing(&client, &endpoint, &video)
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Network(_)));
    }

    #[tokio::test]
    async fn missing_source_file_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
            .expect(0)
            .mount(&server)
            .await;

        let video = PickedVideo::from_path(Path::new("/nonexistent/clip.mp4"));
        let client = Client::new();
        let endpoint = format!("{}/upload", server.uri());

        let err = upload_for_processing(&client, &endpoint, &video)
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Network(_)));
    }
}
