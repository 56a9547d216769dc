use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::app::AppConfig;
use crate::core::{DownloadOutcome, ExamRequest, format_kb};

/// 성공 응답에서 사용하는 필드
#[derive(Debug, Deserialize)]
struct PdfPayload {
    #[serde(rename = "fileName")]
    file_name: String,
    base64: String,
    #[serde(default)]
    size: Option<u64>,
    #[serde(rename = "mimeType", default)]
    mime_type: Option<String>,
}

/// 디코딩까지 끝난 PDF
#[derive(Debug, PartialEq)]
pub struct DecodedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 모의고사 API 클라이언트
pub struct Downloader {
    client: Client,
    api_url: String,
}

impl Downloader {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// 한 과목의 PDF를 받아 `save_dir` 에 저장한다.
    /// 실패는 모두 `DownloadOutcome` 으로 돌려주고 호출자에게 에러를 올리지 않는다.
    pub async fn download_document(&self, request: &ExamRequest, save_dir: &Path) -> DownloadOutcome {
        info!("📥 요청 중: {}...", request);

        let (status, body) = match self.fetch(request).await {
            Ok(res) => res,
            Err(e) => {
                error!("  ❌ 요청 실패: {}", e);
                return DownloadOutcome::Transport {
                    reason: e.to_string(),
                };
            }
        };

        let pdf = match interpret_response(status, &body) {
            Ok(pdf) => pdf,
            Err(outcome) => return outcome,
        };

        match save_pdf(save_dir, &pdf.file_name, &pdf.bytes) {
            Ok(path) => {
                info!("  ✅ 저장 완료: {} ({})", path.display(), format_kb(pdf.bytes.len()));
                DownloadOutcome::Saved {
                    path,
                    bytes: pdf.bytes.len(),
                }
            }
            Err(e) => {
                error!("  ❌ 파일 저장 실패: {:#}", e);
                DownloadOutcome::Io {
                    reason: format!("{:#}", e),
                }
            }
        }
    }

    async fn fetch(&self, request: &ExamRequest) -> reqwest::Result<(StatusCode, String)> {
        let resp = self
            .client
            .get(&self.api_url)
            .query(&request.query())
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!("응답 상태: {}, 본문 {} 바이트", status, body.len());
        Ok((status, body))
    }
}

/// HTTP 상태와 본문을 해석한다. 성공이면 디코딩된 PDF, 아니면 실패 결과.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<DecodedPdf, DownloadOutcome> {
    if status == StatusCode::NOT_FOUND {
        warn!("  ⚠️ 파일 없음 (404)");
        return Err(DownloadOutcome::NotFound);
    }

    if status != StatusCode::OK {
        warn!("  ❌ 오류 발생 (HTTP {}): {}", status.as_u16(), body);
        return Err(DownloadOutcome::HttpStatus {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let data: Value = serde_json::from_str(body).map_err(|e| malformed(format!("JSON 파싱 실패: {}", e)))?;

    if !data.get("success").and_then(Value::as_bool).unwrap_or(false) {
        warn!("  ❌ 실패: {}", data);
        return Err(DownloadOutcome::ApiFailure { payload: data });
    }

    let payload: PdfPayload =
        serde_json::from_value(data).map_err(|e| malformed(format!("응답 필드 누락: {}", e)))?;

    let bytes = general_purpose::STANDARD
        .decode(payload.base64.as_bytes())
        .map_err(|e| malformed(format!("base64 디코딩 실패: {}", e)))?;

    if let Some(size) = payload.size {
        if size != bytes.len() as u64 {
            warn!("  ⚠️ 크기 불일치: 응답 {} 바이트, 디코딩 {} 바이트", size, bytes.len());
        }
    }
    if let Some(mime) = payload.mime_type.as_deref() {
        debug!("mimeType: {}", mime);
    }

    Ok(DecodedPdf {
        file_name: payload.file_name,
        bytes,
    })
}

fn malformed(reason: String) -> DownloadOutcome {
    error!("  ❌ 잘못된 응답: {}", reason);
    DownloadOutcome::Malformed { reason }
}

/// `save_dir/file_name` 에 쓴다. 같은 이름의 파일은 덮어쓴다.
pub fn save_pdf(save_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(save_dir)
        .with_context(|| format!("디렉터리 생성 실패: {}", save_dir.display()))?;
    let file_path = save_dir.join(file_name);
    fs::write(&file_path, bytes).with_context(|| format!("파일 쓰기 실패: {}", file_path.display()))?;
    Ok(file_path)
}
