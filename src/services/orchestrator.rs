use anyhow::Result;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, error, info};

use crate::app::AppConfig;
use crate::app::prompt::Prompter;
use crate::core::{ExamRequest, ProcessStats};
use crate::modules::catalogue::{render_menu, resolve_doc_type, resolve_subjects};
use crate::services::downloader::Downloader;

/// 프롬프트에서 모은 실행 파라미터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    pub year: String,
    pub month: String,
    pub grade: String,
    pub subjects: Vec<String>,
    pub doc_type: String,
}

impl RunParams {
    pub fn request_for(&self, subject: &str) -> ExamRequest {
        ExamRequest {
            year: self.year.clone(),
            month: self.month.clone(),
            grade: self.grade.clone(),
            subject: subject.to_string(),
            doc_type: self.doc_type.clone(),
        }
    }
}

/// 년도, 월, 학년, 과목, 유형을 차례로 묻는다.
/// 과목 번호가 범위를 벗어나면 에러를 돌려준다.
pub async fn collect_params<R, W>(prompter: &mut Prompter<R, W>) -> Result<RunParams>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    prompter.say("=== 모의고사 PDF 다운로더 ===\n").await?;

    let year = prompter.ask("년도 (예: 2024): ").await?;
    let month = prompter.ask("월 (3, 4, 6, 7, 9, 10): ").await?;
    let grade = prompter.ask("학년 (1, 2, 3): ").await?;

    prompter.say(&format!("\n{}", render_menu())).await?;

    let subject_input = prompter.ask("과목 번호 또는 이름 (전체: all): ").await?;
    let doc_type = resolve_doc_type(&prompter.ask("유형 (문제/해설, 기본: 문제): ").await?);

    let subjects = resolve_subjects(&subject_input)?;

    Ok(RunParams {
        year,
        month,
        grade,
        subjects,
        doc_type,
    })
}

/// 과목마다 한 번씩 순서대로 내려받는다. 실패해도 멈추지 않는다.
pub async fn download_all(downloader: &Downloader, params: &RunParams, save_dir: &Path) -> ProcessStats {
    let mut stats = ProcessStats::default();

    for subject in &params.subjects {
        let outcome = downloader
            .download_document(&params.request_for(subject), save_dir)
            .await;
        stats.add_result(&outcome);
    }

    stats
}

/// 프롬프트부터 요약 출력까지 전체 흐름
pub async fn run_with<R, W>(app_config: &AppConfig, prompter: &mut Prompter<R, W>) -> Result<ProcessStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let downloader = Downloader::new(app_config)?;

    let params = match collect_params(prompter).await {
        Ok(params) => params,
        Err(e) => {
            error!("❌ {}", e);
            return Err(e);
        }
    };

    prompter.say("").await?;
    info!(
        "🚀 {}개 과목 다운로드 시작 (저장 위치: {})",
        params.subjects.len(),
        app_config.save_dir
    );

    let stats = download_all(&downloader, &params, Path::new(&app_config.save_dir)).await;

    debug!("시도 {}건", stats.total());
    info!("🎉 완료: 성공 {}개, 실패 {}개", stats.success, stats.failed);
    Ok(stats)
}

/// 입구: 표준 입출력으로 실행
pub async fn run(app_config: AppConfig) -> Result<()> {
    let mut prompter = Prompter::stdio();
    run_with(&app_config, &mut prompter).await?;
    Ok(())
}
