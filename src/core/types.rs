use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// 한 과목에 대한 요청 파라미터. 모든 값은 그대로 쿼리 문자열로 전달된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRequest {
    pub year: String,
    pub month: String,
    pub grade: String,
    pub subject: String,
    pub doc_type: String,
}

impl ExamRequest {
    pub fn query(&self) -> [(&'static str, &str); 5] {
        [
            ("year", self.year.as_str()),
            ("month", self.month.as_str()),
            ("grade", self.grade.as_str()),
            ("subject", self.subject.as_str()),
            ("type", self.doc_type.as_str()),
        ]
    }
}

impl fmt::Display for ExamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}년 고{} {}월 {} {}",
            self.year, self.grade, self.month, self.subject, self.doc_type
        )
    }
}

/// 다운로드 1회의 결과
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Saved { path: PathBuf, bytes: usize },
    NotFound,
    HttpStatus { status: u16, body: String },
    ApiFailure { payload: Value },
    Transport { reason: String },
    Malformed { reason: String },
    Io { reason: String },
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }
}

/// 크기를 KB 단위 소수점 한 자리로 표시
pub fn format_kb(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStats {
    pub success: usize,
    pub failed: usize,
}

impl ProcessStats {
    pub fn add_result(&mut self, outcome: &DownloadOutcome) {
        if outcome.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kb_one_decimal() {
        assert_eq!(format_kb(2048), "2.0 KB");
        assert_eq!(format_kb(1536), "1.5 KB");
        assert_eq!(format_kb(0), "0.0 KB");
        assert_eq!(format_kb(100), "0.1 KB");
    }

    #[test]
    fn test_not_found_counts_as_failure() {
        let mut stats = ProcessStats::default();
        stats.add_result(&DownloadOutcome::Saved {
            path: PathBuf::from("downloads/a.pdf"),
            bytes: 10,
        });
        stats.add_result(&DownloadOutcome::NotFound);
        stats.add_result(&DownloadOutcome::HttpStatus {
            status: 500,
            body: String::new(),
        });

        assert_eq!(stats.success, 1);
        assert_eq!(stats.failed, 2, "404 도 실패로 집계되어야 함");
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_query_field_names() {
        let req = ExamRequest {
            year: "2024".into(),
            month: "6".into(),
            grade: "3".into(),
            subject: "국어".into(),
            doc_type: "해설".into(),
        };
        let names: Vec<&str> = req.query().iter().map(|(k, _)| *k).collect();

        assert_eq!(names, ["year", "month", "grade", "subject", "type"]);
        assert_eq!(req.to_string(), "2024년 고3 6월 국어 해설");
    }
}
