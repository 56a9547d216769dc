use anyhow::{Result, anyhow};
use tracing::debug;

/// 과목 목록 (메뉴 번호 순서)
pub const SUBJECTS: [&str; 17] = [
    "국어", "수학", "영어", "한국사",
    "생활과윤리", "윤리와사상", "한국지리", "세계지리",
    "동아시아사", "세계사", "경제", "정치와법", "사회문화",
    "물리학1", "화학1", "생명과학1", "지구과학1",
];

pub const DEFAULT_DOC_TYPE: &str = "문제";

/// 과목 입력을 다운로드할 과목 목록으로 바꾼다.
///
/// - `all` (대소문자 무시): 전체 과목
/// - 숫자: 1부터 시작하는 메뉴 번호, 범위를 벗어나면 에러
/// - 그 외: 입력한 이름 그대로
pub fn resolve_subjects(input: &str) -> Result<Vec<String>> {
    if input.eq_ignore_ascii_case("all") {
        return Ok(SUBJECTS.iter().map(|s| s.to_string()).collect());
    }

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        let subject = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| SUBJECTS.get(idx))
            .ok_or_else(|| anyhow!("잘못된 번호입니다: {}", input))?;
        debug!("번호 {} → {}", input, subject);
        return Ok(vec![subject.to_string()]);
    }

    Ok(vec![input.to_string()])
}

/// 빈 입력이면 기본 유형("문제")
pub fn resolve_doc_type(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_DOC_TYPE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 번호가 매겨진 과목 메뉴
pub fn render_menu() -> String {
    let mut menu = String::from("과목 목록:\n");
    for (i, subject) in SUBJECTS.iter().enumerate() {
        menu.push_str(&format!("  {:2}. {}\n", i + 1, subject));
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_to_catalogue_in_order() {
        for input in ["all", "ALL", "All"] {
            let subjects = resolve_subjects(input).unwrap();
            assert_eq!(subjects.len(), 17, "all 은 17개 과목이어야 함");
            assert_eq!(subjects, SUBJECTS.to_vec());
        }
    }

    #[test]
    fn test_numeric_index_is_one_based() {
        assert_eq!(resolve_subjects("1").unwrap(), vec!["국어"]);
        assert_eq!(resolve_subjects("17").unwrap(), vec!["지구과학1"]);
        assert_eq!(resolve_subjects("05").unwrap(), vec!["생활과윤리"]);
    }

    #[test]
    fn test_out_of_range_index_is_error() {
        assert!(resolve_subjects("0").is_err(), "0 번은 에러여야 함");
        assert!(resolve_subjects("18").is_err(), "18 번은 에러여야 함");
        assert!(resolve_subjects("99999999999999999999999").is_err());
    }

    #[test]
    fn test_other_input_is_literal_subject() {
        assert_eq!(resolve_subjects("화학2").unwrap(), vec!["화학2"]);
        assert_eq!(resolve_subjects("1a").unwrap(), vec!["1a"]);
    }

    #[test]
    fn test_blank_doc_type_defaults() {
        assert_eq!(resolve_doc_type(""), "문제");
        assert_eq!(resolve_doc_type("   "), "문제");
        assert_eq!(resolve_doc_type("해설"), "해설");
    }

    #[test]
    fn test_menu_lists_every_subject() {
        let menu = render_menu();
        assert!(menu.contains("   1. 국어"));
        assert!(menu.contains("  17. 지구과학1"));
    }
}
