//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 슬러그 생성과 필수 필드 검증을 포함합니다.

use crate::errors::AppError;

/// 표시 이름에서 URL 안전 슬러그를 생성합니다.
///
/// 소문자화한 뒤 영숫자만 남기고, 나머지 문자 구간은 하나의 대시로
/// 접습니다. 카테고리/상품의 안정적인 조회 키로 사용됩니다.
///
/// # 인자
/// * `value` - 슬러그로 변환할 표시 이름
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::slugify;
///
/// assert_eq!(slugify("Steel"), "steel");
/// assert_eq!(slugify("Mild Steel Rod"), "mild-steel-rod");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());

    for ch in value.trim().to_lowercase().chars() {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} is required",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Steel"), "steel");
        assert_eq!(slugify("Mild Steel Rod"), "mild-steel-rod");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("Heavy  Duty   Bolts"), "heavy-duty-bolts");
        assert_eq!(slugify("nuts_and_bolts"), "nuts-and-bolts");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Steel  "), "steel");
        assert_eq!(slugify("Steel!"), "steel");
        assert_eq!(slugify("!Steel"), "steel");
    }

    #[test]
    fn test_slugify_is_stable() {
        let once = slugify("Mild Steel Rod");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Steel", "name").unwrap(), "Steel");
        assert_eq!(
            validate_required_string("  Steel  ", "name").unwrap(),
            "Steel"
        );

        // 실패 케이스
        let err = validate_required_string("", "name").unwrap_err();
        assert_eq!(err, AppError::ValidationError("name is required".to_string()));
        assert!(validate_required_string("   ", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  Truck A  ".to_string())),
            Some("Truck A".to_string())
        );
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }
}
