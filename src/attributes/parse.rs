//! # 텍스트 값 파싱
//!
//! 속성 컨테이너가 저장소에 값을 쓸 때 사용하는 타입별 "텍스트에서 파싱" 루틴입니다.
//! 각 타입은 [`TextValue`]를 구현하여 자신의 파서를 제공하며, 새로운 타입을
//! 추가해도 컨테이너는 바뀌지 않습니다.
//!
//! ## 내장 타입 규칙
//!
//! | 타입 | 규칙 | 실패 시 |
//! |------|------|---------|
//! | `bool` | 대소문자 무시, 정확히 `true`만 참 | 실패 없음 (`false`) |
//! | 정수 / 실수 | 표준 `FromStr` | 에러, 이전 값 유지 |
//! | `String` | 그대로 복사 | 실패 없음 |
//! | `char` | 정확히 한 글자 | 에러, 이전 값 유지 |

use std::fmt::Display;
use std::str::FromStr;

/// 텍스트로부터 제자리에서 값을 설정할 수 있는 타입
///
/// 실패하면 `Err(reason)`을 반환하고 `self`는 변경하지 않아야 합니다.
pub trait TextValue {
    fn parse_text(&mut self, text: &str) -> Result<(), String>;
}

/// 불리언 텍스트 해석
///
/// 대소문자를 무시하고 `true`만 참으로 봅니다. `yes`, `1`, `on` 등 나머지는
/// 모두 거짓이며 에러를 만들지 않습니다.
pub fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

impl TextValue for bool {
    fn parse_text(&mut self, text: &str) -> Result<(), String> {
        *self = parse_bool(text);
        Ok(())
    }
}

impl TextValue for String {
    fn parse_text(&mut self, text: &str) -> Result<(), String> {
        text.clone_into(self);
        Ok(())
    }
}

/// `FromStr` 기반 파싱. 실패 시 대상 값을 건드리지 않습니다.
pub fn parse_from_str<T>(target: &mut T, text: &str) -> Result<(), String>
where
    T: FromStr,
    T::Err: Display,
{
    *target = text
        .parse::<T>()
        .map_err(|e| format!("cannot parse '{}': {}", text, e))?;
    Ok(())
}

macro_rules! impl_text_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                fn parse_text(&mut self, text: &str) -> Result<(), String> {
                    parse_from_str(self, text)
                }
            }
        )*
    };
}

impl_text_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_is_case_insensitive() {
        for text in ["true", "TRUE", "TrUe", "tRUE"] {
            let mut value = false;
            value.parse_text(text).unwrap();
            assert!(value, "'{}' should be true", text);
        }
    }

    #[test]
    fn test_bool_other_text_is_false() {
        for text in ["false", "yes", "1", "on", "", " true", "truee"] {
            let mut value = true;
            assert!(value.parse_text(text).is_ok());
            assert!(!value, "'{}' should be false", text);
        }
    }

    #[test]
    fn test_integer_parsing() {
        let mut width: u32 = 1920;
        width.parse_text("2560").unwrap();
        assert_eq!(width, 2560);

        let mut offset: i64 = 0;
        offset.parse_text("-42").unwrap();
        assert_eq!(offset, -42);
    }

    #[test]
    fn test_malformed_number_keeps_prior_value() {
        let mut ticks: u32 = 60;
        let err = ticks.parse_text("abc").unwrap_err();
        assert!(err.contains("abc"));
        assert_eq!(ticks, 60);

        let mut small: u8 = 7;
        assert!(small.parse_text("300").is_err());
        assert_eq!(small, 7);

        let mut unsigned: u32 = 5;
        assert!(unsigned.parse_text("-1").is_err());
        assert_eq!(unsigned, 5);
    }

    #[test]
    fn test_float_parsing() {
        let mut volume: f32 = 1.0;
        volume.parse_text("0.25").unwrap();
        assert_eq!(volume, 0.25);
        assert!(volume.parse_text("loud").is_err());
        assert_eq!(volume, 0.25);
    }

    #[test]
    fn test_string_is_verbatim() {
        let mut name = String::from("player");
        name.parse_text("  Dr. Who  ").unwrap();
        assert_eq!(name, "  Dr. Who  ");
    }

    #[test]
    fn test_char_parsing() {
        let mut key = 'w';
        key.parse_text("a").unwrap();
        assert_eq!(key, 'a');
        assert!(key.parse_text("ab").is_err());
        assert_eq!(key, 'a');
    }
}
