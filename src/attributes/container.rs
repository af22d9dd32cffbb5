//! # Attribute Container
//!
//! 문자열 키를 타입이 지워진 setter에 대응시키는 컨테이너입니다.
//! 각 setter는 호출자가 소유한 저장소에 대한 `&'a mut T`와 해당 타입의 파서를
//! 함께 보관하므로, 호출자는 구체 타입을 몰라도 텍스트로 값을 설정할 수 있습니다.
//!
//! 컨테이너는 저장소를 소유하지 않습니다. 저장소가 컨테이너보다 오래 살아야 한다는
//! 조건은 수명 `'a`로 컴파일 타임에 보장됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let mut use_steam = false;
//! let mut width: u32 = 1920;
//!
//! let mut container = AttributeContainer::new();
//! container.bind("useSteam", &mut use_steam);
//! container.bind("windowWidth", &mut width);
//!
//! container.set_from_text("useSteam", "TRUE")?;
//! container.set_from_text("windowWidth", "2560")?;
//! drop(container);
//!
//! assert!(use_steam);
//! assert_eq!(width, 2560);
//! ```

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::attributes::parse::TextValue;
use crate::core::errors::{AppError, AppResult};

/// 텍스트 파서 함수 타입
pub type TextParser<T> = fn(&mut T, &str) -> Result<(), String>;

/// 타입이 지워진 setter 인터페이스
trait Setter {
    fn set(&mut self, text: &str) -> Result<(), String>;
    fn type_name(&self) -> &'static str;
}

/// 특정 저장소에 묶인 setter
struct Binding<'a, T> {
    target: &'a mut T,
    parser: TextParser<T>,
}

impl<T> Setter for Binding<'_, T> {
    fn set(&mut self, text: &str) -> Result<(), String> {
        (self.parser)(&mut *self.target, text)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// 키 → 저장소 setter 매핑
///
/// 같은 키를 다시 바인딩하면 이전 바인딩을 덮어씁니다 (마지막 바인딩 우선).
#[derive(Default)]
pub struct AttributeContainer<'a> {
    setters: HashMap<String, Box<dyn Setter + 'a>>,
}

impl<'a> AttributeContainer<'a> {
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// 타입 자신의 [`TextValue`] 파서로 저장소를 바인딩합니다.
    pub fn bind<T>(&mut self, key: impl Into<String>, target: &'a mut T) -> &mut Self
    where
        T: TextValue + 'a,
    {
        self.bind_with(key, target, T::parse_text)
    }

    /// 명시적인 파서로 저장소를 바인딩합니다.
    pub fn bind_with<T>(
        &mut self,
        key: impl Into<String>,
        target: &'a mut T,
        parser: TextParser<T>,
    ) -> &mut Self
    where
        T: 'a,
    {
        let key = key.into();
        if self
            .setters
            .insert(key.clone(), Box::new(Binding { target, parser }))
            .is_some()
        {
            debug!("attribute '{}' rebound, previous binding replaced", key);
        }
        self
    }

    /// 키에 바인딩된 저장소를 텍스트로 설정합니다.
    ///
    /// # Errors
    ///
    /// - `UnknownAttributeKey`: 바인딩되지 않은 키. 아무것도 변경되지 않습니다.
    /// - `MalformedValue`: 파서가 텍스트를 거부한 경우. 저장소는 이전 값을 유지합니다.
    pub fn set_from_text(&mut self, key: &str, raw: &str) -> AppResult<()> {
        let setter = self
            .setters
            .get_mut(key)
            .ok_or_else(|| AppError::UnknownAttributeKey(key.to_string()))?;

        setter.set(raw).map_err(|reason| AppError::MalformedValue {
            key: key.to_string(),
            reason,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.setters.contains_key(key)
    }

    /// 바인딩된 키 목록 (정렬됨)
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.setters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// 키에 바인딩된 저장소의 타입 이름
    pub fn type_name_of(&self, key: &str) -> Option<&'static str> {
        self.setters.get(key).map(|setter| setter.type_name())
    }

    pub fn len(&self) -> usize {
        self.setters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl fmt::Debug for AttributeContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeContainer")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_set_bool() {
        for text in ["TRUE", "true", "TrUe"] {
            let mut flag = false;
            let mut container = AttributeContainer::new();
            container.bind("x", &mut flag);
            container.set_from_text("x", text).unwrap();
            drop(container);
            assert!(flag);
        }

        for text in ["false", "yes"] {
            let mut flag = true;
            let mut container = AttributeContainer::new();
            container.bind("x", &mut flag);
            container.set_from_text("x", text).unwrap();
            drop(container);
            assert!(!flag);
        }
    }

    #[test]
    fn test_unknown_key_mutates_nothing() {
        let mut width: u32 = 1920;
        let mut flag = false;

        let mut container = AttributeContainer::new();
        container.bind("windowWidth", &mut width);
        container.bind("useSteam", &mut flag);

        let result = container.set_from_text("unbound", "5");
        assert_eq!(
            result,
            Err(AppError::UnknownAttributeKey("unbound".to_string()))
        );
        drop(container);

        assert_eq!(width, 1920);
        assert!(!flag);
    }

    #[test]
    fn test_set_leaves_other_bindings_untouched() {
        let mut width: u32 = 1920;
        let mut height: u32 = 1080;

        let mut container = AttributeContainer::new();
        container.bind("windowWidth", &mut width);
        container.bind("windowHeight", &mut height);
        container.set_from_text("windowWidth", "2560").unwrap();
        drop(container);

        assert_eq!(width, 2560);
        assert_eq!(height, 1080);
    }

    #[test]
    fn test_malformed_value_keeps_prior() {
        let mut ticks: u32 = 60;

        let mut container = AttributeContainer::new();
        container.bind("ticksPerSecond", &mut ticks);
        let result = container.set_from_text("ticksPerSecond", "abc");

        match result {
            Err(AppError::MalformedValue { key, .. }) => assert_eq!(key, "ticksPerSecond"),
            other => panic!("Expected MalformedValue, got {:?}", other),
        }
        drop(container);
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_duplicate_bind_last_wins() {
        let mut first: u32 = 1;
        let mut second: u32 = 2;

        let mut container = AttributeContainer::new();
        container.bind("value", &mut first);
        container.bind("value", &mut second);
        assert_eq!(container.len(), 1);

        container.set_from_text("value", "99").unwrap();
        drop(container);

        assert_eq!(first, 1);
        assert_eq!(second, 99);
    }

    #[test]
    fn test_bind_with_custom_parser() {
        fn parse_percent(target: &mut f32, text: &str) -> Result<(), String> {
            let number = text
                .strip_suffix('%')
                .ok_or_else(|| format!("'{}' is not a percentage", text))?;
            *target = number.parse::<f32>().map_err(|e| e.to_string())? / 100.0;
            Ok(())
        }

        let mut volume: f32 = 1.0;
        let mut container = AttributeContainer::new();
        container.bind_with("masterVolume", &mut volume, parse_percent);

        container.set_from_text("masterVolume", "50%").unwrap();
        assert!(container.set_from_text("masterVolume", "0.5").is_err());
        drop(container);

        assert_eq!(volume, 0.5);
    }

    #[test]
    fn test_heterogeneous_types() {
        let mut name = String::from("player");
        let mut volume: f64 = 1.0;
        let mut lives: i8 = 3;

        let mut container = AttributeContainer::new();
        container
            .bind("playerName", &mut name)
            .bind("masterVolume", &mut volume)
            .bind("lives", &mut lives);

        assert_eq!(container.keys(), vec!["lives", "masterVolume", "playerName"]);
        assert_eq!(container.type_name_of("lives"), Some("i8"));
        assert_eq!(container.type_name_of("missing"), None);

        container.set_from_text("playerName", "ranger").unwrap();
        container.set_from_text("masterVolume", "0.75").unwrap();
        container.set_from_text("lives", "-1").unwrap();
        drop(container);

        assert_eq!(name, "ranger");
        assert_eq!(volume, 0.75);
        assert_eq!(lives, -1);
    }
}
