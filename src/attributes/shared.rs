//! # Thread-safe 설정 값
//!
//! 여러 스레드에서 읽고 쓰는 설정 값을 위한 셀과 컨테이너입니다.
//!
//! ## 구성 요소
//!
//! - [`SharedValue`]: 값 하나마다 독립된 `RwLock`. 전역 락은 없으며 경합은 키 단위입니다.
//! - [`ReadHandle`] / [`WriteHandle`]: 스코프에 묶인 락 핸들. 드롭될 때 (조기 반환,
//!   패닉 포함) 자동으로 해제되며, lock/unlock 호출은 외부에 노출하지 않습니다.
//! - [`SharedAttributeContainer`]: `&'a SharedValue<T>`를 바인딩하고 `&self`로 설정하므로
//!   여러 스레드가 동시에 사용할 수 있습니다.
//!
//! ## 락 규칙
//!
//! - 읽기 핸들은 같은 셀의 쓰기 핸들에 대해서만 대기합니다.
//! - 읽기 핸들끼리는 동시에 존재할 수 있습니다.
//! - 서로 다른 셀의 쓰기 핸들을 중첩해 잡는 경우 순서를 일관되게 유지하는 것은 호출자 책임입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let ticks = SharedValue::new(60u32);
//!
//! {
//!     let mut handle = ticks.write_handle();
//!     *handle = 30;
//! } // 여기서 해제
//!
//! assert_eq!(*ticks.read_handle(), 30);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use serde::{Serialize, Serializer};

use crate::attributes::container::TextParser;
use crate::attributes::parse::TextValue;
use crate::core::errors::{AppError, AppResult};

/// 독립된 읽기/쓰기 락으로 보호되는 값
#[derive(Default)]
pub struct SharedValue<T> {
    lock: RwLock<T>,
}

impl<T> SharedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            lock: RwLock::new(value),
        }
    }

    /// 공유 읽기 핸들을 얻습니다. 같은 셀의 쓰기 핸들이 있으면 대기합니다.
    pub fn read_handle(&self) -> ReadHandle<'_, T> {
        ReadHandle {
            guard: self.lock.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// 배타적 쓰기 핸들을 얻습니다. 이 셀의 모든 핸들이 해제될 때까지 대기합니다.
    pub fn write_handle(&self) -> WriteHandle<'_, T> {
        WriteHandle {
            guard: self.lock.write().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// 값을 교체합니다.
    pub fn set(&self, value: T) {
        *self.write_handle() = value;
    }

    pub fn into_inner(self) -> T {
        self.lock.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SharedValue<T> {
    /// 현재 값의 복사본을 반환합니다.
    pub fn get(&self) -> T {
        self.read_handle().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedValue").field(&*self.read_handle()).finish()
    }
}

impl<T: Serialize> Serialize for SharedValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read_handle().serialize(serializer)
    }
}

/// 스코프에 묶인 공유 읽기 핸들
pub struct ReadHandle<'a, T> {
    guard: RwLockReadGuard<'a, T>,
}

impl<T> Deref for ReadHandle<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

/// 스코프에 묶인 배타적 쓰기 핸들
pub struct WriteHandle<'a, T> {
    guard: RwLockWriteGuard<'a, T>,
}

impl<T> Deref for WriteHandle<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for WriteHandle<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

trait SharedSetter: Send + Sync {
    fn set(&self, text: &str) -> Result<(), String>;
}

struct SharedBinding<'a, T> {
    target: &'a SharedValue<T>,
    parser: TextParser<T>,
}

impl<T: Send + Sync> SharedSetter for SharedBinding<'_, T> {
    fn set(&self, text: &str) -> Result<(), String> {
        let mut handle = self.target.write_handle();
        (self.parser)(&mut *handle, text)
    }
}

/// 키 → [`SharedValue`] setter 매핑
///
/// 바인딩은 `&mut self`, 설정은 `&self`입니다. 바인딩이 끝난 컨테이너는
/// 스레드 간에 공유할 수 있습니다.
#[derive(Default)]
pub struct SharedAttributeContainer<'a> {
    setters: HashMap<String, Box<dyn SharedSetter + 'a>>,
}

impl<'a> SharedAttributeContainer<'a> {
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    pub fn bind<T>(&mut self, key: impl Into<String>, target: &'a SharedValue<T>) -> &mut Self
    where
        T: TextValue + Send + Sync + 'a,
    {
        self.bind_with(key, target, T::parse_text)
    }

    pub fn bind_with<T>(
        &mut self,
        key: impl Into<String>,
        target: &'a SharedValue<T>,
        parser: TextParser<T>,
    ) -> &mut Self
    where
        T: Send + Sync + 'a,
    {
        let key = key.into();
        if self
            .setters
            .insert(key.clone(), Box::new(SharedBinding { target, parser }))
            .is_some()
        {
            debug!("shared attribute '{}' rebound, previous binding replaced", key);
        }
        self
    }

    /// 키에 바인딩된 셀을 텍스트로 설정합니다. 해당 셀의 쓰기 락만 잡습니다.
    pub fn set_from_text(&self, key: &str, raw: &str) -> AppResult<()> {
        let setter = self
            .setters
            .get(key)
            .ok_or_else(|| AppError::UnknownAttributeKey(key.to_string()))?;

        setter.set(raw).map_err(|reason| AppError::MalformedValue {
            key: key.to_string(),
            reason,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.setters.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.setters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.setters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl fmt::Debug for SharedAttributeContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAttributeContainer")
            .field("keys", &self.keys())
            .finish()
    }
}
