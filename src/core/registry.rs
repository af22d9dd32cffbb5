//! # Factory Registry - 이름 기반 인스턴스 생성 시스템
//!
//! 문자열 이름을 인자 없는 생성 함수(팩토리)에 대응시키고, 이름으로
//! 다형 객체를 생성하는 레지스트리입니다.
//!
//! ## 주요 구성 요소
//!
//! ### Registry
//! - **이름 유일성**: 같은 이름을 두 번 등록하면 즉시 실패 (Fail-Fast)
//! - **소유권 분리**: 레지스트리는 팩토리만 소유하며, 생성된 인스턴스는 호출자가 소유
//! - **Thread-safe**: `RwLock`으로 보호되어 전역 `Lazy` static에 둘 수 있음
//!
//! ### 자동 레지스트리 (Self-Registration)
//! - **inventory 기반**: 각 variant가 자기 모듈에서 등록 정보를 제출
//! - **지연 초기화**: 전역 레지스트리는 접근자 함수를 통해 첫 사용 시점에 구성
//! - **링크 순서 무관**: 중앙 목록 없이 모든 variant가 정확히 한 번 등록됨
//!
//! 자동 등록 매크로는 [`crate::declare_registry`]와 [`crate::register_variant`]를 참고하세요.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일/링크 타임
//!    ├─ register_variant! → Registration 레코드 제출
//!    └─ inventory::collect! → 레코드 수집
//!
//! 2. 첫 접근 시 (Lazy)
//!    ├─ inventory::iter로 모든 레코드 순회
//!    ├─ Registry::register 호출 (중복 시 패닉)
//!    └─ 이후 O(1) 조회
//!
//! 3. 런타임
//!    └─ create("zombie") → Some(Box<dyn Entity>) / None
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let shapes: Registry<dyn Shape> = Registry::new();
//! shapes.register("circle", || Box::new(Circle::default()));
//!
//! let circle = shapes.create("circle").expect("registered above");
//! assert!(shapes.create("hexagon").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::core::errors::{AppError, AppResult};

/// 인자 없이 `Box<B>`를 생성하는 팩토리 함수
///
/// `create`가 락을 놓은 뒤 호출할 수 있도록 `Arc`로 공유됩니다.
pub type Factory<B> = Arc<dyn Fn() -> Box<B> + Send + Sync>;

/// 이름 → 팩토리 매핑 테이블
///
/// `B`는 보통 `dyn Trait` 형태의 공통 다형 타입입니다.
/// 등록된 항목은 레지스트리의 수명 동안 제거되지 않습니다.
pub struct Registry<B: ?Sized> {
    factories: RwLock<HashMap<String, Factory<B>>>,
}

impl<B: ?Sized> Registry<B> {
    /// 비어 있는 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// 팩토리를 등록하고 현재까지의 등록 수를 반환합니다.
    ///
    /// # Panics
    ///
    /// `name`이 이미 등록되어 있으면 패닉합니다. 중복 등록은 시작 시점의
    /// 구조적 오류이므로 조용히 덮어쓰지 않고 즉시 드러냅니다.
    pub fn register<F>(&self, name: &str, factory: F) -> usize
    where
        F: Fn() -> Box<B> + Send + Sync + 'static,
    {
        match self.try_register(name, factory) {
            Ok(count) => count,
            Err(e) => panic!("{}", e),
        }
    }

    /// 팩토리를 등록합니다. 중복 이름이면 `DuplicateRegistration`을 반환하며
    /// 기존 등록은 그대로 유지됩니다.
    pub fn try_register<F>(&self, name: &str, factory: F) -> AppResult<usize>
    where
        F: Fn() -> Box<B> + Send + Sync + 'static,
    {
        let mut factories = self.factories.write().unwrap_or_else(PoisonError::into_inner);

        if factories.contains_key(name) {
            return Err(AppError::DuplicateRegistration(name.to_string()));
        }

        factories.insert(name.to_string(), Arc::new(factory));
        debug!("registered factory '{}' ({} total)", name, factories.len());

        Ok(factories.len())
    }

    /// 이름으로 새 인스턴스를 생성합니다.
    ///
    /// 등록되지 않은 이름은 `None`을 반환합니다. 잘못된 데이터 파일처럼
    /// 호출자가 처리할 수 있는 상황이므로 패닉하거나 기본값을 만들지 않습니다.
    ///
    /// 팩토리는 읽기 락을 해제한 뒤 호출되므로 같은 레지스트리에 다시 접근해도 됩니다.
    pub fn create(&self, name: &str) -> Option<Box<B>> {
        let factory = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()?;
        Some(factory())
    }

    /// `create`와 같지만 없는 이름을 `UnknownRegistryName` 에러로 돌려줍니다.
    pub fn create_or_err(&self, name: &str) -> AppResult<Box<B>> {
        self.create(name)
            .ok_or_else(|| AppError::UnknownRegistryName(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// 등록된 이름 목록 (정렬됨)
    pub fn names(&self) -> Vec<String> {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: ?Sized> Default for Registry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized> fmt::Debug for Registry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}
