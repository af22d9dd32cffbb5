//! # Attributes Module
//!
//! 문자열 키로 타입이 다른 저장소들에 텍스트 값을 적용하는 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`parse`] - 타입별 텍스트 파서 ([`TextValue`])
//! - [`container`] - 단일 스레드용 [`AttributeContainer`] (`&'a mut T` 바인딩)
//! - [`shared`] - thread-safe [`SharedValue`] 셀과 [`SharedAttributeContainer`]
//! - [`macros`] - 필드 선언 한 번으로 구조체와 바인딩 테이블을 만드는 매크로
//!
//! ## 설계 원칙
//!
//! ### 1. 저장소는 호출자 소유
//! 컨테이너는 참조와 파서만 보관합니다. 저장소가 컨테이너보다 먼저 사라지는 코드는
//! 컴파일되지 않습니다.
//!
//! ### 2. 열린 확장
//! 새 타입은 [`TextValue`]를 구현하거나 `bind_with`에 파서를 넘기면 되고,
//! 컨테이너 코드는 바뀌지 않습니다.
//!
//! ### 3. 마지막 바인딩 우선
//! 같은 키를 다시 바인딩하면 덮어씁니다. 레지스트리의 중복 등록 실패와는
//! 의도적으로 다른 규칙입니다.

pub mod container;
pub mod macros;
pub mod parse;
pub mod shared;

pub use container::{AttributeContainer, TextParser};
pub use parse::{parse_bool, TextValue};
pub use shared::{ReadHandle, SharedAttributeContainer, SharedValue, WriteHandle};
