//! # Core Framework Module
//!
//! 이름 기반 객체 생성을 위한 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 팩토리 레지스트리
//! - **Registry**: 이름 → 팩토리 매핑, 이름으로 인스턴스 생성
//! - **Fail-Fast 등록**: 중복 이름은 즉시 패닉
//! - **복구 가능한 조회**: 없는 이름은 `None`
//!
//! ### [`macros`] - 자동 등록
//! - **declare_registry!**: `inventory` 수집 + `Lazy` 접근자 선언
//! - **register_variant!**: 각 variant 모듈에서 스스로 등록
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 레지스트리/속성/설정 에러 정의
//! - **ErrorContext**: I/O 에러에 컨텍스트를 덧붙이는 확장 trait
//!
//! ## 핵심 설계 원칙
//!
//! ### 1. 초기화 순서 안전성
//! 전역 레지스트리는 직접 초기화된 static이 아니라 접근자 함수 뒤의 `Lazy`로만 노출됩니다.
//! 어떤 모듈이 먼저 접근하더라도 완전히 구성된 테이블만 보게 됩니다.
//!
//! ### 2. Fail-Fast vs 복구 가능
//! - 구조적 에러(중복 등록)는 시작 시점에 크게 실패
//! - 데이터 기반 에러(없는 이름)는 값으로 돌려주고 호출자가 결정
//!
//! ## 새로운 variant 추가
//! 1. 공통 trait 구현
//! 2. `Default` 구현 또는 생성 함수 작성
//! 3. 같은 파일에 `register_variant!` 한 줄 추가
//! 4. 다른 곳은 수정할 필요 없음

pub mod errors;
pub mod macros;
pub mod registry;

pub use errors::*;
pub use registry::*;
