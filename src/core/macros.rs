//! # Self-Registration Macros
//!
//! 각 variant가 자기 모듈 안에서 스스로를 전역 레지스트리에 등록하도록 돕는 매크로입니다.
//!
//! - [`declare_registry!`](crate::declare_registry): 등록 레코드 타입, `inventory` 수집 설정,
//!   지연 초기화 접근자 함수를 한 번에 선언합니다.
//! - [`register_variant!`](crate::register_variant): variant 정의 옆에 두어 등록 레코드를
//!   제출합니다. 중앙 목록을 관리할 필요가 없고, 링크 순서와 무관하게 정확히 한 번 등록됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! pub trait Entity: Any + Send { /* ... */ }
//!
//! factory_config::declare_registry!(pub EntityRegistration, Entity, entities);
//!
//! // zombie.rs
//! #[derive(Default)]
//! pub struct Zombie { /* ... */ }
//! impl Entity for Zombie { /* ... */ }
//! factory_config::register_variant!(EntityRegistration, "zombie", Zombie);
//!
//! // 어디서든
//! let zombie = entities().create("zombie");
//! ```

/// 등록 레코드 타입과 전역 레지스트리 접근자를 선언합니다.
///
/// `declare_registry!(pub FooRegistration, FooTrait, foos)`는 다음을 생성합니다.
///
/// - `pub struct FooRegistration { name, constructor }` 와 `inventory::collect!`
/// - `FooRegistration::new(name, fn)` / `FooRegistration::of::<T>(name)` const 생성자
/// - `pub fn foos() -> &'static Registry<dyn FooTrait>`
///
/// 접근자는 `Lazy` static을 감싸므로 어떤 모듈이 먼저 호출하더라도 완전히
/// 구성된 레지스트리만 관찰됩니다. 제출된 레코드 중 이름이 겹치면 첫 접근 시 패닉합니다.
#[macro_export]
macro_rules! declare_registry {
    (
        $(#[$meta:meta])*
        $vis:vis $registration:ident, $base:path, $accessor:ident
    ) => {
        $(#[$meta])*
        $vis struct $registration {
            /// 레지스트리에서 사용할 고유 이름
            pub name: &'static str,
            /// 인스턴스 생성 함수
            pub constructor: fn() -> ::std::boxed::Box<dyn $base>,
        }

        impl $registration {
            pub const fn new(
                name: &'static str,
                constructor: fn() -> ::std::boxed::Box<dyn $base>,
            ) -> Self {
                Self { name, constructor }
            }

            /// `Default`로 생성되는 variant의 등록 레코드를 만듭니다.
            pub const fn of<T>(name: &'static str) -> Self
            where
                T: $base + ::core::default::Default + 'static,
            {
                fn construct<T>() -> ::std::boxed::Box<dyn $base>
                where
                    T: $base + ::core::default::Default + 'static,
                {
                    ::std::boxed::Box::new(T::default())
                }

                Self {
                    name,
                    constructor: construct::<T>,
                }
            }
        }

        $crate::__private::inventory::collect!($registration);

        $vis fn $accessor() -> &'static $crate::core::registry::Registry<dyn $base> {
            static REGISTRY: $crate::__private::once_cell::sync::Lazy<
                $crate::core::registry::Registry<dyn $base>,
            > = $crate::__private::once_cell::sync::Lazy::new(|| {
                let registry = $crate::core::registry::Registry::new();
                for registration in $crate::__private::inventory::iter::<$registration> {
                    registry.register(registration.name, registration.constructor);
                }
                $crate::__private::log::debug!(
                    "{} registry initialized with {} variants",
                    stringify!($registration),
                    registry.len()
                );
                registry
            });

            &REGISTRY
        }
    };
}

/// variant를 [`declare_registry!`](crate::declare_registry)로 선언된 레지스트리에 제출합니다.
///
/// ```rust,ignore
/// // Default 구현으로 생성
/// register_variant!(EntityRegistration, "zombie", Zombie);
///
/// // 별도 생성 함수 사용
/// register_variant!(EntityRegistration, "boss", constructor = build_boss);
/// ```
#[macro_export]
macro_rules! register_variant {
    ($registration:ident, $name:expr, constructor = $constructor:expr) => {
        $crate::__private::inventory::submit! {
            $registration::new($name, $constructor)
        }
    };
    ($registration:ident, $name:expr, $variant:ty) => {
        $crate::__private::inventory::submit! {
            $registration::of::<$variant>($name)
        }
    };
}

#[cfg(test)]
mod tests {
    trait Widget {
        fn label(&self) -> &'static str;
    }

    #[derive(Default)]
    struct Button;

    #[derive(Default)]
    struct Slider;

    impl Widget for Button {
        fn label(&self) -> &'static str {
            "button"
        }
    }

    impl Widget for Slider {
        fn label(&self) -> &'static str {
            "slider"
        }
    }

    fn build_slider() -> Box<dyn Widget> {
        Box::new(Slider)
    }

    crate::declare_registry!(WidgetRegistration, Widget, widgets);
    crate::register_variant!(WidgetRegistration, "button", Button);
    crate::register_variant!(WidgetRegistration, "slider", constructor = build_slider);

    // 서로 다른 두 모듈이 같은 이름을 제출한 상황
    crate::declare_registry!(ClashRegistration, Widget, clashing_widgets);
    crate::register_variant!(ClashRegistration, "button", Button);
    crate::register_variant!(ClashRegistration, "button", Slider);

    // 아무 variant도 제출하지 않은 레지스트리
    crate::declare_registry!(EmptyRegistration, Widget, empty_widgets);

    #[test]
    fn test_accessor_collects_every_submission() {
        let registry = widgets();
        assert_eq!(registry.names(), vec!["button", "slider"]);
        assert_eq!(registry.create("button").unwrap().label(), "button");
        assert_eq!(registry.create("slider").unwrap().label(), "slider");
    }

    #[test]
    #[should_panic(expected = "Duplicate registration")]
    fn test_accessor_panics_on_duplicate_submission() {
        clashing_widgets();
    }

    #[test]
    fn test_lookup_through_accessor_without_submissions() {
        let registry = empty_widgets();
        assert!(registry.is_empty());
        assert!(registry.create("button").is_none());
        assert!(!registry.contains("button"));
        assert!(std::ptr::eq(registry, empty_widgets()));
    }
}
