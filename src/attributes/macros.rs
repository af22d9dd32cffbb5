//! # 설정 필드 선언 매크로
//!
//! 설정 필드의 이름, 타입, 기본값, 텍스트 키를 한 곳에서 한 번만 선언하고,
//! 그 선언으로 구조체 정의와 키 → 저장소 바인딩 테이블을 함께 만듭니다.
//!
//! ```rust,ignore
//! define_config! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct WindowConfig {
//!         pub width: u32 = 1920 => "windowWidth",
//!         pub height: u32 = 1080 => "windowHeight",
//!     }
//! }
//!
//! let mut config = WindowConfig::default();
//! config.attributes().set_from_text("windowWidth", "2560")?;
//! assert_eq!(WindowConfig::KEYS, &["windowWidth", "windowHeight"]);
//! ```

/// 일반 설정 구조체를 선언합니다.
///
/// 생성되는 항목:
/// - 구조체와 `Default` 구현 (선언된 기본값 사용)
/// - `KEYS`: 선언 순서의 텍스트 키 목록
/// - `attributes(&mut self) -> AttributeContainer<'_>`: 모든 필드를 바인딩한 컨테이너
#[macro_export]
macro_rules! define_config {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty = $default:expr => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $name {
            /// 선언 순서의 텍스트 키 목록
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// 모든 필드를 텍스트 키로 바인딩한 컨테이너를 만듭니다.
            pub fn attributes(&mut self) -> $crate::attributes::AttributeContainer<'_> {
                let mut container = $crate::attributes::AttributeContainer::new();
                $( container.bind($key, &mut self.$field); )*
                container
            }
        }
    };
}

/// 필드마다 [`SharedValue`](crate::attributes::SharedValue) 셀을 갖는
/// thread-safe 설정 구조체를 선언합니다.
///
/// 생성되는 항목은 [`define_config!`](crate::define_config)와 같지만
/// `attributes(&self) -> SharedAttributeContainer<'_>`를 제공합니다.
#[macro_export]
macro_rules! define_shared_config {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty = $default:expr => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $crate::attributes::SharedValue<$ty>,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $crate::attributes::SharedValue::new($default), )*
                }
            }
        }

        impl $name {
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            pub fn attributes(&self) -> $crate::attributes::SharedAttributeContainer<'_> {
                let mut container = $crate::attributes::SharedAttributeContainer::new();
                $( container.bind($key, &self.$field); )*
                container
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::define_config! {
        #[derive(Debug, Clone, PartialEq)]
        struct AudioConfig {
            muted: bool = false => "muted",
            volume: f32 = 0.8 => "volume",
            device: String = String::from("default") => "device",
        }
    }

    crate::define_shared_config! {
        struct SharedAudioConfig {
            muted: bool = true => "muted",
            volume: f32 = 0.5 => "volume",
        }
    }

    #[test]
    fn test_define_config_defaults_and_keys() {
        let config = AudioConfig::default();
        assert!(!config.muted);
        assert_eq!(config.volume, 0.8);
        assert_eq!(config.device, "default");
        assert_eq!(AudioConfig::KEYS, &["muted", "volume", "device"]);
    }

    #[test]
    fn test_define_config_binds_every_field() {
        let mut config = AudioConfig::default();
        {
            let mut attributes = config.attributes();
            assert_eq!(attributes.len(), AudioConfig::KEYS.len());
            attributes.set_from_text("muted", "TRUE").unwrap();
            attributes.set_from_text("device", "hdmi").unwrap();
        }
        assert!(config.muted);
        assert_eq!(config.device, "hdmi");
        assert_eq!(config.volume, 0.8);
    }

    #[test]
    fn test_define_shared_config() {
        let config = SharedAudioConfig::default();
        assert!(config.muted.get());

        let attributes = config.attributes();
        attributes.set_from_text("volume", "0.25").unwrap();
        attributes.set_from_text("muted", "no").unwrap();

        assert_eq!(config.volume.get(), 0.25);
        assert!(!config.muted.get());
        assert_eq!(SharedAudioConfig::KEYS, &["muted", "volume"]);
    }
}
