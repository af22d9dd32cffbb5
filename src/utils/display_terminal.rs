//! 터미널 출력 포맷팅 유틸리티
//!
//! 바이너리 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 출력 문자열을 만드는 `format_*` 함수와 이를 그대로 출력하는 `print_*` 함수로 나뉩니다.

/// 박스 내부 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다.
///
/// 제목은 중앙 정렬되며 너비를 넘으면 자르지 않고 그대로 둡니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = CONTENT_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Loading settings
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
///
/// ```text
/// ✓ Step 1: Settings applied (4 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 트리 형태의 하위 항목 문자열
pub fn format_sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", format_sub_task(name, status));
}

/// 최종 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                🎉 STARTUP COMPLETE               ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Registered roles: 3
///    ⚙️ Settings applied: 4
///    🚀 Entities spawned: 5
/// ```
pub fn print_final_summary(roles: usize, settings: usize, spawned: usize) {
    println!();
    print_boxed_title("🎉 STARTUP COMPLETE");
    println!("   📦 Registered roles: {}", roles);
    println!("   ⚙️ Settings applied: {}", settings);
    println!("   🚀 Entities spawned: {}", spawned);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let boxed = format_boxed_title("Hi");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1], format!("║{}Hi{}║", " ".repeat(24), " ".repeat(24)));
    }

    #[test]
    fn test_sub_task_format() {
        assert_eq!(format_sub_task("zombie", "✓"), "   ├─ zombie: ✓");
    }
}
