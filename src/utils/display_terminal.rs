//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용하는 터미널 출력 함수들입니다.
//! 박스 형태의 제목, 진행 단계, 하위 작업 상태를 출력합니다.

const TITLE_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             Gracefully Ugly Backend              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(TITLE_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = TITLE_WIDTH
    )
}

/// 진행 단계 시작을 표시합니다 (`→ Step 1: Initializing storage backend`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 작업 상태 (`   ├─ MongoDB: gracefully_ugly_dev`)
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let lines: Vec<String> = boxed_title("abcd").lines().map(str::to_string).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].chars().count(), TITLE_WIDTH + 2);
        assert_eq!(lines[1], format!("║{}abcd{}║", " ".repeat(23), " ".repeat(23)));
    }
}
