/// 把 A 股代码转换为东方财富数据中心使用的 SECUCODE，例如 `300181` -> `300181.SZ`
///
/// 只接受 6 位数字，可带两位字母的市场后缀；其他输入返回 None，
/// 避免拼进数据中心的 filter 表达式
pub fn code_to_secucode(code: &str) -> Option<String> {
    let trimmed = code.trim();
    let (digits, suffix) = match trimmed.split_once('.') {
        Some((digits, suffix)) => (digits, Some(suffix)),
        None => (trimmed, None),
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(suffix) = suffix {
        if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        return Some(format!("{}.{}", digits, suffix.to_ascii_uppercase()));
    }
    let market = if digits.starts_with("92") || digits.starts_with('4') || digits.starts_with('8') {
        "BJ"
    } else if digits.starts_with('6') || digits.starts_with('9') {
        "SH"
    } else {
        "SZ"
    };
    Some(format!("{}.{}", digits, market))
}
