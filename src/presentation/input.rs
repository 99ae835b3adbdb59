// 入力テキストの数値化

/// 先頭の数値部分だけを読む（"12abc" → 12, "7.5kg" → 7.5）
///
/// 数値で始まらない入力は NaN（非有限）として扱い、エラーにはしない。
pub fn coerce_number(text: &str) -> f64 {
    let s = text.trim_start();
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    if body.starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let end = float_prefix_len(s);
    if end == 0 {
        return f64::NAN;
    }
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// 位置入力の整数部分だけを読む（"7.5" → 7, "12番" → 12）
pub fn coerce_position(text: &str) -> f64 {
    let s = text.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return f64::NAN;
    }
    s[..sign_len + digits].parse::<f64>().unwrap_or(f64::NAN)
}

/// 符号・整数部・小数部・指数部からなる最長の接頭辞の長さ。数字がなければ0
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = usize::from(s.starts_with(['+', '-']));

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
