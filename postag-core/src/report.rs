//! Linhas do relatório impresso pelo experimento.
//!
//! Os números seguem a notação "geral" com precisão em algarismos
//! significativos: zeros finais removidos, pelo menos uma casa decimal em
//! notação fixa (`1.0`) e notação científica quando o expoente é menor que -4
//! ou alcança a precisão (`1.235e+04`).

/// Algarismos significativos das acurácias.
pub const ACCURACY_DIGITS: usize = 16;

/// Algarismos significativos das variações percentuais.
pub const CHANGE_DIGITS: usize = 4;

/// `value` com `precision` algarismos significativos.
///
/// # Exemplo
/// ```rust
/// use postag_core::report::format_significant;
///
/// assert_eq!(format_significant(-12.345678, 4), "-12.35");
/// assert_eq!(format_significant(1.0, 16), "1.0");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value.abs());
    layout(value.is_sign_negative(), &sci, precision as i32)
}

/// Representação mais curta que identifica `value` unicamente.
pub fn format_shortest(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let sci = format!("{:e}", value.abs());
    layout(value.is_sign_negative(), &sci, 16)
}

/// `"<rótulo>: "` alinhado em 10 colunas, seguido do valor.
pub fn labeled(label: &str, value: &str) -> String {
    format!("{:<9} {}", format!("{label}:"), value)
}

pub fn accuracy_line(label: &str, accuracy: f64) -> String {
    labeled(label, &format_significant(accuracy, ACCURACY_DIGITS))
}

pub fn change_line(percent: f64) -> String {
    let value = format!("{:<3}%", format_significant(percent, CHANGE_DIGITS));
    labeled("change", &value)
}

/// Linha de um fold, com índice começando em 1.
pub fn fold_line(index: usize, accuracy: f64) -> String {
    format!("{:2}: {}", index, format_shortest(accuracy))
}

pub fn ambiguity_line(rate: f64) -> String {
    format!("ambiguous_avg: {}", format_shortest(rate))
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

/// Converte a saída de `{:e}` (`d.ddde±x`) na notação geral.
fn layout(negative: bool, sci: &str, threshold: i32) -> String {
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = match digits.trim_end_matches('0') {
        "" => "0",
        d => d,
    };

    let body = if (-4..threshold).contains(&exp) {
        fixed(digits, exp)
    } else {
        scientific(digits, exp)
    };
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

fn fixed(digits: &str, exp: i32) -> String {
    if exp < 0 {
        return format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits);
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn scientific(digits: &str, exp: i32) -> String {
    let (head, tail) = digits.split_at(1);
    let sign = if exp < 0 { '-' } else { '+' };
    if tail.is_empty() {
        format!("{head}e{sign}{:02}", exp.abs())
    } else {
        format!("{head}.{tail}e{sign}{:02}", exp.abs())
    }
}
