/// Formats a currency amount with `.` thousands grouping and a `€` suffix.
///
/// `5000` renders as `5.000€`, `-1234567` as `-1.234.567€`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}€", grouped)
    } else {
        format!("{}€", grouped)
    }
}
