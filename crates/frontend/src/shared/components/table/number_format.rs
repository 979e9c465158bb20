//! Утилиты форматирования чисел (en-US: запятая между тысячами, точка в дроби)

use contracts::shared::indicators::{MetricData, ValueFormat};

/// Вставляет запятые каждые 3 цифры с конца целой части
fn group_thousands(integer_part: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Форматирует число с разделителем тысяч и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    match formatted.split_once('.') {
        Some((integer_part, decimal_part)) => {
            format!("{}.{}", group_thousands(integer_part), decimal_part)
        }
        None => group_thousands(&formatted),
    }
}

/// Целое число с разделителем тысяч: `45230` → `45,230`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Число с разделителем тысяч и не более чем тремя знаками дроби,
/// лишние нули отбрасываются: `8492` → `8,492`, `1234.5` → `1,234.5`
pub fn format_number(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 3);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Доллары без центов: `14650` → `$14,650`, `-1200` → `-$1,200`
pub fn format_currency(value: f64) -> String {
    let amount = format_number_int(value.abs());
    if value.round() < 0.0 {
        format!("-${}", amount)
    } else {
        format!("${}", amount)
    }
}

/// Процент с двумя знаками: `4.02` → `4.02%`, `5` → `5.00%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Основное значение карточки метрики
pub fn format_metric_value(metric: &MetricData) -> String {
    match metric.value_format() {
        ValueFormat::Currency => format_currency(metric.value),
        ValueFormat::Percent => format!("{}%", metric.value),
        ValueFormat::Integer => format_number(metric.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_campaign_overview::mock::mock_metrics;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.891, 2), "-1,234,567.89");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(45230.0), "45,230");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_number_int(620.0), "620");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8492.0), "8,492");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(14650.0), "$14,650");
        assert_eq!(format_currency(142850.0), "$142,850");
        assert_eq!(format_currency(-1200.0), "-$1,200");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4.02), "4.02%");
        assert_eq!(format_percent(5.0), "5.00%");
    }

    #[test]
    fn test_format_metric_value() {
        let metrics = mock_metrics();
        let values: Vec<String> = metrics.iter().map(format_metric_value).collect();
        assert_eq!(values, vec!["$142,850", "8,492", "347", "15.8%"]);
    }
}
