//! Колонки таблицы кампаний: тип значения, строковое представление и компаратор.
//!
//! Тип колонки фиксируется один раз в определении поля, поэтому при
//! сортировке не нужно разбирать тип значения на каждом сравнении.

use super::dto::CampaignRecord;
use crate::shared::error::DashboardError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Поле записи кампании (в порядке объявления в [`CampaignRecord`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignField {
    Id,
    Date,
    Campaign,
    Channel,
    Impressions,
    Clicks,
    Conversions,
    Revenue,
    Ctr,
    Cpa,
}

/// Тип значения колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Number,
    Text,
    Date,
}

/// Значение ячейки с тегом типа
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    Number(f64),
    Text(&'a str),
    Date(&'a str),
}

/// Сравнение двух значений одной колонки (естественный порядок, по возрастанию)
type ValueComparator = fn(ColumnValue<'_>, ColumnValue<'_>) -> Ordering;

impl CampaignField {
    pub const ALL: [CampaignField; 10] = [
        CampaignField::Id,
        CampaignField::Date,
        CampaignField::Campaign,
        CampaignField::Channel,
        CampaignField::Impressions,
        CampaignField::Clicks,
        CampaignField::Conversions,
        CampaignField::Revenue,
        CampaignField::Ctr,
        CampaignField::Cpa,
    ];

    /// Имя поля в JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignField::Id => "id",
            CampaignField::Date => "date",
            CampaignField::Campaign => "campaign",
            CampaignField::Channel => "channel",
            CampaignField::Impressions => "impressions",
            CampaignField::Clicks => "clicks",
            CampaignField::Conversions => "conversions",
            CampaignField::Revenue => "revenue",
            CampaignField::Ctr => "ctr",
            CampaignField::Cpa => "cpa",
        }
    }

    /// Заголовок колонки в таблице
    pub fn label(&self) -> &'static str {
        match self {
            CampaignField::Id => "ID",
            CampaignField::Date => "Date",
            CampaignField::Campaign => "Campaign",
            CampaignField::Channel => "Channel",
            CampaignField::Impressions => "Impressions",
            CampaignField::Clicks => "Clicks",
            CampaignField::Conversions => "Conversions",
            CampaignField::Revenue => "Revenue",
            CampaignField::Ctr => "CTR",
            CampaignField::Cpa => "CPA",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            CampaignField::Id | CampaignField::Campaign | CampaignField::Channel => {
                ColumnKind::Text
            }
            CampaignField::Date => ColumnKind::Date,
            CampaignField::Impressions
            | CampaignField::Clicks
            | CampaignField::Conversions
            | CampaignField::Revenue
            | CampaignField::Ctr
            | CampaignField::Cpa => ColumnKind::Number,
        }
    }

    /// Можно ли сортировать по колонке кликом в заголовке.
    /// Канал сортировке не подлежит, id и CPA в таблице не выводятся.
    pub fn is_sortable(&self) -> bool {
        !matches!(
            self,
            CampaignField::Id | CampaignField::Channel | CampaignField::Cpa
        )
    }

    pub fn value<'a>(&self, record: &'a CampaignRecord) -> ColumnValue<'a> {
        match self {
            CampaignField::Id => ColumnValue::Text(&record.id),
            CampaignField::Date => ColumnValue::Date(&record.date),
            CampaignField::Campaign => ColumnValue::Text(&record.campaign),
            CampaignField::Channel => ColumnValue::Text(&record.channel),
            CampaignField::Impressions => ColumnValue::Number(record.impressions as f64),
            CampaignField::Clicks => ColumnValue::Number(record.clicks as f64),
            CampaignField::Conversions => ColumnValue::Number(record.conversions as f64),
            CampaignField::Revenue => ColumnValue::Number(record.revenue),
            CampaignField::Ctr => ColumnValue::Number(record.ctr),
            CampaignField::Cpa => ColumnValue::Number(record.cpa),
        }
    }

    /// Компаратор колонки: правило сравнения выбирается по [`ColumnKind`]
    /// один раз, на каждом сравнении остаётся только извлечение значения.
    pub fn comparator(&self) -> impl Fn(&CampaignRecord, &CampaignRecord) -> Ordering {
        let field = *self;
        let compare_values: ValueComparator = match self.kind() {
            ColumnKind::Number => compare_number_values,
            ColumnKind::Text => compare_text_values,
            ColumnKind::Date => compare_date_values,
        };
        move |a: &CampaignRecord, b: &CampaignRecord| {
            compare_values(field.value(a), field.value(b))
        }
    }
}

impl fmt::Display for CampaignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownField(s.to_string()))
    }
}

impl<'a> ColumnValue<'a> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ColumnValue::Number(n) => Some(*n),
            ColumnValue::Text(_) | ColumnValue::Date(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            ColumnValue::Text(s) | ColumnValue::Date(s) => Some(s),
            ColumnValue::Number(_) => None,
        }
    }
}

/// Строковое представление по умолчанию, без локального форматирования:
/// числа в кратчайшей десятичной записи, даты как исходная ISO-строка.
impl fmt::Display for ColumnValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Number(n) => write!(f, "{}", n),
            ColumnValue::Text(s) | ColumnValue::Date(s) => f.write_str(s),
        }
    }
}

/// Полный порядок над f64: NaN не ломает транзитивность сортировки
fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn compare_number_values(a: ColumnValue<'_>, b: ColumnValue<'_>) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => compare_numbers(a, b),
        _ => Ordering::Equal,
    }
}

fn compare_text_values(a: ColumnValue<'_>, b: ColumnValue<'_>) -> Ordering {
    match (a.as_text(), b.as_text()) {
        (Some(a), Some(b)) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}

fn compare_date_values(a: ColumnValue<'_>, b: ColumnValue<'_>) -> Ordering {
    match (a.as_text(), b.as_text()) {
        (Some(a), Some(b)) => compare_dates(a, b),
        _ => Ordering::Equal,
    }
}

/// Даты сравниваются как календарные; если хотя бы одна не разбирается,
/// сравниваются строки.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_calendar_date(a), parse_calendar_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => locale_compare(a, b),
    }
}

fn collation_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Первичный уровень: базовые буквы без диакритики, в нижнем регистре
fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (collation_class(c), c))
}

/// Вторичный уровень: те же буквы вместе с диакритикой,
/// знак после буквы делает строку "старше" голой буквы
fn secondary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd().flat_map(char::to_lowercase).map(|c| {
        if is_combining_mark(c) {
            (3, c)
        } else {
            (collation_class(c), c)
        }
    })
}

/// Сравнение строк без учёта регистра в "словарном" порядке.
///
/// Сначала сравниваются базовые буквы (`É` стоит рядом с `e`, а не после `z`),
/// пробелы и пунктуация раньше цифр, цифры раньше букв. Диакритика решает
/// только при равных базовых буквах: `eclair` < `éclair`. Регистр не
/// учитывается совсем.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
}

/// Разбирает дату записи или фильтра в календарную дату.
///
/// Принимает `YYYY-MM-DD`, RFC 3339 и `YYYY-MM-DDTHH:MM:SS`; всё прочее — `None`.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
