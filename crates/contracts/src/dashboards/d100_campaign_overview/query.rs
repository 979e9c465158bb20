//! Движок запросов таблицы кампаний: поиск → период → каналы → сортировка → страница.
//!
//! Чистая функция от (записи, состояние запроса). Состояние между вызовами
//! не хранится; кэширование результата — забота вызывающего слоя.

use super::dto::CampaignRecord;
use super::field::{parse_calendar_date, CampaignField};
use super::pagination::{page_bounds, page_count, showing_range};
use super::sort::{sort_rows, SortState};
use crate::shared::settings::TableSettings;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Период фильтра; отсутствующая граница — без ограничения с этой стороны.
/// Обе границы включительные.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Собирает период из значений полей ввода (`yyyy-mm-dd`).
    /// Пустое или нераспознанное значение снимает границу.
    pub fn from_inputs(from: &str, to: &str) -> Self {
        let parse = |value: &str| {
            let parsed = parse_calendar_date(value);
            if parsed.is_none() && !value.trim().is_empty() {
                log::debug!("ignoring malformed date bound {:?}", value);
            }
            parsed
        };
        Self {
            from: parse(from),
            to: parse(to),
        }
    }

    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Попадает ли дата записи в период. Нераспознанная дата не попадает
    /// ни в какой ограниченный период.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if !self.is_set() {
            return true;
        }
        let Some(date) = date else { return false };
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        if self.to.is_some_and(|to| date > to) {
            return false;
        }
        true
    }

    /// Подпись кнопки выбора периода
    pub fn label(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                format!("{} - {}", from.format("%b %d"), to.format("%b %d, %Y"))
            }
            (Some(from), None) => from.format("%b %d, %Y").to_string(),
            (None, Some(to)) => format!("- {}", to.format("%b %d, %Y")),
            (None, None) => "Pick a date range".to_string(),
        }
    }
}

/// Параметры поиска, фильтров, сортировки и страницы, заданные пользователем
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub search_term: String,
    pub date_range: DateRange,
    /// Пустое множество — фильтр по каналам не применяется
    pub selected_channels: HashSet<String>,
    pub sort: SortState,
    /// Номер страницы, с 1
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_settings(&TableSettings::default())
    }
}

impl QueryState {
    pub fn with_settings(settings: &TableSettings) -> Self {
        Self {
            search_term: String::new(),
            date_range: DateRange::default(),
            selected_channels: HashSet::new(),
            sort: SortState::default(),
            current_page: 1,
            items_per_page: settings.items_per_page,
        }
    }

    /// Индикатор на кнопке фильтров: задан период или выбран хотя бы один канал.
    /// Строка поиска фильтром здесь не считается.
    pub fn has_active_filters(&self) -> bool {
        self.date_range.is_set() || !self.selected_channels.is_empty()
    }

    /// Число активных фильтров для бейджа (период считается за один)
    pub fn active_filters_count(&self) -> usize {
        usize::from(self.date_range.is_set()) + self.selected_channels.len()
    }

    /// Сбрасывает период и каналы; поиск и сортировка остаются
    pub fn reset_filters(&mut self) {
        self.date_range = DateRange::default();
        self.selected_channels.clear();
        self.current_page = 1;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
        self.current_page = 1;
    }

    /// Добавляет канал в фильтр или убирает его оттуда
    pub fn toggle_channel(&mut self, channel: &str) {
        if !self.selected_channels.remove(channel) {
            self.selected_channels.insert(channel.to_string());
        }
        self.current_page = 1;
    }

    pub fn toggle_sort(&mut self, field: CampaignField) {
        self.sort = self.sort.toggle(field);
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }
}

/// Результат запроса: видимая страница и метаданные пагинации
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub rows: Vec<CampaignRecord>,
    /// Число строк после фильтров (до пагинации)
    pub total_count: usize,
    /// `ceil(total_count / items_per_page)`, 0 для пустого результата
    pub page_count: usize,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Границы подписи "Showing X to Y of N results" для страницы `page`
    pub fn showing_range(&self, page: usize, items_per_page: usize) -> Option<(usize, usize)> {
        showing_range(self.total_count, page, items_per_page)
    }
}

/// Совпадает ли запись со строкой поиска хотя бы в одном поле
/// (регистр не учитывается, пустая строка совпадает со всем)
pub fn matches_search(record: &CampaignRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    CampaignField::ALL.iter().any(|field| {
        field
            .value(record)
            .to_string()
            .to_lowercase()
            .contains(&needle)
    })
}

pub fn matches_channels(record: &CampaignRecord, channels: &HashSet<String>) -> bool {
    channels.is_empty() || channels.contains(&record.channel)
}

/// Фильтры и сортировка без пагинации: полная последовательность строк,
/// из которой нарезаются страницы.
pub fn filter_and_sort<'a>(
    records: &'a [CampaignRecord],
    state: &QueryState,
) -> Vec<&'a CampaignRecord> {
    let mut rows: Vec<&CampaignRecord> = records
        .iter()
        .filter(|record| matches_search(record, &state.search_term))
        .collect();

    if state.date_range.is_set() {
        rows.retain(|record| {
            state
                .date_range
                .contains(parse_calendar_date(&record.date))
        });
    }

    if !state.selected_channels.is_empty() {
        rows.retain(|record| matches_channels(record, &state.selected_channels));
    }

    if state.sort.is_active() {
        sort_rows(&mut rows, &state.sort);
    }

    rows
}

/// Выполняет запрос таблицы кампаний.
pub fn query(records: &[CampaignRecord], state: &QueryState) -> QueryResult {
    let filtered = filter_and_sort(records, state);
    let total_count = filtered.len();
    let page_count = page_count(total_count, state.items_per_page);

    let rows = match page_bounds(total_count, state.current_page, state.items_per_page) {
        Some(range) => filtered[range].iter().map(|r| (*r).clone()).collect(),
        None => Vec::new(),
    };

    log::trace!(
        "campaign query: {} of {} records matched, page {}/{} has {} rows",
        total_count,
        records.len(),
        state.current_page,
        page_count,
        rows.len()
    );

    QueryResult {
        rows,
        total_count,
        page_count,
    }
}

/// Уникальные каналы всего набора (в порядке первого появления).
/// Текущие фильтры на список не влияют.
pub fn available_channels(records: &[CampaignRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.channel.as_str()))
        .map(|record| record.channel.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_campaign_overview::mock::mock_campaigns;
    use crate::dashboards::d100_campaign_overview::sort::SortDirection;

    fn sample() -> Vec<CampaignRecord> {
        mock_campaigns().unwrap()
    }

    fn ids(rows: &[CampaignRecord]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    /// Набор побольше для проверки пагинации и стабильности
    fn many(n: usize) -> Vec<CampaignRecord> {
        let base = sample();
        (0..n)
            .map(|i| {
                let mut r = base[i % base.len()].clone();
                r.id = format!("r{}", i);
                r
            })
            .collect()
    }

    #[test]
    fn test_search_google() {
        let records = sample();
        let mut state = QueryState::default();
        state.set_search("google");
        let result = query(&records, &state);
        assert_eq!(ids(&result.rows), vec!["1", "4"]);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.page_count, 1);
    }

    #[test]
    fn test_unfiltered_first_page() {
        let records = sample();
        let result = query(&records, &QueryState::default());
        assert_eq!(ids(&result.rows), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(result.total_count, 5);
        assert_eq!(result.page_count, 1);
        assert_eq!(result.showing_range(1, 5), Some((1, 5)));
    }

    #[test]
    fn test_revenue_descending() {
        let records = sample();
        let mut state = QueryState::default();
        state.sort = SortState::new(CampaignField::Revenue, SortDirection::Descending);
        let result = query(&records, &state);
        assert_eq!(ids(&result.rows), vec!["4", "1", "3", "5", "2"]);
    }

    #[test]
    fn test_search_matches_numbers_and_dates_raw() {
        let records = sample();
        let mut state = QueryState::default();

        // revenue 14650 без форматирования
        state.set_search("14650");
        assert_eq!(ids(&query(&records, &state).rows), vec!["1"]);

        // "$14,650" — то, что видит пользователь, но не сырое значение
        state.set_search("$14,650");
        assert_eq!(query(&records, &state).total_count, 0);

        state.set_search("2024-11-30");
        assert_eq!(ids(&query(&records, &state).rows), vec!["4", "5"]);

        // cpa 200.68
        state.set_search("200.68");
        assert_eq!(ids(&query(&records, &state).rows), vec!["1"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let records = sample();
        let mut state = QueryState::default();
        state.set_search("EMAIL");
        assert_eq!(ids(&query(&records, &state).rows), vec!["5"]);
    }

    #[test]
    fn test_date_range_inclusive() {
        let records = sample();
        let mut state = QueryState::default();

        state.set_date_range(DateRange::new(date(2024, 12, 1), None));
        assert_eq!(ids(&query(&records, &state).rows), vec!["1", "2", "3"]);

        state.set_date_range(DateRange::new(None, date(2024, 11, 30)));
        assert_eq!(ids(&query(&records, &state).rows), vec!["4", "5"]);

        state.set_date_range(DateRange::new(date(2024, 11, 30), date(2024, 11, 30)));
        assert_eq!(ids(&query(&records, &state).rows), vec!["4", "5"]);

        state.set_date_range(DateRange::new(date(2025, 1, 1), None));
        assert_eq!(query(&records, &state).total_count, 0);
    }

    #[test]
    fn test_unparsable_record_date() {
        let mut records = sample();
        records[0].date = "someday".to_string();

        // Без фильтра по дате запись видна
        let result = query(&records, &QueryState::default());
        assert_eq!(result.total_count, 5);

        // С любой границей — исключена
        let mut state = QueryState::default();
        state.set_date_range(DateRange::new(date(2000, 1, 1), None));
        let result = query(&records, &state);
        assert_eq!(ids(&result.rows), vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn test_malformed_filter_bounds_are_ignored() {
        let range = DateRange::from_inputs("not-a-date", "");
        assert!(!range.is_set());
        let range = DateRange::from_inputs("2024-12-01", "31/12/2024");
        assert_eq!(range, DateRange::new(date(2024, 12, 1), None));
    }

    #[test]
    fn test_channel_filter() {
        let records = sample();
        let mut state = QueryState::default();
        state.toggle_channel("Email");
        state.toggle_channel("LinkedIn Ads");
        assert_eq!(ids(&query(&records, &state).rows), vec!["3", "5"]);

        state.toggle_channel("Email");
        assert_eq!(ids(&query(&records, &state).rows), vec!["3"]);

        state.toggle_channel("LinkedIn Ads");
        assert_eq!(query(&records, &state).total_count, 5);
    }

    #[test]
    fn test_filters_compose_before_sort() {
        let records = sample();
        let mut state = QueryState::default();
        state.set_date_range(DateRange::new(date(2024, 12, 1), date(2024, 12, 1)));
        state.toggle_channel("Google Ads");
        state.toggle_channel("Facebook Ads");
        state.sort = SortState::new(CampaignField::Revenue, SortDirection::Ascending);
        let result = query(&records, &state);
        assert_eq!(ids(&result.rows), vec!["2", "1"]);
    }

    #[test]
    fn test_idempotent() {
        let records = many(17);
        let mut state = QueryState::default();
        state.set_search("ads");
        state.sort = SortState::new(CampaignField::Ctr, SortDirection::Descending);
        state.set_page(2);
        assert_eq!(query(&records, &state), query(&records, &state));
    }

    #[test]
    fn test_filter_monotonicity() {
        let records = many(23);
        let base = QueryState::default();
        let base_total = query(&records, &base).total_count;

        let mut with_search = base.clone();
        with_search.set_search("sale");
        assert!(query(&records, &with_search).total_count <= base_total);

        let mut with_date = base.clone();
        with_date.set_date_range(DateRange::new(date(2024, 12, 1), None));
        assert!(query(&records, &with_date).total_count <= base_total);

        let mut with_channel = with_date.clone();
        with_channel.toggle_channel("Email");
        assert!(
            query(&records, &with_channel).total_count <= query(&records, &with_date).total_count
        );
    }

    #[test]
    fn test_sort_stability_after_filter() {
        let records = many(15);
        let mut state = QueryState::default();
        state.toggle_channel("Google Ads");
        let unsorted: Vec<String> = filter_and_sort(&records, &state)
            .iter()
            .map(|r| r.id.clone())
            .collect();

        state.sort = SortState::new(CampaignField::Cpa, SortDirection::Ascending);
        let sorted = filter_and_sort(&records, &state);
        // Внутри групп с равным cpa порядок фильтрации сохраняется
        for pair in sorted.windows(2) {
            if pair[0].cpa == pair[1].cpa {
                let a = unsorted.iter().position(|id| *id == pair[0].id);
                let b = unsorted.iter().position(|id| *id == pair[1].id);
                assert!(a < b);
            }
        }
        assert_eq!(sorted.len(), unsorted.len());
    }

    #[test]
    fn test_pagination_coverage() {
        let records = many(23);
        let mut state = QueryState::default();
        state.sort = SortState::new(CampaignField::Campaign, SortDirection::Ascending);

        let full: Vec<String> = filter_and_sort(&records, &state)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let pages = query(&records, &state).page_count;
        assert_eq!(pages, 5);

        let mut concatenated = Vec::new();
        for page in 1..=pages {
            state.set_page(page);
            let result = query(&records, &state);
            assert!(result.rows.len() <= state.items_per_page);
            concatenated.extend(result.rows.into_iter().map(|r| r.id));
        }
        assert_eq!(concatenated, full);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records = sample();
        let mut state = QueryState::default();
        state.set_page(2);
        let result = query(&records, &state);
        assert!(result.rows.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.page_count, 1);

        state.set_page(0);
        assert!(query(&records, &state).rows.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let records = sample();
        let mut state = QueryState::default();
        state.set_search("no such campaign");
        let result = query(&records, &state);
        assert!(result.is_empty());
        assert!(result.rows.is_empty());
        assert_eq!(result.page_count, 0);

        let result = query(&[], &QueryState::default());
        assert_eq!(result.page_count, 0);
    }

    #[test]
    fn test_available_channels_ignore_filters() {
        let records = sample();
        let expected = vec!["Google Ads", "Facebook Ads", "LinkedIn Ads", "Email"];
        assert_eq!(available_channels(&records), expected);

        let mut state = QueryState::default();
        state.toggle_channel("Email");
        let _ = query(&records, &state);
        assert_eq!(available_channels(&records), expected);
        assert!(available_channels(&[]).is_empty());
    }

    #[test]
    fn test_filter_summary_and_reset() {
        let mut state = QueryState::default();
        assert!(!state.has_active_filters());
        state.set_search("google");
        assert!(!state.has_active_filters());

        state.toggle_channel("Email");
        state.toggle_channel("Google Ads");
        state.set_date_range(DateRange::new(date(2024, 12, 1), None));
        state.set_page(3);
        assert!(state.has_active_filters());
        assert_eq!(state.active_filters_count(), 3);

        state.reset_filters();
        assert!(!state.has_active_filters());
        assert_eq!(state.search_term, "google");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = QueryState::default();
        state.set_page(4);
        state.set_search("x");
        assert_eq!(state.current_page, 1);

        state.set_page(4);
        state.toggle_channel("Email");
        assert_eq!(state.current_page, 1);

        // Сортировка страницу не меняет
        state.set_page(2);
        state.toggle_sort(CampaignField::Clicks);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_date_range_label() {
        assert_eq!(DateRange::default().label(), "Pick a date range");
        let range = DateRange::new(date(2024, 11, 30), date(2024, 12, 1));
        assert_eq!(range.label(), "Nov 30 - Dec 01, 2024");
        let range = DateRange::new(date(2024, 12, 1), None);
        assert_eq!(range.label(), "Dec 01, 2024");
    }
}
