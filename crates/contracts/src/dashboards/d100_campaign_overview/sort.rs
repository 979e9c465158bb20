//! Сортировка таблицы кампаний.
//!
//! Направление — конечный автомат `None → Ascending → Descending → None`.
//! Активная колонка хранится отдельно: клик по другой колонке сразу
//! включает на ней `Ascending`.

use super::dto::CampaignRecord;
use super::field::CampaignField;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Следующее состояние при повторном клике по той же колонке
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Применяет направление к результату естественного сравнения
    pub fn apply(self, natural: Ordering) -> Ordering {
        match self {
            SortDirection::Descending => natural.reverse(),
            SortDirection::Ascending | SortDirection::None => natural,
        }
    }

    /// Индикатор для заголовка колонки
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::None => "⇅",
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Текущая сортировка таблицы: активная колонка и направление
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<CampaignField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: CampaignField, direction: SortDirection) -> Self {
        if direction == SortDirection::None {
            return Self::default();
        }
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Сортировка применяется только при заданной колонке и направлении
    pub fn is_active(&self) -> bool {
        self.field.is_some() && self.direction != SortDirection::None
    }

    /// Клик по заголовку колонки `field`
    pub fn toggle(self, field: CampaignField) -> Self {
        if self.field == Some(field) {
            Self::new(field, self.direction.next())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }

    /// Направление, которое показывает заголовок колонки `field`
    pub fn direction_for(&self, field: CampaignField) -> SortDirection {
        if self.field == Some(field) {
            self.direction
        } else {
            SortDirection::None
        }
    }
}

/// Стабильная сортировка строк; равные по ключу сохраняют исходный порядок.
pub fn sort_rows(rows: &mut [&CampaignRecord], sort: &SortState) {
    let Some(field) = sort.field else { return };
    if sort.direction == SortDirection::None {
        return;
    }

    let compare = field.comparator();
    let direction = sort.direction;
    rows.sort_by(|a, b| direction.apply(compare(a, b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, revenue: f64, campaign: &str) -> CampaignRecord {
        CampaignRecord {
            id: id.to_string(),
            date: "2024-12-01".to_string(),
            campaign: campaign.to_string(),
            channel: "Email".to_string(),
            impressions: 0,
            clicks: 0,
            conversions: 0,
            revenue,
            ctr: 0.0,
            cpa: 0.0,
        }
    }

    fn ids(rows: &[&CampaignRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_direction_cycle() {
        let d = SortDirection::None;
        assert_eq!(d.next(), SortDirection::Ascending);
        assert_eq!(d.next().next(), SortDirection::Descending);
        assert_eq!(d.next().next().next(), SortDirection::None);
    }

    #[test]
    fn test_three_clicks_return_to_unsorted() {
        let state = SortState::default()
            .toggle(CampaignField::Revenue)
            .toggle(CampaignField::Revenue)
            .toggle(CampaignField::Revenue);
        assert_eq!(state, SortState::default());
        assert!(!state.is_active());
        assert_eq!(state.direction_for(CampaignField::Revenue), SortDirection::None);
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let state = SortState::default().toggle(CampaignField::Revenue);
        let state = state.toggle(CampaignField::Clicks);
        assert_eq!(state.field, Some(CampaignField::Clicks));
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(state.direction_for(CampaignField::Revenue), SortDirection::None);

        // Из Descending на другой колонке — тоже сразу Ascending
        let state = SortState::new(CampaignField::Date, SortDirection::Descending)
            .toggle(CampaignField::Campaign);
        assert_eq!(
            state,
            SortState::new(CampaignField::Campaign, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = vec![
            rec("a", 10.0, "x"),
            rec("b", 5.0, "x"),
            rec("c", 10.0, "x"),
            rec("d", 5.0, "x"),
        ];
        let mut rows: Vec<&CampaignRecord> = records.iter().collect();
        sort_rows(
            &mut rows,
            &SortState::new(CampaignField::Revenue, SortDirection::Ascending),
        );
        assert_eq!(ids(&rows), vec!["b", "d", "a", "c"]);

        let mut rows: Vec<&CampaignRecord> = records.iter().collect();
        sort_rows(
            &mut rows,
            &SortState::new(CampaignField::Revenue, SortDirection::Descending),
        );
        assert_eq!(ids(&rows), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let records = vec![
            rec("1", 0.0, "beta"),
            rec("2", 0.0, "Alpha"),
            rec("3", 0.0, "gamma"),
        ];
        let mut rows: Vec<&CampaignRecord> = records.iter().collect();
        sort_rows(
            &mut rows,
            &SortState::new(CampaignField::Campaign, SortDirection::Ascending),
        );
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_inactive_sort_keeps_order() {
        let records = vec![rec("1", 3.0, "c"), rec("2", 1.0, "a")];
        let mut rows: Vec<&CampaignRecord> = records.iter().collect();
        sort_rows(&mut rows, &SortState::default());
        assert_eq!(ids(&rows), vec!["1", "2"]);
    }
}
