//! Клиентская пагинация: окно страницы и модель кнопок с многоточием.
//!
//! Страницы нумеруются с 1.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Элемент панели пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// `ceil(total / items_per_page)`; 0 для пустого набора или нулевого размера страницы
pub fn page_count(total: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total.div_ceil(items_per_page)
}

/// Диапазон индексов страницы `page` внутри набора длины `total`.
///
/// Страница вне `1..=page_count` даёт `None` (пустое окно, не ошибка).
pub fn page_bounds(total: usize, page: usize, items_per_page: usize) -> Option<Range<usize>> {
    if page == 0 || items_per_page == 0 {
        return None;
    }
    let start = (page - 1).checked_mul(items_per_page)?;
    if start >= total {
        return None;
    }
    let end = total.min(start + items_per_page);
    Some(start..end)
}

/// Приводит номер страницы к допустимому диапазону (1 для пустого набора)
pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// Кнопки пагинации: первая, последняя и страницы на расстоянии не больше
/// `radius` от текущей; каждый пропуск сворачивается в одно многоточие.
pub fn page_items(current: usize, pages: usize, radius: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut previous: Option<usize> = None;

    for page in 1..=pages {
        let visible = page == 1 || page == pages || page.abs_diff(current) <= radius;
        if !visible {
            continue;
        }
        if let Some(prev) = previous {
            if page != prev + 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }

    items
}

/// Границы подписи "Showing X to Y of N results" (1-based, включительно).
/// `None`, если текущее окно пустое.
pub fn showing_range(total: usize, page: usize, items_per_page: usize) -> Option<(usize, usize)> {
    page_bounds(total, page, items_per_page).map(|range| (range.start + 1, range.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(23, 5), 5);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(12, 1, 5), Some(0..5));
        assert_eq!(page_bounds(12, 3, 5), Some(10..12));
        assert_eq!(page_bounds(12, 4, 5), None);
        assert_eq!(page_bounds(12, 0, 5), None);
        assert_eq!(page_bounds(0, 1, 5), None);
        assert_eq!(page_bounds(12, usize::MAX, 5), None);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_items_small() {
        assert_eq!(page_items(1, 1, 1), vec![Page(1)]);
        assert_eq!(page_items(2, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert!(page_items(1, 0, 1).is_empty());
    }

    #[test]
    fn test_page_items_collapse() {
        assert_eq!(
            page_items(1, 10, 1),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(5, 10, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(10, 10, 1),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        // Соседние с первой страницей не дают многоточия
        assert_eq!(
            page_items(3, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_page_items_wider_radius() {
        assert_eq!(
            page_items(5, 10, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_showing_range() {
        assert_eq!(showing_range(12, 1, 5), Some((1, 5)));
        assert_eq!(showing_range(12, 3, 5), Some((11, 12)));
        assert_eq!(showing_range(12, 9, 5), None);
    }
}
