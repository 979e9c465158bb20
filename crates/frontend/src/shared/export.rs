//! Экспорт строк таблицы в CSV и скачивание файла через браузер

use anyhow::{anyhow, Context};
use contracts::dashboards::d100_campaign_overview::{CampaignField, CampaignRecord};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Типы, которые можно выгрузить в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения одной строки в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for CampaignRecord {
    fn headers() -> Vec<&'static str> {
        CampaignField::ALL.iter().map(|f| f.as_str()).collect()
    }

    /// Сырые значения полей, без форматирования для показа
    fn to_csv_row(&self) -> Vec<String> {
        CampaignField::ALL
            .iter()
            .map(|f| f.value(self).to_string())
            .collect()
    }
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Собирает CSV документ: строка заголовков и по строке на запись
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Экспортирует список в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> anyhow::Result<()> {
    if data.is_empty() {
        return Err(anyhow!("nothing to export"));
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn create_csv_blob(content: &str) -> anyhow::Result<Blob> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| anyhow!("failed to create blob: {:?}", e))
}

/// Скачивание через временную ссылку `<a download>`
fn download_blob(blob: &Blob, filename: &str) -> anyhow::Result<()> {
    let window = web_sys::window().context("no window object")?;
    let document = window.document().context("no document object")?;
    let body = document.body().context("no body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| anyhow!("failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow!("failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| anyhow!("failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| anyhow!("failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| anyhow!("failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| anyhow!("failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| anyhow!("failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_campaign_overview::mock::mock_campaigns;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("Email"), "Email");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_build_csv() {
        let records = mock_campaigns().unwrap();
        let csv = build_csv(&records[..1]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "id,date,campaign,channel,impressions,clicks,conversions,revenue,ctr,cpa"
        );
        assert_eq!(
            lines[1],
            "1,2024-12-01,Holiday Sale 2024,Google Ads,45230,1820,73,14650,4.02,200.68"
        );
        assert_eq!(lines.len(), 2);
    }
}
