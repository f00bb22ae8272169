use crate::types::daily_record::DailyRecord;
use crate::types::measurement::Measurement;
use chrono::NaiveDate;
use serde::Serialize;

/// A table row as displayed: the date plus one cell per configured column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub date: NaiveDate,
    pub cells: Vec<Option<f64>>,
}

/// Header titles, starting with the date column.
pub fn table_headers(columns: &[Measurement]) -> Vec<&'static str> {
    std::iter::once("Date")
        .chain(columns.iter().map(Measurement::short_label))
        .collect()
}

/// Projects `rows` onto `columns`, keeping row order.
pub fn table_rows(rows: &[DailyRecord], columns: &[Measurement]) -> Vec<TableRow> {
    rows.iter()
        .map(|record| TableRow {
            date: record.date,
            cells: columns.iter().map(|m| record.value(*m)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_column_configuration() {
        let mut record = DailyRecord::empty(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        record.temp_max = Some(31.0);
        record.apparent_temp_max = Some(34.5);

        let columns = [Measurement::ApparentTempMax, Measurement::TempMax, Measurement::TempMin];
        let rows = table_rows(&[record], &columns);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells, vec![Some(34.5), Some(31.0), None]);
        assert_eq!(
            table_headers(&columns),
            vec!["Date", "Feels Max (°C)", "Max Temp (°C)", "Min Temp (°C)"]
        );
    }
}
