use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_panel::{build_chart_series, paginate, DailyRecord, Pagination, Selection, WeatherSeries};

fn year_of_rows() -> WeatherSeries {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .iter_days()
        .take(365)
        .enumerate()
        .map(|(i, date)| {
            let mut r = DailyRecord::empty(date);
            r.temp_max = Some(10.0 + (i % 20) as f64);
            r.temp_min = Some((i % 15) as f64 - 5.0);
            r.temp_mean = Some(5.0 + (i % 10) as f64);
            r
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_derived_views(c: &mut Criterion) {
    let rows = year_of_rows();
    c.bench_function("build_chart_series_all", |b| {
        b.iter(|| build_chart_series(black_box(Some(&rows)), black_box(Selection::all())))
    });
    c.bench_function("paginate_last_page", |b| {
        let mut pagination = Pagination::new(20);
        pagination.go_to(usize::MAX, pagination.total_pages(rows.len()));
        b.iter(|| paginate(black_box(rows.records()), black_box(pagination)))
    });
    c.bench_function("to_dataframe", |b| b.iter(|| black_box(&rows).to_dataframe()));
}

criterion_group!(benches, bench_derived_views);
criterion_main!(benches);
