//! Benchmarks for polybook parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic bilingual books.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic book with the given number of pages.
fn create_test_book(page_count: usize) -> String {
    let mut content = String::new();

    content.push_str("---\n");
    content.push_str("allTitles:\n  en: Benchmark\n  es: Prueba\n");
    content.push_str("languages:\n  en: English\n  es: Español\n");
    content.push_str("l1: en\nl2: es\n");
    content.push_str("---\n");

    for i in 0..page_count {
        if i > 0 {
            content.push_str("<!-- page-break -->\n");
        }
        content.push_str(&format!(
            "<!-- lang=en -->\nPage {} of the **benchmark** book.\n\nA second paragraph.\n",
            i + 1
        ));
        content.push_str(&format!("![page {}](images/page{}.png)\n", i + 1, i + 1));
        content.push_str(&format!(
            "<!-- lang=es -->\nPágina {} del libro de *prueba*.\n",
            i + 1
        ));
    }

    content
}

/// Benchmark whole-document parsing at various sizes.
fn bench_book_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_parsing");

    for page_count in [1, 10, 100].iter() {
        let text = create_test_book(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| polybook::parse_str(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark HTML rendering of a parsed book.
fn bench_html_rendering(c: &mut Criterion) {
    let book = polybook::parse_str(&create_test_book(50)).unwrap();
    let options = polybook::RenderOptions::default();

    c.bench_function("render_html_50_pages", |b| {
        b.iter(|| polybook::render::to_html(black_box(&book), &options).unwrap());
    });
}

/// Benchmark split-pane scaffolding depth.
fn bench_split_pane(c: &mut Criterion) {
    let items = vec![polybook::ItemKind::Text; 32];

    c.bench_function("split_pane_32_items", |b| {
        b.iter(|| {
            polybook::build_split_pane(black_box(&items), polybook::Orientation::Portrait).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_book_parsing,
    bench_html_rendering,
    bench_split_pane,
);
criterion_main!(benches);
