use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use intern_portal::roster::{
    InternId, InternRecord, Roster, SortDirection, SortKey, builtin_records, query,
};

const RECORD_COUNT: usize = 5_000;

fn synthetic_roster() -> Roster {
    let seeds = builtin_records();
    let records: Vec<InternRecord> = (0..RECORD_COUNT)
        .map(|i| {
            let mut record = seeds[i % seeds.len()].clone();
            record.id = InternId(i as u32 + 1);
            record.name = format!("{} {i:05}", record.name);
            record
        })
        .collect();
    Roster::new(records).expect("unique ids")
}

fn bench_render(c: &mut Criterion) {
    let roster = synthetic_roster();
    let mut group = c.benchmark_group("directory_render");
    for query_text in ["", "engineering", "zz-no-match"] {
        for key in SortKey::ALL {
            group.bench_with_input(
                BenchmarkId::new(key.label(), format!("q={query_text:?}")),
                &query_text,
                |b, query_text| {
                    b.iter(|| {
                        query::render(
                            black_box(roster.records()),
                            black_box(query_text),
                            key,
                            SortDirection::Descending,
                        )
                        .len()
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
