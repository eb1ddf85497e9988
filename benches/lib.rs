use cellwidth::{table, wcswidth, wcswidth_cjk, wcwidth};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench(c: &mut Criterion) {
    let reference = concat!(
        "In the quiet twilight, dreams unfold, soft whispers of a story untold.\n",
        "月明かりが静かに照らし出し、夢を見る心の奥で詩が静かに囁かれる\n",
        "Stars collide in the early light of hope, echoing the silent call of the night.\n",
        "夜の静寂、希望と孤独が混ざり合うその中で詩が永遠に続く\n",
    );
    let buffer = reference.replace('\n', " ").repeat(10);

    let mut group = c.benchmark_group("wcswidth");
    group.throughput(Throughput::Bytes(buffer.len() as u64));
    group.bench_function("default", |b| b.iter(|| wcswidth(&buffer, None)));
    group.bench_function("cjk", |b| b.iter(|| wcswidth_cjk(&buffer, None)));
    group.finish();

    let mut group = c.benchmark_group("wcwidth");
    for (name, ch) in [("ascii", 'a'), ("kanji", '好'), ("emoji", '😊'), ("combining", '\u{0301}')]
    {
        group.bench_with_input(BenchmarkId::from_parameter(name), &ch, |b, &ch| {
            b.iter(|| wcwidth(ch))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("table::lookup");
    let shared = table::shared();
    group.bench_function("bmp", |b| b.iter(|| table::lookup(shared, 0x597D)));
    group.bench_function("astral", |b| b.iter(|| table::lookup(shared, 0x1F60A)));
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
