use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
};
use keyed_collections::{
    Key,
    KeyedCollection,
};

criterion_group!(bench_keyed, bench_push_pop, bench_get_by_name, bench_shift);
criterion_main!(bench_keyed);

fn bench_push_pop(c: &mut Criterion) {
    let mut g = c.benchmark_group("keyed_collection::push_pop");
    let len = 10_000;
    g.bench_function("KeyedCollection", |bencher| {
        bencher.iter(|| {
            let mut collection = <KeyedCollection<usize>>::with_capacity(len);
            for i in 0..len {
                collection.push(i);
            }
            while collection.pop().is_some() {}
        })
    });
    g.bench_function("Vec<usize> (reference)", |bencher| {
        bencher.iter(|| {
            let mut vec = Vec::with_capacity(len);
            for i in 0..len {
                vec.push(i);
            }
            while vec.pop().is_some() {}
        })
    });
}

fn bench_get_by_name(c: &mut Criterion) {
    let mut g = c.benchmark_group("keyed_collection::get_by_name");
    let len = 1_000;
    let names = (0..len).map(|i| format!("key-{}", i)).collect::<Vec<_>>();
    let collection = names
        .iter()
        .enumerate()
        .fold(KeyedCollection::new(), |mut collection, (i, name)| {
            collection.set(Key::name(name.as_str()), i);
            collection
        });
    let pairs = names
        .iter()
        .cloned()
        .zip(0..len)
        .collect::<Vec<(String, usize)>>();
    g.bench_function("KeyedCollection", |bencher| {
        bencher.iter(|| {
            for (i, name) in names.iter().enumerate() {
                assert_eq!(collection.get(name.as_str()), Some(&i));
            }
        })
    });
    g.bench_function("Vec<(String, usize)> (reference)", |bencher| {
        bencher.iter(|| {
            for (i, name) in names.iter().enumerate() {
                let found = pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value);
                assert_eq!(found, Some(&i));
            }
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut g = c.benchmark_group("keyed_collection::shift");
    let len = 1_000;
    g.bench_function("KeyedCollection", |bencher| {
        bencher.iter(|| {
            let mut collection = (0..len).collect::<KeyedCollection<usize>>();
            while collection.shift().is_some() {}
        })
    });
    g.bench_function("Vec<usize> (reference)", |bencher| {
        bencher.iter(|| {
            let mut vec = (0..len).collect::<Vec<usize>>();
            while !vec.is_empty() {
                vec.remove(0);
            }
        })
    });
}
