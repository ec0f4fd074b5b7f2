use collection_utils::{
    Depth, filter, find, first, first_n, flatten, for_each, keys, last, last_n, map, nested,
    record, reduce, size, sort_by, values,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("for_each:");
    for_each(&[1, 2, 3], |n| info!(value = n, "visited"));
    for_each(&record! { "one" => 1, "two" => 2 }, |n| info!(value = n, "visited"));

    info!("map: {:?}", map(&[1, 2, 3], |n, _, _| n * 2));

    info!("reduce: {:?}", reduce(&[1, 2, 3], |acc, n, _| acc + n, Some(0)));

    info!("find: {:?}", find(&[1, 2, 3, 4], |n| *n > 2));

    info!("filter: {:?}", filter(&[1, 2, 3, 4], |n| n % 2 == 0));

    info!("size: {}", size(&record! { "a" => 1, "b" => 2 }));

    info!("first: {:?}", first(&[10, 20, 30]));
    info!("first: {:?}", first_n(&[10, 20, 30], 2));

    info!("last: {:?}", last(&[10, 20, 30]));
    info!("last: {:?}", last_n(&[10, 20, 30], 2));

    info!("sort_by: {:?}", sort_by(&[3, 1, 2], |n| *n));

    info!("flatten: {:?}", flatten(&nested![1, [2, [3]], 4], Depth::Deep));
    info!("flatten shallow: {:?}", flatten(&nested![1, [2, [3]], 4], Depth::Shallow));

    let record = record! { "a" => 1, "b" => 2 };
    info!("keys: {:?}", keys(&record));
    info!("values: {:?}", values(&record));
}
