use common::CustomerEmail;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{CartLine, CartMutationRequest};
use orchestrator::{
    InMemoryCartStore, InMemoryCustomerDirectory, InMemoryProductCatalog, MutationCoordinator,
};

type BenchCoordinator =
    MutationCoordinator<InMemoryCustomerDirectory, InMemoryProductCatalog, InMemoryCartStore>;

fn coordinator_with_products(count: u32) -> BenchCoordinator {
    let directory = InMemoryCustomerDirectory::new();
    directory.register(CustomerEmail::parse("bench@example.com").unwrap(), "Bench");

    let catalog = InMemoryProductCatalog::new();
    for id in 1..=count {
        catalog.stock(id, format!("Product {id}"));
    }

    MutationCoordinator::new(directory, catalog, InMemoryCartStore::new())
}

fn request(line_count: u32) -> CartMutationRequest {
    let lines = (1..=line_count).map(|id| CartLine::new(id, 1)).collect();
    CartMutationRequest::new(CustomerEmail::parse("bench@example.com").unwrap(), lines).unwrap()
}

fn bench_submit_single_line(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let coordinator = coordinator_with_products(1);

    c.bench_function("orchestrator/submit_single_line", |b| {
        b.iter(|| {
            rt.block_on(async {
                coordinator.submit(request(1)).await.unwrap();
            });
        });
    });
}

fn bench_submit_ten_lines(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let coordinator = coordinator_with_products(10);

    c.bench_function("orchestrator/submit_ten_lines", |b| {
        b.iter(|| {
            rt.block_on(async {
                coordinator.submit(request(10)).await.unwrap();
            });
        });
    });
}

fn bench_submit_fifty_lines(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let coordinator = coordinator_with_products(50);

    c.bench_function("orchestrator/submit_fifty_lines", |b| {
        b.iter(|| {
            rt.block_on(async {
                coordinator.submit(request(50)).await.unwrap();
            });
        });
    });
}

fn bench_submit_serial_validation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let coordinator = coordinator_with_products(10).with_validation_concurrency(1);

    c.bench_function("orchestrator/submit_ten_lines_serial", |b| {
        b.iter(|| {
            rt.block_on(async {
                coordinator.submit(request(10)).await.unwrap();
            });
        });
    });
}

fn bench_submit_rejected_line(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    // Nothing stocked, so the single line is a confirmed miss.
    let coordinator = coordinator_with_products(0);

    c.bench_function("orchestrator/submit_rejected_line", |b| {
        b.iter(|| {
            rt.block_on(async {
                coordinator.submit(request(1)).await.unwrap_err();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_submit_single_line,
    bench_submit_ten_lines,
    bench_submit_fifty_lines,
    bench_submit_serial_validation,
    bench_submit_rejected_line,
);
criterion_main!(benches);
