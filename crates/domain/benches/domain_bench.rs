use common::CustomerEmail;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{CartLine, CartMutationRequest};

fn make_lines(count: u32) -> Vec<CartLine> {
    (1..=count).map(|id| CartLine::new(id, 2)).collect()
}

fn bench_parse_email(c: &mut Criterion) {
    c.bench_function("domain/parse_email", |b| {
        b.iter(|| CustomerEmail::parse("jane.doe@example.org").unwrap());
    });
}

fn bench_build_request_single_line(c: &mut Criterion) {
    let email = CustomerEmail::parse("bench@example.com").unwrap();

    c.bench_function("domain/build_request_single_line", |b| {
        b.iter(|| CartMutationRequest::new(email.clone(), make_lines(1)).unwrap());
    });
}

fn bench_build_request_50_lines(c: &mut Criterion) {
    let email = CustomerEmail::parse("bench@example.com").unwrap();

    c.bench_function("domain/build_request_50_lines", |b| {
        b.iter(|| CartMutationRequest::new(email.clone(), make_lines(50)).unwrap());
    });
}

fn bench_reject_zero_quantity(c: &mut Criterion) {
    let email = CustomerEmail::parse("bench@example.com").unwrap();

    c.bench_function("domain/reject_zero_quantity", |b| {
        b.iter(|| {
            CartMutationRequest::new(email.clone(), vec![CartLine::new(1u32, 0)]).unwrap_err()
        });
    });
}

fn bench_serialize_request_50_lines(c: &mut Criterion) {
    let email = CustomerEmail::parse("bench@example.com").unwrap();
    let request = CartMutationRequest::new(email, make_lines(50)).unwrap();

    c.bench_function("domain/serialize_request_50_lines", |b| {
        b.iter(|| serde_json::to_string(&request).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse_email,
    bench_build_request_single_line,
    bench_build_request_50_lines,
    bench_reject_zero_quantity,
    bench_serialize_request_50_lines,
);
criterion_main!(benches);
