use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tlskex_api::{KeyExchange, ProtocolVersion};
use tlskex_dh::NamedGroup;
use tlskex_tests::fixtures::{run_exchange, PeerSetup};

fn bench_dhe(c: &mut Criterion) {
    let mut group = c.benchmark_group("DHE");
    group.sample_size(20);

    for (name, named) in [
        ("modp1024", NamedGroup::Rfc2409Modp1024),
        ("modp2048", NamedGroup::Rfc3526Modp2048),
    ] {
        let setup = PeerSetup::default()
            .with_version(ProtocolVersion::Tls12)
            .with_group(named);

        // server side only: key generation plus signing
        group.bench_with_input(
            BenchmarkId::new("generate_server_key_exchange", name),
            &setup,
            |b, setup| {
                b.iter(|| {
                    let (mut server, _) = setup.dhe().unwrap();
                    server.generate_server_key_exchange().unwrap()
                });
            },
        );

        // client side: verification plus parameter and value checks
        let (mut server, _) = setup.dhe().unwrap();
        let ske = server.generate_server_key_exchange().unwrap();
        group.bench_with_input(
            BenchmarkId::new("process_server_key_exchange", name),
            &setup,
            |b, setup| {
                b.iter(|| {
                    let (_, mut client) = setup.dhe().unwrap();
                    client
                        .process_server_key_exchange(&mut Cursor::new(&ske))
                        .unwrap();
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("full_exchange", name), &setup, |b, setup| {
            b.iter(|| {
                let (mut server, mut client) = setup.dhe().unwrap();
                run_exchange(&mut server, &mut client).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dhe);
criterion_main!(benches);
