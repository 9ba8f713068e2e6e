// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use criterion::*;
use rand::{thread_rng, RngCore};

use lmfs_sig::Context;

fn lmfs_keygen(c: &mut Criterion) {
    c.bench_function("LMFS KeyGen", |b| {
        b.iter_with_setup(
            || {
                let mut seed = [0u8; 32];
                thread_rng().fill_bytes(&mut seed);
                seed
            },
            |seed| Context::new(&seed),
        );
    });
}

fn lmfs_sign(c: &mut Criterion) {
    let mut rng = thread_rng();
    c.bench_function("LMFS Sign", |b| {
        b.iter_with_setup(
            || {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                let ctx = Context::new(&seed);
                let n = rng.next_u32();
                (ctx, format!("msg{}", n))
            },
            |(ctx, msg)| ctx.sign(msg.as_bytes()),
        );
    });
}

fn lmfs_verify(c: &mut Criterion) {
    let mut rng = thread_rng();
    c.bench_function("LMFS Verify", |b| {
        b.iter_with_setup(
            || {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                let ctx = Context::new(&seed);
                let n = rng.next_u32();
                let msg = format!("msg{}", n);
                let sig = ctx.sign(msg.as_bytes());
                (ctx, msg, sig)
            },
            |(ctx, msg, sig)| ctx.verify(&sig, msg.as_bytes()),
        )
    });
}

criterion_group!(benches, lmfs_keygen, lmfs_sign, lmfs_verify);
criterion_main!(benches);
