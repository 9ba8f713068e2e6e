// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Generates a random seed and message, signs, verifies, then flips a
//! single bit in the message, the public key, and the signature in turn
//! to confirm each corruption is caught.

use std::convert::TryFrom;

use rand::{thread_rng, RngCore};

use lmfs_sig::Context;

fn dump_hex(buf: &[u8]) -> String {
    buf.iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() {
    let mut rng = thread_rng();

    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);

    let mut msg = vec![0u8; 64 + (rng.next_u32() % 192) as usize];
    rng.fill_bytes(&mut msg);

    let ctx = Context::new(&seed);
    println!("Seed:       {}", dump_hex(&seed));
    println!("Public key: {}", dump_hex(ctx.public_key().to_bytes()));
    println!("Message:    {}", dump_hex(&msg));

    let sig = ctx.sign(&msg);
    println!("Signature:  {}", dump_hex(sig.to_bytes()));

    match ctx.verify(&sig, &msg) {
        Ok(()) => println!("OK: signed message verifies."),
        Err(e) => println!("FAIL: good message did not verify: {}", e),
    }

    let idx = (rng.next_u32() as usize) % msg.len();
    let bit = 1u8 << (rng.next_u32() % 8);
    let mut bad_msg = msg.clone();
    bad_msg[idx] ^= bit;
    match ctx.verify(&sig, &bad_msg) {
        Err(_) => println!("OK: corrupted message was rejected."),
        Ok(()) => println!("FAIL: corrupted message verified anyway."),
    }

    let mut bad_pk_bytes = ctx.public_key().to_bytes().to_vec();
    let idx = 1 + (rng.next_u32() as usize) % (bad_pk_bytes.len() - 1);
    bad_pk_bytes[idx] ^= bit;
    let bad_pk = lmfs_sig::PublicKey::try_from(bad_pk_bytes.as_slice()).unwrap();
    match lmfs_sig::verify(&bad_pk, &sig, &msg) {
        Err(_) => println!("OK: corrupted public key was rejected."),
        Ok(()) => println!("FAIL: corrupted public key verified anyway."),
    }

    let mut bad_sig_bytes = sig.to_bytes().to_vec();
    let idx = 1 + (rng.next_u32() as usize) % (bad_sig_bytes.len() - 1);
    bad_sig_bytes[idx] ^= bit;
    let bad_sig = lmfs_sig::Signature::try_from(bad_sig_bytes.as_slice()).unwrap();
    match ctx.verify(&bad_sig, &msg) {
        Err(_) => println!("OK: corrupted signature was rejected."),
        Ok(()) => println!("FAIL: corrupted signature verified anyway."),
    }
}
