#![feature(test)]

extern crate test;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_textbook::{cipher, KeyPair};
use test::Bencher;

fn get_key() -> KeyPair {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    KeyPair::generate_with_rng(&mut rng, 2048).unwrap()
}

#[bench]
fn bench_rsa_1024_gen_key(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    b.iter(|| {
        let key = KeyPair::generate_with_rng(&mut rng, 1024).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_rsa_2048_gen_key(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    b.iter(|| {
        let key = KeyPair::generate_with_rng(&mut rng, 2048).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_rsa_2048_encrypt(b: &mut Bencher) {
    let pair = get_key();
    let msg = [0x5a; 1024];

    b.iter(|| {
        let res = cipher::encrypt(pair.public_key(), &msg).unwrap();
        test::black_box(res);
    });
}

#[bench]
fn bench_rsa_2048_decrypt(b: &mut Bencher) {
    let pair = get_key();
    let ciphertext = cipher::encrypt(pair.public_key(), &[0x5a; 1024]).unwrap();

    b.iter(|| {
        let res = cipher::decrypt(pair.private_key(), &ciphertext).unwrap();
        test::black_box(res);
    });
}
