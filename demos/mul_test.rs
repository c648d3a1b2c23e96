use std::env;

use bigmult::BigInt;

///! Multiplies two long pseudorandom numbers and reports the size of the
///! product.
///!  cargo run --example mul_test --release 100

fn main() {
    let args: Vec<String> = env::args().collect();

    let words: usize;

    match args.len() {
        2 => match args[1].parse::<usize>() {
            Ok(x) => words = x,
            Err(_) => {
                println!("Not an integer");
                return;
            }
        },
        _ => {
            println!("Usage: mul_test [num_words]");
            return;
        }
    }

    let a = BigInt::pseudorandom(words, 12345);
    let b = BigInt::pseudorandom(words, 67890);

    println!("Multiplying two {}-bit numbers", words * 32);
    match a.try_mul(&b) {
        Ok(c) => println!("Done: the product has {} words", c.len()),
        Err(e) => println!("Failed: {}", e),
    }
}
