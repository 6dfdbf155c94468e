use mt19937::Mt19937;

// Seed array from the reference mt19937ar.c test program
#[allow(dead_code)]
pub const REFERENCE_KEY: [u32; 4] = [0x123, 0x234, 0x345, 0x456];

// draw `count` words from a generator
#[allow(dead_code)]
pub fn draw(rng: &mut Mt19937, count: usize) -> Vec<u32> {
    (0..count).map(|_| rng.extract_number()).collect()
}

// draw until the `nth` word (1-based) and return it
#[allow(dead_code)]
pub fn nth_word(rng: &mut Mt19937, nth: usize) -> u32 {
    let mut word = 0;
    for _i in 0..nth {
        word = rng.extract_number();
    }
    word
}
