/// Floor of the square root of `n`, exact over the whole `u64` range.
///
/// Integer Newton iteration started from a power of two at or above the
/// root, so the sequence decreases monotonically onto the floor.
pub fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    let bits = u64::BITS - n.leading_zeros();
    // 2^ceil(bits/2) >= sqrt(n), and at most 2^32
    let mut x = 1u64 << ((bits + 1) / 2);
    loop {
        // x >= sqrt(n) keeps n / x <= 2^32, so the sum cannot overflow
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
