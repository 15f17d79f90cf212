use rand::Rng;

/// In-place Fisher–Yates shuffle, walking from the last index down to 1 and swapping each position with a uniformly
/// chosen index at or below it. Returns the number of swap steps taken, which is always `len - 1` for non-empty input.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) -> usize {
    let mut steps = 0;
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
        steps += 1;
    }
    steps
}

/// Picks `count` elements without replacement, keeping the order the shuffle produced. Returns fewer elements only when
/// `items` is shorter than `count`.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items.truncate(count);
    items
}
