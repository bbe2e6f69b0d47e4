use anyhow::Context;
use parse_ints::parse_ints;

type Error = anyhow::Error;

/// Number of measurements summed into one window.
pub const WINDOW: usize = 3;

pub fn parse_input(puzzle: &str) -> Result<Vec<u32>, Error> {
    parse_ints(puzzle.as_bytes()).context("puzzle input must be whitespace-separated depths")
}

/// Counts the values that are strictly greater than the value before them.
///
/// Works on a single forward pass, so the input never needs to be collected.
/// The first value has nothing to compare against and never counts.
pub fn count_increasing<T, I>(values: I) -> usize
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter();
    let Some(mut prev) = values.next() else {
        return 0;
    };
    values
        .filter(|&curr| std::mem::replace(&mut prev, curr) < curr)
        .count()
}

/// Sums of every window of [`WINDOW`] consecutive depths, in order.
pub fn window_sums(depths: &[u32]) -> impl Iterator<Item = u64> + '_ {
    depths
        .windows(WINDOW)
        .map(|window| window.iter().copied().map(u64::from).sum())
}

/// Counts increasing window sums, keeping a running sum: the next window is
/// the current one plus the depth entering it minus the depth leaving it.
pub fn count_increasing_windows(depths: &[u32]) -> usize {
    if depths.len() <= WINDOW {
        return 0;
    }
    let mut window_sum: u64 = depths[..WINDOW].iter().copied().map(u64::from).sum();
    let mut count = 0;
    for (&leaving, &entering) in depths.iter().zip(&depths[WINDOW..]) {
        // `window_sum` still contains `leaving`, so this can't underflow.
        let next_sum = window_sum + u64::from(entering) - u64::from(leaving);
        if next_sum > window_sum {
            count += 1;
        }
        window_sum = next_sum;
    }
    count
}

/// Counts increasing window sums by differencing a prefix-sum table.
pub fn count_increasing_windows_prefix_sum(depths: &[u32]) -> usize {
    if depths.len() <= WINDOW {
        return 0;
    }
    // prefix[i] is the sum of depths[..i], so prefix[0] == 0 covers the
    // window that starts at the very first depth.
    let prefix = std::iter::once(0u64)
        .chain(depths.iter().scan(0u64, |sum, &depth| {
            *sum += u64::from(depth);
            Some(*sum)
        }))
        .collect::<Vec<_>>();
    let window_sum = |start: usize| prefix[start + WINDOW] - prefix[start];
    (1..=(depths.len() - WINDOW))
        .filter(|&start| window_sum(start - 1) < window_sum(start))
        .count()
}

/// Counts increasing window sums over the lazily computed window view.
pub fn count_increasing_windows_lazy(depths: &[u32]) -> usize {
    count_increasing(window_sums(depths))
}

pub fn solve_puzzle_part1(depths: &[u32]) -> usize {
    count_increasing(depths.iter().copied())
}

pub fn solve_puzzle_part2(depths: &[u32]) -> usize {
    count_increasing_windows(depths)
}
