//! Bounded polling.

/// Polls `read` until `done` accepts a value or `attempts` is exhausted.
///
/// Returns `Ok` with the first accepted value, or `Err` with the last value
/// read once the budget runs out. The budget bounds worst case wall clock
/// wait by iteration count, not by a clock; callers tune it to their bus
/// latency. A budget of zero performs no reads and reports `Err(0)`.
pub fn poll_until<R, P>(attempts: u32, mut read: R, done: P) -> Result<u32, u32>
where
    R: FnMut() -> u32,
    P: Fn(u32) -> bool,
{
    let mut last = 0;
    for _ in 0..attempts {
        last = read();
        if done(last) {
            return Ok(last);
        }
    }
    Err(last)
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn stops_on_the_first_accepted_value() {
        let reads = Cell::new(0u32);
        let result = poll_until(
            100,
            || {
                reads.set(reads.get() + 1);
                if reads.get() == 7 { 0x3 } else { 0x2 }
            },
            |v| v & 1 != 0,
        );
        assert_eq!(result, Ok(0x3));
        assert_eq!(reads.get(), 7);
    }

    #[test]
    fn exhausts_the_budget_and_reports_the_last_value() {
        let reads = Cell::new(0u32);
        let result = poll_until(
            25,
            || {
                reads.set(reads.get() + 1);
                0x4
            },
            |v| v & 1 != 0,
        );
        assert_eq!(result, Err(0x4));
        assert_eq!(reads.get(), 25);
    }

    #[test]
    fn accepts_on_the_first_read() {
        let reads = Cell::new(0u32);
        let result = poll_until(
            1_000_000,
            || {
                reads.set(reads.get() + 1);
                1
            },
            |v| v & 1 != 0,
        );
        assert_eq!(result, Ok(1));
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn zero_budget_reads_nothing() {
        let result = poll_until(0, || panic!("must not read"), |_| true);
        assert_eq!(result, Err(0));
    }
}
