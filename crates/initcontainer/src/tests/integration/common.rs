#![cfg(test)]

use std::cell::RefCell;

use crate::container::Container;
use crate::error::BoxError;

/// Execution trace shared by every action in a test: `(level, position)` in run order
pub type Trace = RefCell<Vec<(usize, usize)>>;

/// Register `sizes[level]` tracing actions at each level, interleaving the
/// registrations across levels so that registration order differs from
/// execution order.
pub fn register_tracing_actions<'a>(container: &mut Container<'a, BoxError>, trace: &'a Trace, sizes: &[usize]) {
    let max = sizes.iter().copied().max().unwrap_or(0);
    for position in 0..max {
        for level in (0..sizes.len()).rev() {
            if position < sizes[level] {
                container
                    .register_func(
                        move || {
                            trace.borrow_mut().push((level, position));
                            Ok(())
                        },
                        level,
                    )
                    .expect("Level should be in range");
            }
        }
    }
}

/// The trace a correct container must produce for `sizes`
pub fn expected_trace(sizes: &[usize]) -> Vec<(usize, usize)> {
    sizes
        .iter()
        .enumerate()
        .flat_map(|(level, &size)| (0..size).map(move |position| (level, position)))
        .collect()
}
