#![cfg(test)]

use rand::Rng;

use crate::container::{from_fn, Container};
use crate::error::BoxError;

use super::common::{expected_trace, register_tracing_actions, Trace};

fn random_sizes(rng: &mut impl Rng) -> Vec<usize> {
    let num_levels: usize = rng.gen_range(5..25);
    (0..num_levels).map(|_| rng.gen_range(0..25)).collect()
}

#[test]
fn test_random_layouts_run_every_action_once_in_order() {
    let mut rng = rand::thread_rng();
    let repeats = rng.gen_range(1..=10);

    for _ in 0..repeats {
        let sizes = random_sizes(&mut rng);
        let trace = Trace::default();
        let mut container: Container<'_> = Container::new(sizes.len());

        register_tracing_actions(&mut container, &trace, &sizes);
        assert_eq!(container.len(), sizes.iter().sum::<usize>());

        container.init().expect("Init should succeed");

        assert_eq!(trace.into_inner(), expected_trace(&sizes), "Layout was {:?}", sizes);
    }
}

#[test]
fn test_random_layouts_through_initializers() {
    let mut rng = rand::thread_rng();
    let repeats = rng.gen_range(1..=10);

    for _ in 0..repeats {
        let sizes = random_sizes(&mut rng);
        let trace = Trace::default();
        let mut container: Container<'_> = Container::new(sizes.len());

        for (level, &size) in sizes.iter().enumerate() {
            for position in 0..size {
                let trace = &trace;
                let initializer = from_fn(move || -> Result<(), BoxError> {
                    trace.borrow_mut().push((level, position));
                    Ok(())
                });
                container.register(initializer, level).unwrap();
            }
        }

        container.init().expect("Init should succeed");

        assert_eq!(trace.into_inner(), expected_trace(&sizes), "Layout was {:?}", sizes);
    }
}

#[test]
fn test_random_failure_point_stops_everything_after_it() {
    let mut rng = rand::thread_rng();
    let sizes: Vec<usize> = (0..8).map(|_| rng.gen_range(1..6)).collect();
    let failing_level = rng.gen_range(0..sizes.len());
    let failing_position = rng.gen_range(0..sizes[failing_level]);

    let trace = Trace::default();
    let mut container: Container<'_> = Container::new(sizes.len());

    for (level, &size) in sizes.iter().enumerate() {
        for position in 0..size {
            let trace = &trace;
            container
                .register_func(
                    move || {
                        trace.borrow_mut().push((level, position));
                        if (level, position) == (failing_level, failing_position) {
                            return Err(format!("failed at {}:{}", level, position).into());
                        }
                        Ok(())
                    },
                    level,
                )
                .unwrap();
        }
    }

    let err = container.init().expect_err("Init should fail");
    assert_eq!(err.to_string(), format!("failed at {}:{}", failing_level, failing_position));

    let ran = trace.into_inner();
    let expected: Vec<(usize, usize)> = expected_trace(&sizes)
        .into_iter()
        .take_while(|&step| step <= (failing_level, failing_position))
        .collect();
    assert_eq!(ran, expected, "Layout {:?}, failing at {:?}", sizes, (failing_level, failing_position));
}
