use loop_core::fixed::FixedSteps;
use loop_core::game_loop::{GameLoop, FIXED_STEP};
use loop_core::interpolated::InterpolatedSteps;
use loop_core::variable::VariableSteps;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// Expand frame gaps into the monotonic timestamps a driver would deliver.
// The first timestamp is the silent baseline tick.
fn timestamps(gaps: &[u64]) -> Vec<u64> {
    let mut now = 0u64;
    let mut ticks = vec![now];
    for gap in gaps {
        now += gap;
        ticks.push(now);
    }
    ticks
}

fn clamped_total(gaps: &[u64], maximum_step: f64) -> f64 {
    gaps.iter()
        .map(|gap| (*gap as f64 / 1e9).min(maximum_step).max(0.0))
        .sum()
}

proptest! {
    #[test]
    fn fixed_accumulator_stays_inside_one_step(
        gaps in proptest::collection::vec(0u64..100_000_000, 1..100),
    ) {
        let mut game_loop = FixedSteps::new(|_| {}, || {}, |_| {});
        for now in timestamps(&gaps) {
            game_loop.tick(now);
            prop_assert!(game_loop.accumulated() >= 0.0);
            prop_assert!(game_loop.accumulated() < FIXED_STEP);
        }
    }

    #[test]
    fn fixed_steps_conserve_clamped_elapsed_time(
        gaps in proptest::collection::vec(0u64..100_000_000, 1..100),
        maximum_step in 0.001f64..0.1,
    ) {
        let steps = Rc::new(RefCell::new(0u64));
        let s = steps.clone();
        let mut game_loop = FixedSteps::new(move |_| *s.borrow_mut() += 1, || {}, |_| {});
        game_loop.set_maximum_step(maximum_step);
        for now in timestamps(&gaps) {
            game_loop.tick(now);
        }
        // every clamped second either became a step or still waits in the
        // accumulator
        let simulated = *steps.borrow() as f64 * FIXED_STEP + game_loop.accumulated();
        prop_assert!((simulated - clamped_total(&gaps, maximum_step)).abs() < 1e-6);
    }

    #[test]
    fn variable_updates_see_exactly_the_clamped_elapsed(
        gaps in proptest::collection::vec(0u64..2_000_000_000, 1..60),
        maximum_step in 0.001f64..0.5,
    ) {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let u = updates.clone();
        let mut game_loop = VariableSteps::new(move |dt| u.borrow_mut().push(dt), || {}, |_| {});
        game_loop.set_maximum_step(maximum_step);
        for now in timestamps(&gaps) {
            game_loop.tick(now);
        }
        let expected: Vec<f64> = gaps
            .iter()
            .map(|gap| (*gap as f64 / 1e9).min(maximum_step).max(0.0))
            .collect();
        prop_assert_eq!(updates.borrow().clone(), expected);
    }

    #[test]
    fn interpolation_blend_factors_stay_inside_the_unit_interval(
        gaps in proptest::collection::vec(0u64..60_000_000, 1..150),
    ) {
        let alphas = Rc::new(RefCell::new(Vec::new()));
        let a = alphas.clone();
        let mut game_loop =
            InterpolatedSteps::new(|_| {}, || {}, move |alpha| a.borrow_mut().push(alpha), |_| {});
        for now in timestamps(&gaps) {
            game_loop.tick(now);
            prop_assert!(game_loop.accumulated() >= 0.0);
            prop_assert!(game_loop.accumulated() < FIXED_STEP);
        }
        for alpha in alphas.borrow().iter() {
            prop_assert!((0.0..=1.0).contains(alpha), "alpha {} out of range", alpha);
        }
    }

    #[test]
    fn clamped_interpolation_respects_the_same_bounds(
        gaps in proptest::collection::vec(0u64..3_000_000_000, 1..80),
        maximum_step in 0.002f64..0.08,
    ) {
        let alphas = Rc::new(RefCell::new(Vec::new()));
        let a = alphas.clone();
        let mut game_loop =
            InterpolatedSteps::new(|_| {}, || {}, move |alpha| a.borrow_mut().push(alpha), |_| {});
        game_loop.set_maximum_step(maximum_step);
        for now in timestamps(&gaps) {
            game_loop.tick(now);
            prop_assert!(game_loop.accumulated() >= 0.0);
            prop_assert!(game_loop.accumulated() < FIXED_STEP);
        }
        for alpha in alphas.borrow().iter() {
            prop_assert!((0.0..=1.0).contains(alpha), "alpha {} out of range", alpha);
        }
    }

    #[test]
    fn simulated_time_never_outruns_clamped_wall_time(
        gaps in proptest::collection::vec(0u64..200_000_000, 1..100),
        maximum_step in 0.001f64..0.1,
    ) {
        for interpolated in [false, true] {
            let steps = Rc::new(RefCell::new(0u64));
            let s = steps.clone();
            let mut game_loop: Box<dyn GameLoop> = if interpolated {
                Box::new(InterpolatedSteps::new(
                    move |_| *s.borrow_mut() += 1,
                    || {},
                    |_| {},
                    |_| {},
                ))
            } else {
                Box::new(FixedSteps::new(move |_| *s.borrow_mut() += 1, || {}, |_| {}))
            };
            game_loop.set_maximum_step(maximum_step);
            for now in timestamps(&gaps) {
                game_loop.tick(now);
            }
            let simulated = *steps.borrow() as f64 * FIXED_STEP;
            prop_assert!(simulated <= clamped_total(&gaps, maximum_step) + 1e-6);
        }
    }
}
