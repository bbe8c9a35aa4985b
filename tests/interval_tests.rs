//! Direct coverage of the primitive library, independent of the compiler.

use interval_eval::interval::{arithmetic, classify, constants, misc, pow, trig};
use interval_eval::interval::{Interval, IntervalClass, Rounding};

const EXACT: Rounding = Rounding::Exact;

fn ival(lo: f64, hi: f64) -> Interval {
    Interval::new(lo, hi)
}

#[test]
fn negation_flips_and_swaps_endpoints() {
    assert_eq!(arithmetic::neg(&ival(1.0, 3.0), EXACT), ival(-3.0, -1.0));
    assert_eq!(arithmetic::neg(&ival(-2.0, 5.0), EXACT), ival(-5.0, 2.0));
    assert!(arithmetic::neg(&Interval::empty(), EXACT).is_empty());
}

#[test]
fn addition_and_subtraction_are_endpointwise() {
    assert_eq!(
        arithmetic::add(&ival(1.0, 2.0), &ival(10.0, 20.0), EXACT),
        ival(11.0, 22.0)
    );
    assert_eq!(
        arithmetic::sub(&ival(1.0, 2.0), &ival(10.0, 20.0), EXACT),
        ival(-19.0, -8.0)
    );
    assert!(arithmetic::add(&ival(1.0, 2.0), &Interval::empty(), EXACT).is_empty());
}

#[test]
fn multiplication_covers_the_sign_cases() {
    assert_eq!(
        arithmetic::mul(&ival(2.0, 3.0), &ival(4.0, 5.0), EXACT),
        ival(8.0, 15.0)
    );
    assert_eq!(
        arithmetic::mul(&ival(2.0, 3.0), &ival(-5.0, -4.0), EXACT),
        ival(-15.0, -8.0)
    );
    assert_eq!(
        arithmetic::mul(&ival(-3.0, -2.0), &ival(-5.0, -4.0), EXACT),
        ival(8.0, 15.0)
    );
    // Both operands straddle zero; candidates from both pairings.
    assert_eq!(
        arithmetic::mul(&ival(-2.0, 3.0), &ival(-1.0, 4.0), EXACT),
        ival(-8.0, 12.0)
    );
}

#[test]
fn multiplication_with_unbounded_operands() {
    // 0 * inf resolves to 0 at the endpoint level.
    let out = arithmetic::mul(&ival(0.0, f64::INFINITY), &ival(0.0, 5.0), EXACT);
    assert_eq!(out, ival(0.0, f64::INFINITY));
}

#[test]
fn division_by_a_sign_stable_divisor() {
    assert_eq!(
        arithmetic::div(&ival(6.0, 6.0), &ival(2.0, 3.0), EXACT),
        ival(2.0, 3.0)
    );
    assert_eq!(
        arithmetic::div(&ival(-6.0, 6.0), &ival(2.0, 2.0), EXACT),
        ival(-3.0, 3.0)
    );
    assert_eq!(
        arithmetic::div(&ival(4.0, 8.0), &ival(-2.0, -1.0), EXACT),
        ival(-8.0, -2.0)
    );
}

#[test]
fn division_through_zero_is_empty() {
    assert!(arithmetic::div(&ival(1.0, 1.0), &ival(0.0, 0.0), EXACT).is_empty());
    assert!(arithmetic::div(&ival(1.0, 1.0), &ival(-1.0, 1.0), EXACT).is_empty());
}

#[test]
fn division_by_a_zero_touching_divisor_is_half_infinite() {
    let out = arithmetic::div(&ival(1.0, 1.0), &ival(0.0, 2.0), EXACT);
    assert_eq!(out, ival(0.5, f64::INFINITY));

    let out = arithmetic::div(&ival(-1.0, -1.0), &ival(0.0, 2.0), EXACT);
    assert_eq!(out, ival(f64::NEG_INFINITY, -0.5));

    let out = arithmetic::div(&ival(1.0, 2.0), &ival(-2.0, 0.0), EXACT);
    assert_eq!(out, ival(f64::NEG_INFINITY, -0.5));

    // Zero-straddling numerator loses both bounds.
    let out = arithmetic::div(&ival(-1.0, 1.0), &ival(0.0, 2.0), EXACT);
    assert!(out.is_whole());
}

#[test]
fn integer_powers_fold_by_parity() {
    assert_eq!(pow::pow(&ival(2.0, 3.0), 2, EXACT), ival(4.0, 9.0));
    assert_eq!(pow::pow(&ival(-3.0, -2.0), 2, EXACT), ival(4.0, 9.0));
    assert_eq!(pow::pow(&ival(-3.0, -2.0), 3, EXACT), ival(-27.0, -8.0));
    assert_eq!(pow::pow(&ival(-3.0, 2.0), 2, EXACT), ival(0.0, 9.0));
    assert_eq!(pow::pow(&ival(-3.0, 2.0), 3, EXACT), ival(-27.0, 8.0));
}

#[test]
fn zero_and_negative_exponents() {
    assert_eq!(pow::pow(&ival(-5.0, 5.0), 0, EXACT), Interval::singleton(1.0));
    assert_eq!(pow::pow(&ival(2.0, 4.0), -1, EXACT), ival(0.25, 0.5));
    assert!(pow::pow(&Interval::empty(), 2, EXACT).is_empty());
}

#[test]
fn sqrt_clips_to_the_non_negative_domain() {
    assert_eq!(pow::sqrt(&ival(4.0, 9.0), EXACT), ival(2.0, 3.0));
    assert_eq!(pow::sqrt(&ival(-4.0, 9.0), EXACT), ival(0.0, 3.0));
    assert!(pow::sqrt(&ival(-4.0, -1.0), EXACT).is_empty());
}

#[test]
fn sin_saturates_over_a_full_period() {
    let out = trig::sin(&ival(0.0, 7.0), EXACT);
    assert_eq!(out, ival(-1.0, 1.0));
    assert_eq!(trig::sin(&Interval::whole(), EXACT), ival(-1.0, 1.0));
}

#[test]
fn sin_uses_contained_extrema() {
    use std::f64::consts::PI;
    // [0, pi] contains the maximum but not the minimum.
    let out = trig::sin(&ival(0.0, PI), EXACT);
    assert_eq!(out.lo, 0.0);
    assert_eq!(out.hi, 1.0);
}

#[test]
fn cos_uses_contained_extrema() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    let out = trig::cos(&ival(0.0, PI), EXACT);
    assert_eq!(out, ival(-1.0, 1.0));

    // No extremum inside; endpoint values bound the result.
    let out = trig::cos(&ival(FRAC_PI_4, FRAC_PI_2), EXACT);
    assert!((out.lo - FRAC_PI_2.cos()).abs() < 1e-12);
    assert!((out.hi - FRAC_PI_4.cos()).abs() < 1e-12);
}

#[test]
fn tan_returns_whole_across_asymptotes() {
    assert!(trig::tan(&ival(1.0, 2.0), EXACT).is_whole());
    assert!(trig::tan(&ival(0.0, 4.0), EXACT).is_whole());

    let out = trig::tan(&ival(0.0, 1.0), EXACT);
    assert_eq!(out.lo, 0.0);
    assert_eq!(out.hi, 1.0f64.tan());
}

#[test]
fn exp_log_and_abs() {
    let out = misc::exp(&ival(0.0, 1.0), EXACT);
    assert_eq!(out, ival(1.0, std::f64::consts::E));

    assert_eq!(misc::log(&ival(1.0, 1.0), EXACT), ival(0.0, 0.0));
    assert_eq!(
        misc::log(&ival(0.0, 1.0), EXACT),
        ival(f64::NEG_INFINITY, 0.0)
    );
    assert!(misc::log(&ival(-2.0, -1.0), EXACT).is_empty());

    assert_eq!(misc::abs(&ival(-3.0, 2.0), EXACT), ival(0.0, 3.0));
    assert_eq!(misc::abs(&ival(-3.0, -2.0), EXACT), ival(2.0, 3.0));
    assert_eq!(misc::abs(&ival(2.0, 3.0), EXACT), ival(2.0, 3.0));
}

#[test]
fn outward_rounding_widens_each_endpoint_one_ulp() {
    let out = arithmetic::add(&ival(1.0, 1.0), &ival(2.0, 2.0), Rounding::Outward);
    assert!(out.lo < 3.0);
    assert!(out.hi > 3.0);
    assert_eq!(out.lo.next_up(), 3.0);
    assert_eq!(out.hi.next_down(), 3.0);
}

#[test]
fn outward_rounding_leaves_infinities_alone() {
    let out = arithmetic::div(&ival(1.0, 1.0), &ival(0.0, 2.0), Rounding::Outward);
    assert_eq!(out.hi, f64::INFINITY);
    assert!(out.lo < 0.5);
}

#[test]
fn constants_enclose_their_values() {
    assert!(constants::pi().contains(std::f64::consts::PI));
    assert!(constants::e().contains(std::f64::consts::E));
    assert_eq!(constants::zero(), Interval::singleton(0.0));
    assert_eq!(constants::one(), Interval::singleton(1.0));
    assert!(constants::whole().is_whole());
}

#[test]
fn predicates_and_display() {
    assert!(Interval::empty().is_empty());
    assert!(ival(1.0, -1.0).is_empty());
    assert!(ival(f64::NAN, 1.0).is_empty());
    assert!(ival(3.0, 3.0).is_singleton());
    assert!(ival(1.0, 2.0).contains(1.5));
    assert!(!ival(1.0, 2.0).contains(2.5));
    assert_eq!(ival(1.0, 2.0).width(), 1.0);
    assert_eq!(Interval::empty().width(), 0.0);

    assert_eq!(format!("{}", ival(1.0, 2.5)), "[1, 2.5]");
    assert_eq!(format!("{}", Interval::empty()), "[empty]");
}

#[test]
fn classification_strictness() {
    assert_eq!(classify(&ival(0.0, 1.0), false), IntervalClass::Pos);
    assert_eq!(classify(&ival(0.0, 1.0), true), IntervalClass::Mix);
    assert_eq!(classify(&ival(-1.0, 0.0), false), IntervalClass::Neg);
    assert_eq!(classify(&ival(-1.0, 1.0), true), IntervalClass::Mix);
}
