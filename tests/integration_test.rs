mod common;

use common::{Scenario, WORKED_SCENARIOS};
use proximity_gates::{Gate, and, nand, not, nxor, or, xor};

#[test]
fn worked_scenarios_hold_through_free_functions() {
    assert!(not(0.0, 10.0, 12.0, 0.5));
    assert!(and(0.0, 10.0, 5.0, 1.0));
    assert!(!nand(0.0, 10.0, 5.0, 1.0));
    assert!(or(0.0, 10.0, 1.0, 0.2));
    assert!(xor(0.0, 10.0, 1.0, 0.2));
    assert!(!nxor(0.0, 10.0, 1.0, 0.2));
}

#[test]
fn worked_scenarios_hold_through_gate_dispatch() {
    for Scenario { gate, start, end, value, threshold, expected } in WORKED_SCENARIOS {
        assert_eq!(gate.evaluate(start, end, value, threshold), expected, "{gate}({start}, {end}, {value}, {threshold})");
        assert_eq!(gate.evaluate(end, start, value, threshold), expected, "{gate} with swapped endpoints");
    }
}

#[test]
fn worked_scenarios_hold_for_f32() {
    for Scenario { gate, start, end, value, threshold, expected } in WORKED_SCENARIOS {
        let got = gate.evaluate(start as f32, end as f32, value as f32, threshold as f32);
        assert_eq!(got, expected, "{gate} as f32");
    }
}

#[test]
fn firing_lists_the_worked_gates_that_hold() {
    for Scenario { gate, start, end, value, threshold, expected } in WORKED_SCENARIOS {
        let fired = Gate::firing(start, end, value, threshold);
        assert_eq!(fired.contains(&gate), expected, "{gate}");
    }
}

#[test]
fn unknown_gate_name_is_a_domain_error() {
    let err = "maybe".parse::<Gate>().expect_err("unknown gate");
    assert!(err.to_string().contains("Unknown gate 'maybe'"));
}
