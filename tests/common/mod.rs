use proximity_gates::Gate;

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub gate: Gate,
    pub start: f64,
    pub end: f64,
    pub value: f64,
    pub threshold: f64,
    pub expected: bool,
}

const fn scenario(gate: Gate, start: f64, end: f64, value: f64, threshold: f64, expected: bool) -> Scenario {
    Scenario { gate, start, end, value, threshold, expected }
}

pub const WORKED_SCENARIOS: [Scenario; 6] = [
    scenario(Gate::Not, 0.0, 10.0, 12.0, 0.5, true),
    scenario(Gate::And, 0.0, 10.0, 5.0, 1.0, true),
    scenario(Gate::Nand, 0.0, 10.0, 5.0, 1.0, false),
    scenario(Gate::Or, 0.0, 10.0, 1.0, 0.2, true),
    scenario(Gate::Xor, 0.0, 10.0, 1.0, 0.2, true),
    scenario(Gate::Nxor, 0.0, 10.0, 1.0, 0.2, false),
];
