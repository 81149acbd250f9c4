//! End-to-end session tests over the public API.

use roller_core::{run_session, DiceRoller, Roll, SessionConfig};

fn run(seed: u64) -> (roller_core::SessionReport, String) {
    let mut roller = DiceRoller::from_seed(seed);
    let mut out = Vec::new();
    let report =
        run_session(&SessionConfig::default(), &mut roller, &mut out).expect("write to Vec");
    (report, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn printed_rolls_match_generated_rolls() {
    let (report, output) = run(2024);
    let lines: Vec<&str> = output.lines().collect();

    for (i, roll) in report.rolls.iter().enumerate() {
        let line = lines[i];
        let face: u8 = line
            .rsplit(": ")
            .next()
            .and_then(|v| v.parse().ok())
            .expect("roll line ends in a face value");

        assert_eq!(face, roll.value());
        assert!(Roll::new(face).is_ok(), "printed face {} out of range", face);
        assert!(line.starts_with(&format!("roll {}:", i + 1)));
    }
}

#[test]
fn removal_phase_prints_five_largest_in_order() {
    let (report, output) = run(31337);

    let removed: Vec<u8> = output
        .lines()
        .filter_map(|l| l.strip_prefix("removed "))
        .map(|v| v.parse().expect("removed line holds a face value"))
        .collect();

    let mut expected: Vec<u8> = report.rolls.iter().map(|r| r.value()).collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));

    assert_eq!(removed.len(), 5);
    assert_eq!(removed, &expected[..5]);
    assert!(removed.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn drain_line_holds_remaining_faces_descending() {
    let (report, output) = run(5);

    let last_line = output.lines().last().expect("output has a drain line");
    let drained: Vec<u8> = last_line
        .bytes()
        .map(|b| {
            assert!(b.is_ascii_digit(), "drain line has a non-digit byte");
            b - b'0'
        })
        .collect();

    let mut expected: Vec<u8> = report.rolls.iter().map(|r| r.value()).collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));

    assert_eq!(drained, &expected[5..]);
    assert_eq!(report.removed.len() + drained.len(), report.rolls.len());
}

#[test]
fn session_output_is_reproducible() {
    let (_, output_a) = run(8675309);
    let (_, output_b) = run(8675309);

    assert_eq!(output_a, output_b);
}
