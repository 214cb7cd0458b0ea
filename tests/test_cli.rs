/// End-to-end tests for the percolation binary
///
/// Valid runs print exactly three result lines on stdout; invalid arguments
/// must fail with a non-zero status and print nothing on stdout.
use anyhow::Result;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_percolation"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()?)
}

fn parse_value(line: &str) -> f64 {
    line.split('=').nth(1).unwrap().trim().parse().unwrap()
}

#[test]
fn test_reports_mean_stddev_and_interval() -> Result<()> {
    let output = run(&["20", "40", "--seed", "7"])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected output: {stdout}");
    assert!(lines[0].starts_with("mean                    = "));
    assert!(lines[1].starts_with("stddev                  = "));
    assert!(lines[2].starts_with("95% confidence interval = ["));

    let mean = parse_value(lines[0]);
    let interval = lines[2]
        .split('=')
        .nth(1)
        .unwrap()
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']');
    let bounds: Vec<f64> = interval
        .split(',')
        .map(|v| v.trim().parse().unwrap())
        .collect();
    assert!(mean > 0.0 && mean < 1.0);
    assert!(bounds[0] <= mean && mean <= bounds[1]);

    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible_across_threads() -> Result<()> {
    let single = run(&["15", "20", "-s", "3"])?;
    let multi = run(&["15", "20", "-s", "3", "-t", "4"])?;
    assert!(single.status.success() && multi.status.success());
    assert_eq!(single.stdout, multi.stdout);
    Ok(())
}

#[test]
fn test_invalid_arguments_fail_without_output() -> Result<()> {
    let cases: [&[&str]; 6] = [
        &["0", "10"],
        &["10", "0"],
        &["-3", "10"],
        &["abc", "10"],
        &["10"],
        &[],
    ];
    for args in cases {
        let output = run(args)?;
        assert!(!output.status.success(), "{args:?} should fail");
        assert!(output.stdout.is_empty(), "{args:?} printed to stdout");
    }
    Ok(())
}
