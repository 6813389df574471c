use std::{process::ExitCode, thread};

use kiexplain::{browser::PROMPT, formatter::common::stats::GroupStats, prelude::*};
use pretty_assertions::assert_eq;

mod lib;
use lib::*;

fn math_failure() -> FailureRecord {
    FailureRecord::new("Math divides by zero", "Math")
        .with_message("divided by 0")
        .with_backtrace(["./spec/math_spec.rb:12"])
}

fn math_run() -> Vec<RunEvent> {
    vec![
        RunEvent::Start { count: 3 },
        group_started("Math", 1),
        passed("Math adds", "Math"),
        passed("Math subtracts", "Math"),
        failed("Math divides by zero", "Math"),
        group_finished("Math", 1),
        RunEvent::Stop {
            examples: 3,
            failures: vec![math_failure()],
        },
        RunEvent::Close,
    ]
}

#[test]
fn math_end_to_end() {
    let output = Buffer::default();
    let mut formatter = formatter(&output, "1\na\nq\n");
    let report = replay(math_run(), &mut formatter);

    assert!(report.fmt_errors.is_empty());
    assert_eq!(report.exit_code(), ExitCode::FAILURE);
    assert_eq!(
        formatter.state().group_stats("Math"),
        GroupStats {
            passed: 2,
            failed: 1
        }
    );
    assert_eq!(formatter.state().fails_count(), 1);

    let rule = "\n----------\n";
    let prompt = format!("\n{PROMPT}➡️  ");
    let expected = [
        "<clear>",
        rule,
        "  <time> - Starting 3 Tests",
        rule,
        "\n",
        "- Math:\n",
        "  ✅ PASS - Math adds \n",
        "  ✅ PASS - Math subtracts \n",
        "  ❌ FAIL #1 - Math divides by zero\n",
        "  😡 1 example fails\n\n",
        rule,
        "  Finished. 1/3 tests failed 😡",
        rule,
        prompt.as_str(),
        "<clear>",
        rule,
        " FAIL #1: ",
        "Math\n",
        "          Math divides by zero",
        rule,
        "\n",
        " ERROR MESSAGE:\n",
        " divided by 0\n",
        "\n",
        " BACKTRACE:\n",
        " ./spec/math_spec.rb:12\n",
        rule,
        prompt.as_str(),
        "<clear>",
        rule,
        "FAIL #1 - Math divides by zero\n",
        rule,
        prompt.as_str(),
        "\n",
    ]
    .concat();

    assert_eq!(sanitize_clock(&output.try_to_string().unwrap()), expected);
}

#[test]
fn all_pass_run() {
    let output = Buffer::default();
    let mut formatter = formatter(&output, "");
    let report = replay(
        [
            RunEvent::Start { count: 2 },
            group_started("Strings", 1),
            passed("Strings concat", "Strings"),
            pending("Strings reverse", "Strings"),
            passed("Strings split", "Strings"),
            group_finished("Strings", 1),
            RunEvent::Stop {
                examples: 2,
                failures: Vec::new(),
            },
            RunEvent::Close,
        ],
        &mut formatter,
    );

    assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    assert_eq!((report.passed, report.pending), (2, 1));

    let output = sanitize_clock(&output.try_to_string().unwrap());
    assert!(output.contains("  ✅ PASS - Strings concat \n*  ✅ PASS - Strings split \n"));
    assert!(output.contains("  🎉 ALL PASS\n\n"));
    assert!(output.contains("  Finished. No tests failed. 🎉🎉🎉"));
    assert!(!output.contains(PROMPT));
}

#[test]
fn nested_groups_roll_up() {
    let output = Buffer::default();
    let mut formatter = formatter(&output, "q\n");
    replay(
        [
            RunEvent::Start { count: 4 },
            group_started("Parser", 1),
            group_started("literals", 2),
            passed("Parser literals ints", "literals"),
            failed("Parser literals floats", "literals"),
            group_finished("literals", 2),
            group_started("errors", 2),
            group_started("recovery", 3),
            passed("Parser errors recovery skips", "recovery"),
            group_finished("recovery", 3),
            group_finished("errors", 2),
            group_finished("Parser", 1),
            group_started("Lexer", 1),
            failed("Lexer tokens", "Lexer"),
            group_finished("Lexer", 1),
            RunEvent::Stop {
                examples: 4,
                failures: vec![
                    FailureRecord::new("Parser literals floats", "literals"),
                    FailureRecord::new("Lexer tokens", "Lexer"),
                ],
            },
            RunEvent::Close,
        ],
        &mut formatter,
    );

    let state = formatter.state();
    assert_eq!(state.group_stats("Parser"), GroupStats { passed: 2, failed: 1 });
    assert_eq!(state.group_stats("Lexer"), GroupStats { passed: 0, failed: 1 });
    assert_eq!(state.group_stats("literals"), GroupStats::default());
    assert_eq!(state.fails_count(), 2);

    let output = output.try_to_string().unwrap();
    assert!(!output.contains("- literals:"));
    assert!(!output.contains("- recovery:"));
    assert_eq!(output.matches(" example fails\n\n").count(), 2);
    assert!(output.contains("  ❌ FAIL #1 - Parser literals floats\n"));
    assert!(output.contains("  ❌ FAIL #2 - Lexer tokens\n"));
    assert!(output.contains("  Finished. 2/4 tests failed 😡"));
}

#[test]
fn engine_on_another_thread() {
    let (tx, rx) = channel();
    let engine = thread::spawn(move || -> Result<(), kiexplain::source::SourceError> {
        tx.start(3)?;
        tx.group_started("Math", 1)?;
        tx.example_passed("Math adds", "Math")?;
        tx.example_passed("Math subtracts", "Math")?;
        tx.example_failed("Math divides by zero", "Math")?;
        tx.group_finished("Math", 1)?;
        tx.stop(3, vec![math_failure()])?;
        tx.close()
    });

    let output = Buffer::default();
    let mut formatter = formatter(&output, "q\n");
    let report = rx.drive(&mut formatter);
    engine.join().unwrap().unwrap();

    assert!(report.closed);
    assert_eq!(report.failed, 1);
    assert_eq!(
        formatter.state().group_stats("Math"),
        GroupStats {
            passed: 2,
            failed: 1
        }
    );
    assert!(output.try_to_string().unwrap().contains("1/3 tests failed"));
}

#[test]
fn browse_all_without_prompting() {
    let output = Buffer::default();
    let mut formatter = formatter(&output, "").with_browse_mode(BrowseMode::All);
    replay(math_run(), &mut formatter);

    let output = output.try_to_string().unwrap();
    assert!(!output.contains(PROMPT));
    assert!(output.contains(" FAIL #1: Math\n"));
    assert!(output.contains(" divided by 0\n"));
}
