use crate::add_test;
use crate::common::{Fixture, BINARY_DATA, MIXED_LINES};

const ESCAPED_V: &str = "^@^A\t\n^[^?M-^@M-^?\n";

// Test -n numbers every line
add_test!(number_all_lines, async {
    let mut fixture = Fixture::with_file("lines.txt", b"a\n\nb\n");

    for flag in ["-n", "--number"] {
        let output = fixture.run_cargo(&[flag, "lines.txt"]).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, "     1\ta\n     2\t\n     3\tb\n");
    }
});

// Test -b skips blank lines and overrides -n
add_test!(number_nonblank, async {
    let mut fixture = Fixture::with_file("lines.txt", b"a\n\nb\n");

    for args in [
        &["-b", "lines.txt"][..],
        &["--number-nonblank", "lines.txt"][..],
        &["-n", "-b", "lines.txt"][..],
        &["-bn", "lines.txt"][..],
    ] {
        let output = fixture.run_cargo(args).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, "     1\ta\n\n     2\tb\n");
    }
});

// Test -s keeps one blank line per run
add_test!(squeeze_blank, async {
    let mut fixture = Fixture::with_file("mixed.txt", MIXED_LINES.as_bytes());

    for flag in ["-s", "--squeeze-blank"] {
        let output = fixture.run_cargo(&[flag, "mixed.txt"]).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, "one\n\n\ttwo\n\nthree\n\nfour");
    }
});

// Test -s combined with -n numbers only the kept lines
add_test!(squeeze_and_number, async {
    let mut fixture = Fixture::with_file("mixed.txt", MIXED_LINES.as_bytes());

    let output = fixture.run_cargo(&["-sn", "mixed.txt"]).await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        "     1\tone\n     2\t\n     3\t\ttwo\n     4\t\n     5\tthree\n     6\t\n     7\tfour"
    );
});

// Test -E marks line ends but not an unterminated last line
add_test!(show_ends, async {
    let mut fixture = Fixture::with_file("ends.txt", b"a\n\nb");

    for flag in ["-E", "--show-ends"] {
        let output = fixture.run_cargo(&[flag, "ends.txt"]).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, "a$\n$\nb");
    }
});

// Test -T shows tabs
add_test!(show_tabs, async {
    let mut fixture = Fixture::with_file("tabs.txt", b"a\tb\t\n");

    for flag in ["-T", "--show-tabs"] {
        let output = fixture.run_cargo(&[flag, "tabs.txt"]).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, "a^Ib^I\n");
    }
});

// Test -v uses caret and M- notation but leaves tab and newline alone
add_test!(show_nonprinting, async {
    let mut fixture = Fixture::with_file("binary.bin", BINARY_DATA);

    for flag in ["-v", "--show-nonprinting"] {
        let output = fixture.run_cargo(&[flag, "binary.bin"]).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, ESCAPED_V);
    }
});

// Test the combined aliases -A, -e and -t
add_test!(combined_aliases, async {
    let mut fixture = Fixture::with_file("binary.bin", BINARY_DATA);

    let cases = [
        (&["-A"][..], "^@^A^I$\n^[^?M-^@M-^?$\n"),
        (&["--show-all"][..], "^@^A^I$\n^[^?M-^@M-^?$\n"),
        (&["-vET"][..], "^@^A^I$\n^[^?M-^@M-^?$\n"),
        (&["-e"][..], "^@^A\t$\n^[^?M-^@M-^?$\n"),
        (&["-t"][..], "^@^A^I\n^[^?M-^@M-^?\n"),
    ];

    for (flags, expected) in cases {
        let mut args = flags.to_vec();
        args.push("binary.bin");
        let output = fixture.run_cargo(&args).await;
        assert!(output.status.success());
        assert_eq!(output.stdout, expected, "flags {flags:?}");
    }
});

// Test -u is accepted and ignored
add_test!(unbuffered_is_ignored, async {
    let mut fixture = Fixture::with_file("plain.txt", b"plain\n");

    let output = fixture.run_cargo(&["-u", "plain.txt"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "plain\n");
});

// Test options may follow file names
add_test!(options_after_files, async {
    let mut fixture = Fixture::with_file("late.txt", b"x\n");

    let output = fixture.run_cargo(&["late.txt", "-E"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "x$\n");
});

// Test `--` ends option parsing
add_test!(double_dash, async {
    let mut fixture = Fixture::with_file("-n", b"not an option\n");

    let output = fixture.run_cargo(&["--", "-n"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "not an option\n");
});

// Test --help prints usage and succeeds
add_test!(help, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo(&["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("Usage: cat [OPTION]... [FILE]..."));
    assert!(output.stdout.contains("--show-nonprinting"));
    assert!(output.stderr.is_empty());
});

// Test --version prints the program name and succeeds
add_test!(version, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo(&["--version"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("cat "));
});

// Test an unknown short option is rejected before any input is read
add_test!(invalid_short_option, async {
    let mut fixture = Fixture::with_file("a.txt", b"a\n");

    let output = fixture.run_cargo(&["-x", "a.txt"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout_raw.is_empty());
    assert_eq!(
        output.stderr,
        "cat: invalid option -- 'x'\nTry 'cat --help' for more information.\n"
    );
});

// Test an unknown long option is rejected
add_test!(invalid_long_option, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo(&["--frobnicate"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout_raw.is_empty());
    assert_eq!(
        output.stderr,
        "cat: unrecognized option '--frobnicate'\nTry 'cat --help' for more information.\n"
    );
});

// Test a flag given a value is rejected with the classic wording
add_test!(flag_with_value, async {
    let mut fixture = Fixture::with_file("a.txt", b"a\n");

    let output = fixture.run_cargo(&["--number=3", "a.txt"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout_raw.is_empty());
    assert_eq!(
        output.stderr,
        "cat: option '--number' doesn't allow an argument\nTry 'cat --help' for more information.\n"
    );
});
