//! End-to-end tests feeding whole scripts through the calculator.

use poly_calc::Calculator;
use pretty_assertions::assert_eq;
use std::{
    io::Write,
    process::{Command, Stdio},
};

/// Runs the calculator on the given script, returning its stdout and stderr.
fn run(script: &str) -> (String, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    Calculator::new().run(script.as_bytes(), &mut out, &mut err).unwrap();

    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn arithmetic() {
    let (out, err) = run("\
(1,2)+(2,3)
(3,2)+(-2,3)
ADD
PRINT
CLONE
MUL
PRINT
NEG
PRINT
IS_COEFF
IS_ZERO
DEG
");

    assert_eq!(out, "\
(4,2)
(16,4)
(-16,4)
0
0
4
");
    assert_eq!(err, "");
}

#[test]
fn constants_collapse() {
    let (out, err) = run("\
(1,1)+(5,0)
(-1,1)
ADD
IS_COEFF
PRINT
ZERO
IS_ZERO
DEG
");

    assert_eq!(out, "1\n5\n1\n-1\n");
    assert_eq!(err, "");
}

#[test]
fn multivariate() {
    let (out, err) = run("\
((1,0)+(1,1),2)+((3,4),3)
DEG
DEG_BY 0
DEG_BY 1
DEG_BY 2
AT 2
PRINT
AT -1
PRINT
");

    assert_eq!(out, "7\n3\n4\n0\n(4,0)+(4,1)+(24,4)\n24\n");
    assert_eq!(err, "");
}

#[test]
fn equality() {
    let (out, err) = run("\
(1,2)+(3,0)
(3,0)+(1,2)
IS_EQ
ADD
(2,2)+(6,0)
IS_EQ
(2,2)
IS_EQ
");

    assert_eq!(out, "1\n1\n0\n");
    assert_eq!(err, "");
}

#[test]
fn composition() {
    let (out, err) = run("\
(1,4)
((1,0)+(1,1),1)
(((1,6),5),2)+((1,0)+(1,2),3)+(5,7)
COMPOSE 2
PRINT
3
(2,1)+(1,3)
COMPOSE 1
PRINT
(1,2)
COMPOSE 0
PRINT
");

    assert_eq!(out, "\
(1,12)+((1,0)+(2,1)+(1,2),14)+(5,28)
33
0
");
    assert_eq!(err, "");
}

#[test]
fn wrapping_arithmetic() {
    let (out, err) = run("\
(4294967296,1)
4294967296
MUL
IS_ZERO
(1,64)
AT 2
PRINT
9223372036854775807
1
ADD
PRINT
");

    assert_eq!(out, "1\n0\n-9223372036854775808\n");
    assert_eq!(err, "");
}

#[test]
fn errors() {
    let (out, err) = run("\
# errors are reported with their line number
ADD

(1,2)+
(1,2147483648)
9223372036854775808
(1, 2)
-
DEG_BY
DEG_BYX 1
AT x
COMPOSE -1
FOO
(1,1)
COMPOSE 1
DEG_BY 18446744073709551616
PRINT
");

    assert_eq!(out, "(1,1)\n");
    assert_eq!(err, "\
ERROR 2 STACK UNDERFLOW
ERROR 4 WRONG POLY
ERROR 5 WRONG POLY
ERROR 6 WRONG POLY
ERROR 7 WRONG POLY
ERROR 8 WRONG POLY
ERROR 9 DEG BY WRONG VARIABLE
ERROR 10 WRONG COMMAND
ERROR 11 AT WRONG VALUE
ERROR 12 COMPOSE WRONG PARAMETER
ERROR 13 WRONG COMMAND
ERROR 15 STACK UNDERFLOW
ERROR 16 DEG BY WRONG VARIABLE
");
}

#[test]
fn exponents_do_not_wrap() {
    let (out, err) = run("\
(1,2147483647)
CLONE
MUL
(1,2)
MUL
IS_COEFF
DEG
PRINT
");

    assert_eq!(out, "0\n4294967296\n(1,4294967296)\n");
    assert_eq!(err, "");
}

#[test]
fn nesting_limit() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ",1)".repeat(depth));
    let script = format!("{}\nDEG\n{}\nPRINT\n", nested(poly_parser::MAX_DEPTH), nested(poly_parser::MAX_DEPTH + 1));
    let (out, err) = run(&script);

    assert_eq!(out, format!("{}\n{}\n", poly_parser::MAX_DEPTH, nested(poly_parser::MAX_DEPTH)));
    assert_eq!(err, "ERROR 3 WRONG POLY\n");
}

#[test]
fn nul_byte_in_command() {
    let (out, err) = run("ZERO\nPRINT\0\nPRINT\n");

    assert_eq!(out, "0\n");
    assert_eq!(err, "ERROR 2 WRONG COMMAND\n");
}

#[test]
fn last_line_without_terminator() {
    let (out, err) = run("5\nPRINT");

    assert_eq!(out, "5\n");
    assert_eq!(err, "");
}

#[test]
fn binary_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_poly-calc"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"(1,1)\n(1,1)\nMUL\nPRINT\nPOP\nPOP\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "(1,2)\n");
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "ERROR 6 STACK UNDERFLOW\n");
}
