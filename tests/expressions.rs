use funcparse::{
    Bindings, Error, Function, Operator, Program, RuntimeError, Token,
    error::{MissingParen, ParseError},
    evaluate, to_postfix, tokenize, validate_parens,
};

fn eval(expression: &str) -> f64 {
    evaluate::<f64>(expression, &Bindings::new()).unwrap_or_else(|e| {
                                                     panic!("'{expression}' failed: {e}")
                                                 })
}

fn eval_with(expression: &str, bindings: &Bindings) -> f64 {
    evaluate::<f64>(expression, bindings).unwrap_or_else(|e| panic!("'{expression}' failed: {e}"))
}

fn eval_err(expression: &str) -> Error {
    match evaluate::<f64>(expression, &Bindings::new()) {
        Ok(value) => panic!("'{expression}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("3+4*2"), 11.0);
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("10-2*3"), 4.0);
    assert_eq!(eval("1+2/4"), 1.5);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("((1+1))*3"), 6.0);
}

#[test]
fn left_associative_chains() {
    assert_eq!(eval("100-20-30"), 50.0);
    assert_eq!(eval("20/2/5"), 2.0);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("(2^3)^2"), 64.0);
    assert_eq!(eval("2^0.5"), 2.0_f64.powf(0.5));
}

#[test]
fn division() {
    assert_eq!(eval("1/4"), 0.25);
    assert_eq!(eval("7/2"), 3.5);
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("sin(0)"), 0.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert_eq!(eval("tan(0)"), 0.0);
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("exp(0)"), 1.0);
    assert_eq!(eval("log(1)"), 0.0);
    assert_eq!(eval("sqrt(3*3+4*4)"), 5.0);
}

#[test]
fn functions_compose() {
    assert_eq!(eval("sqrt(sqrt(16))"), 2.0);
    assert_eq!(eval("sin(cos(0))"), 1.0_f64.sin());
    assert_eq!(eval("exp(log(5))"), 5.0_f64.ln().exp());
    assert_eq!(eval("sin(0)+cos(0)"), 1.0);
    assert_eq!(eval("sin(1)^2+cos(1)^2"),
               1.0_f64.sin().powf(2.0) + 1.0_f64.cos().powf(2.0));
}

#[test]
fn variable_bindings() {
    assert_eq!(eval_with("x*2", &Bindings::from([('x', 5.0)])), 10.0);
    assert_eq!(eval_with("x^2+x", &Bindings::from([('x', 3.0)])), 12.0);
    assert_eq!(eval_with("x+y", &Bindings::from([('x', 1.0), ('y', 2.0)])), 3.0);
}

#[test]
fn unbound_variables_default_to_zero() {
    assert_eq!(eval("x*2"), 0.0);
    assert_eq!(eval_with("x+y", &Bindings::from([('x', 4.0)])), 4.0);
    assert_eq!(eval("cos(x)"), 1.0);
}

#[test]
fn unary_minus() {
    assert_eq!(eval("-3+5"), 2.0);
    assert_eq!(eval("2*-3"), -6.0);
    assert_eq!(eval("-(2+3)"), -5.0);
    assert_eq!(eval("5--3"), 8.0);
    assert_eq!(eval("2^-1"), 0.5);
    assert_eq!(eval("sin(-0)"), 0.0);
    assert_eq!(eval_with("-x^2", &Bindings::from([('x', 3.0)])), -9.0);
    assert_eq!(eval("-2^2"), -4.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(eval(" 1 + 2 "), 3.0);
    assert_eq!(eval("1\t*\t3"), 3.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(eval_err("1/0"), Error::Runtime(RuntimeError::DivisionByZero)));
    // An unbound divisor reads as 0.0 and trips the same error.
    assert!(matches!(eval_err("1/y"), Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(eval_err("1/(2-2)"), Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn unmatched_open_paren_reports_its_index() {
    let err = validate_parens("(1+2").unwrap_err();
    assert!(matches!(err,
                     ParseError::UnmatchedParen { position: 0,
                                                  missing: MissingParen::Closing,
                                                  .. }));
    assert_eq!(err.to_string(),
               "Invalid Expression. Missing Parenthesis 0\n (1+2\n ^ Does not have a closing parenthesis");
}

#[test]
fn unmatched_close_paren_reports_its_index() {
    let err = validate_parens("1+2)").unwrap_err();
    assert!(matches!(err,
                     ParseError::UnmatchedParen { position: 3,
                                                  missing: MissingParen::Opening,
                                                  .. }));
    assert_eq!(err.to_string(),
               "Invalid Expression. Missing Parenthesis 3\n 1+2)\n    ^ To match this parenthesis");
}

#[test]
fn innermost_unclosed_paren_wins() {
    // The scan pairs inner parens first, so the leftover one is reported.
    let err = validate_parens("((1+2)").unwrap_err();
    assert!(matches!(err,
                     ParseError::UnmatchedParen { position: 0,
                                                  missing: MissingParen::Closing,
                                                  .. }));
}

#[test]
fn lexical_errors_carry_positions() {
    assert!(matches!(tokenize("1 $ 2").unwrap_err(),
                     ParseError::UnexpectedCharacter { found: '$', position: 2 }));

    assert!(matches!(tokenize("1..2").unwrap_err(),
                     ParseError::InvalidNumber { position: 0, .. }));

    assert!(matches!(tokenize("2+foo(3)").unwrap_err(),
                     ParseError::UnknownFunction { position: 2, .. }));
}

#[test]
fn variables_are_single_letters() {
    assert!(matches!(tokenize("abc").unwrap_err(),
                     ParseError::InvalidVariable { position: 0, .. }));
    // A function name without its parentheses is a variable position too.
    assert!(matches!(tokenize("sin+1").unwrap_err(),
                     ParseError::InvalidVariable { position: 0, .. }));
    assert!(matches!(tokenize("sin (0)").unwrap_err(),
                     ParseError::InvalidVariable { position: 0, .. }));
}

#[test]
fn tokenizer_output_shape() {
    assert_eq!(tokenize("sqrt(x)*2").unwrap(),
               vec![Token::Function(Function::Sqrt),
                    Token::Operator(Operator::LParen),
                    Token::Variable { name:  'x',
                                      value: 0.0, },
                    Token::Operator(Operator::RParen),
                    Token::Operator(Operator::Mul),
                    Token::Number(2.0)]);
}

#[test]
fn postfix_order() {
    let program = to_postfix(tokenize("3+4*2").unwrap()).unwrap();
    assert_eq!(program.tokens(),
               &[Token::Number(3.0),
                 Token::Number(4.0),
                 Token::Number(2.0),
                 Token::Operator(Operator::Mul),
                 Token::Operator(Operator::Add)]);
}

#[test]
fn postfix_replay_leaves_one_value() {
    // Valid inputs across the grammar; each replay must finish cleanly,
    // which is exactly the one-value stack invariant.
    let expressions = ["1",
                       "x",
                       "1+2*3-4/5",
                       "2^3^2",
                       "(1+2)*(3+4)",
                       "sin(x)^2+cos(x)^2",
                       "sqrt(exp(log(4)))",
                       "-(x+1)*-2",
                       "tan(x/(1+x))"];

    for expression in expressions {
        let program = to_postfix(tokenize(expression).unwrap()).unwrap();
        program.evaluate::<f64>(&Bindings::from([('x', 0.5)]))
               .unwrap_or_else(|e| panic!("'{expression}' broke the stack invariant: {e}"));
    }
}

#[test]
fn malformed_programs_are_reported_not_defaulted() {
    assert!(matches!(eval_err("1 2"), Error::Runtime(RuntimeError::MalformedProgram { .. })));
    assert!(matches!(eval_err(""), Error::Runtime(RuntimeError::MalformedProgram { .. })));
    assert!(matches!(eval_err("1+"), Error::Runtime(RuntimeError::MalformedProgram { .. })));
    assert!(matches!(eval_err("1,2"), Error::Runtime(RuntimeError::MalformedProgram { .. })));
}

#[test]
fn evaluation_is_deterministic() {
    let bindings = Bindings::from([('x', 0.7)]);
    let first = eval_with("sin(x)*exp(x)+x^3", &bindings);
    let second = eval_with("sin(x)*exp(x)+x^3", &bindings);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn integral_outputs_round_up() {
    assert_eq!(evaluate::<i32>("1/4", &Bindings::new()).unwrap(), 1);
    assert_eq!(evaluate::<i32>("-1/4", &Bindings::new()).unwrap(), 0);
    assert_eq!(evaluate::<i32>("3+4*2", &Bindings::new()).unwrap(), 11);
    assert_eq!(evaluate::<i64>("7/2", &Bindings::new()).unwrap(), 4);
    assert_eq!(evaluate::<f32>("1/4", &Bindings::new()).unwrap(), 0.25_f32);
}

#[test]
fn programs_are_reusable_across_bindings() {
    let program = Program::parse("x^2+1").unwrap();

    for i in 0..10 {
        let x = f64::from(i);
        let y: f64 = program.evaluate(&Bindings::from([('x', x)])).unwrap();
        assert_eq!(y, x * x + 1.0);
    }

    // The program itself never changes between samples.
    let again = Program::parse("x^2+1").unwrap();
    assert_eq!(program, again);
}
