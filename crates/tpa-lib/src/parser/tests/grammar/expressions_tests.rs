use crate::test_utils::{dump, dump_err, parse_notation};
use crate::{BinaryOp, OperandKind, Stmt};

fn assign(expr: &str) -> String {
    format!("PROGRAM_START IDENTIFIER(r) ASSIGN {expr} COMMAND_END PROGRAM_END")
}

#[test]
fn every_operator_kind() {
    let cases = [
        ("GREATER_EQUAL", BinaryOp::GreaterEqual),
        ("LESS", BinaryOp::Less),
        ("EQUAL", BinaryOp::Equal),
        ("GREATER", BinaryOp::Greater),
        ("LESS_EQUAL", BinaryOp::LessEqual),
        ("SUM", BinaryOp::Sum),
        ("SUBTRACT", BinaryOp::Subtract),
        ("MULTIPLY", BinaryOp::Multiply),
        ("DIVIDE", BinaryOp::Divide),
    ];

    for (name, op) in cases {
        let program = parse_notation(&assign(&format!("IDENTIFIER(a) {name} NUMBER(2)"))).unwrap();
        let Stmt::Assignment(assignment) = &program.statements[0] else {
            panic!("expected assignment");
        };
        let binary = assignment.value.binary.as_ref().unwrap();
        assert_eq!(binary.op.op, op, "{name}");
        assert_eq!(binary.op.text, op.symbol(), "{name}");
    }
}

#[test]
fn operand_kinds() {
    let program = parse_notation(&assign("LITERAL_STRING(txt)")).unwrap();
    let Stmt::Assignment(assignment) = &program.statements[0] else {
        panic!("expected assignment");
    };

    assert_eq!(assignment.value.lhs.kind, OperandKind::LiteralString);
    assert!(!assignment.value.is_binary());
}

#[test]
fn operator_literal_is_verbatim() {
    let res = dump(&assign("IDENTIFIER(a) EQUAL(=>) NUMBER(1)"));

    insta::assert_snapshot!(res, @r"
    Program()
      Assignment(r)
        Expression()
          Operand(a)
          Operator(=>)
          Operand(1)
    ");
}

#[test]
fn string_operand_on_left_of_operator() {
    let res = dump(&assign("LITERAL_STRING(a) SUM IDENTIFIER(b)"));

    insta::assert_snapshot!(res, @r"
    Program()
      Assignment(r)
        Expression()
          Operand(a)
          Operator(+)
          Operand(b)
    ");
}

#[test]
fn string_operand_after_operator() {
    let res = dump_err(&assign("IDENTIFIER(a) SUM LITERAL_STRING(b)"));

    insta::assert_snapshot!(res, @"syntax error: unexpected token Token(LITERAL_STRING, b) at position 5 after operator");
}

#[test]
fn chained_operators_are_rejected() {
    let res = dump_err(&assign("NUMBER(1) SUM NUMBER(2) SUM NUMBER(3)"));

    insta::assert_snapshot!(res, @"unexpected token Token(SUM, +) at position 6, expected COMMAND_END");
}

#[test]
fn operator_without_left_operand() {
    let res = dump_err(&assign("SUM NUMBER(1)"));

    insta::assert_snapshot!(res, @"syntax error: unexpected token Token(SUM, +) at position 3 in expression");
}

#[test]
fn missing_operand_after_operator() {
    let res = dump_err(&assign("NUMBER(1) MULTIPLY"));

    insta::assert_snapshot!(res, @"syntax error: unexpected token Token(COMMAND_END, ;) at position 5 after operator");
}

#[test]
fn operand_at_end_of_stream() {
    let res = dump_err("PROGRAM_START IDENTIFIER(r) ASSIGN");

    insta::assert_snapshot!(res, @"unexpected end of token stream at position 3, expected one of IDENTIFIER, NUMBER, LITERAL_STRING");
}

#[test]
fn trailing_operand_at_end_of_stream() {
    let res = dump_err("PROGRAM_START IDENTIFIER(r) ASSIGN NUMBER(1) LESS");

    insta::assert_snapshot!(res, @"unexpected end of token stream at position 5, expected IDENTIFIER or NUMBER");
}

#[test]
fn parenthesized_subexpression_is_rejected() {
    let res = dump_err(&assign("LEFT_PAREN NUMBER(1) RIGHT_PAREN"));

    insta::assert_snapshot!(res, @"syntax error: unexpected token Token(LEFT_PAREN, () at position 3 in expression");
}
