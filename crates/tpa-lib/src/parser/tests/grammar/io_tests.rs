use crate::test_utils::{dump, dump_err};

#[test]
fn input_stores_target_as_value() {
    let res = dump(
        "PROGRAM_START DATA_INPUT(ler) LEFT_PAREN IDENTIFIER(nome) RIGHT_PAREN COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      Input(nome)
    ");
}

#[test]
fn input_requires_identifier() {
    let res = dump_err(
        "PROGRAM_START DATA_INPUT LEFT_PAREN NUMBER(1) RIGHT_PAREN COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @"unexpected token Token(NUMBER, 1) at position 3, expected IDENTIFIER");
}

#[test]
fn input_rejects_expression() {
    let res = dump_err(
        "PROGRAM_START DATA_INPUT LEFT_PAREN IDENTIFIER(a) SUM NUMBER(1) RIGHT_PAREN COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @"unexpected token Token(SUM, +) at position 4, expected RIGHT_PAREN");
}

#[test]
fn output_of_string_literal() {
    let res = dump(
        "PROGRAM_START DATA_OUTPUT LEFT_PAREN LITERAL_STRING(ola) RIGHT_PAREN COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      Output()
        Expression()
          Operand(ola)
    ");
}

#[test]
fn output_of_binary_expression() {
    let res = dump(
        "PROGRAM_START DATA_OUTPUT LEFT_PAREN NUMBER(6) DIVIDE NUMBER(2) RIGHT_PAREN COMMAND_END PROGRAM_END",
    );

    insta::assert_snapshot!(res, @r"
    Program()
      Output()
        Expression()
          Operand(6)
          Operator(/)
          Operand(2)
    ");
}

#[test]
fn output_missing_command_end() {
    let res = dump_err(
        "PROGRAM_START DATA_OUTPUT LEFT_PAREN NUMBER(1) RIGHT_PAREN PROGRAM_END",
    );

    insta::assert_snapshot!(res, @"unexpected token Token(PROGRAM_END, program_end) at position 5, expected COMMAND_END");
}
